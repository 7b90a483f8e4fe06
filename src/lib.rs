//! # Turnin
//!
//! A small backend that registers students, assignment metadata, and
//! versioned student submissions, usable both as a standalone binary and as
//! a library.
//!
//! ## Library Usage
//!
//! ```toml
//! [dependencies]
//! turnin = { version = "0.0.1", default-features = false }
//! ```
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use turnin::server::{AppState, create_router};
//! use turnin::store::{SqliteStore, Store};
//!
//! let store = SqliteStore::new("./turnin.db").unwrap();
//! store.initialize().unwrap();
//!
//! let state = Arc::new(AppState::new(Arc::new(store)));
//! let router = create_router(state);
//! // Serve with axum...
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` (default): Builds the `turnin` binary. Disable with `default-features = false`.

pub mod config;
pub mod error;
pub mod server;
pub mod store;
pub mod types;
