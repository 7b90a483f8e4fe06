mod logging;
mod server;

pub use logging::{DEFAULT_LOG_DIRECTIVE, log_filter};
pub use server::ServerConfig;
