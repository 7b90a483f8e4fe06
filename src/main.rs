use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use turnin::config::{ServerConfig, log_filter};
use turnin::server::{AppState, create_router};
use turnin::store::{SqliteStore, Store, UnavailableStore};

#[derive(Parser)]
#[command(name = "turnin")]
#[command(about = "Student, assignment, and submission registry server", long_about = None)]
struct Cli {
    /// Host to bind to
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to bind to
    #[arg(long, short, env = "PORT", default_value = "8080")]
    port: u16,

    /// Database location: a file path, a sqlite:// URL, or :memory:
    #[arg(long, env = "DATABASE_URL", default_value = "turnin.db")]
    database_url: String,
}

/// Opens the database, falling back to a store that reports itself
/// unavailable so the server still comes up.
fn open_store(config: &ServerConfig) -> Arc<dyn Store> {
    let opened = SqliteStore::new(config.db_path()).and_then(|store| {
        store.initialize()?;
        Ok(store)
    });

    match opened {
        Ok(store) => {
            info!("Connected to database at {}", config.db_path());
            Arc::new(store)
        }
        Err(e) => {
            error!("Failed to open database at {}: {e}", config.db_path());
            Arc::new(UnavailableStore::new(e.to_string()))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(
            std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(),
        ))
        .init();

    let cli = Cli::parse();

    let config = ServerConfig {
        host: cli.host,
        port: cli.port,
        database_url: cli.database_url,
    };

    let state = Arc::new(AppState::new(open_store(&config)));

    let app = create_router(state);
    let addr = config.socket_addr()?;

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
