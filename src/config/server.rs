use std::net::SocketAddr;

const SQLITE_SCHEME: &str = "sqlite://";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Database location: a file path, a `sqlite://` URL, or `:memory:`.
    pub database_url: String,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }

    /// The filesystem path (or `:memory:`) handed to SQLite.
    #[must_use]
    pub fn db_path(&self) -> &str {
        self.database_url
            .strip_prefix(SQLITE_SCHEME)
            .unwrap_or(&self.database_url)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            database_url: "turnin.db".to_string(),
        }
    }
}
