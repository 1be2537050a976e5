/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// SQLite connection URL (default: `sqlite://gigbook.db?mode=rwc`).
    pub database_url: String,
    /// Upper bound on pooled database connections (default: `5`).
    pub db_max_connections: u32,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Venues and artists shown on the home page (default: `10`).
    pub home_recent_limit: i64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                        |
    /// |------------------------|--------------------------------|
    /// | `HOST`                 | `0.0.0.0`                      |
    /// | `PORT`                 | `5000`                         |
    /// | `DATABASE_URL`         | `sqlite://gigbook.db?mode=rwc` |
    /// | `DB_MAX_CONNECTIONS`   | `5`                            |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                           |
    /// | `HOME_RECENT_LIMIT`    | `10`                           |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://gigbook.db?mode=rwc".into());

        let db_max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".into())
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let home_recent_limit: i64 = std::env::var("HOME_RECENT_LIMIT")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("HOME_RECENT_LIMIT must be a valid i64");

        Self {
            host,
            port,
            database_url,
            db_max_connections,
            request_timeout_secs,
            home_recent_limit,
        }
    }
}
