use std::path::PathBuf;

use tienda_db::DatabaseConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// File that receives one line per request (default: `server.log`).
    pub request_log_path: PathBuf,
    /// Database connection settings.
    pub database: DatabaseConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var            | Default      |
    /// |--------------------|--------------|
    /// | `HOST`             | `0.0.0.0`    |
    /// | `PORT`             | `3000`       |
    /// | `REQUEST_LOG_PATH` | `server.log` |
    ///
    /// Database variables are documented on [`DatabaseConfig::from_env`].
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let host = var("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port: u16 = var("PORT")
            .unwrap_or_else(|| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let request_log_path = var("REQUEST_LOG_PATH")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "server.log".into())
            .into();

        let database = DatabaseConfig::from_vars(&var);

        Self {
            host,
            port,
            request_log_path,
            database,
        }
    }
}
