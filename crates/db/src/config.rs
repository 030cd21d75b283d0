use sqlx::postgres::PgConnectOptions;

/// Database connection settings loaded from environment variables.
///
/// `DATABASE_URL`, when set, takes precedence over the discrete values.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Full connection URL (`DATABASE_URL`).
    pub url: Option<String>,
    /// Host (default: `localhost`).
    pub host: String,
    /// Port (default: `5432`).
    pub port: u16,
    /// User (default: `postgres`).
    pub user: String,
    /// Password (default: empty).
    pub password: String,
    /// Database name (default: `tienda_api`).
    pub name: String,
    /// Pool size (default: `1`, a single shared connection).
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var              | Default      |
    /// |----------------------|--------------|
    /// | `DATABASE_URL`       | unset        |
    /// | `DB_HOST`            | `localhost`  |
    /// | `DB_PORT`            | `5432`       |
    /// | `DB_USER`            | `postgres`   |
    /// | `DB_PASSWORD`        | empty        |
    /// | `DB_NAME`            | `tienda_api` |
    /// | `DB_MAX_CONNECTIONS` | `1`          |
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let url = var("DATABASE_URL").filter(|s| !s.is_empty());
        let host = var("DB_HOST").unwrap_or_else(|| "localhost".into());
        let port: u16 = var("DB_PORT")
            .unwrap_or_else(|| "5432".into())
            .parse()
            .expect("DB_PORT must be a valid u16");
        let user = var("DB_USER").unwrap_or_else(|| "postgres".into());
        let password = var("DB_PASSWORD").unwrap_or_default();
        let name = var("DB_NAME").unwrap_or_else(|| "tienda_api".into());
        let max_connections: u32 = var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|| "1".into())
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        Self {
            url,
            host,
            port,
            user,
            password,
            name,
            max_connections,
        }
    }

    /// Build sqlx connect options from either the URL or the discrete values.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        match &self.url {
            Some(url) => url.parse(),
            None => Ok(PgConnectOptions::new()
                .host(&self.host)
                .port(self.port)
                .username(&self.user)
                .password(&self.password)
                .database(&self.name)),
        }
    }
}
