use std::env;

const DEFAULT_DATABASE_URL: &str = "sqlite://finadvisor.db";
const DEFAULT_PORT: u16 = 5000;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub log_dir: String,
    pub max_connections: Option<u32>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            port: env::var("PORT").ok().and_then(|p| p.parse().ok()).unwrap_or(DEFAULT_PORT),
            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "./logs".to_string()),
            max_connections: env::var("DB_MAX_CONNECTIONS").ok().and_then(|n| n.parse().ok()),
        }
    }

    pub fn is_postgres(&self) -> bool {
        self.database_url.starts_with("postgres://") || self.database_url.starts_with("postgresql://")
    }
}
