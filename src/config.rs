// src/config.rs
use crate::domain::pagination::PageSize;
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    database_max_connections: u32,
    listen_addr: String,
    articles_per_page: PageSize,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://pressroom.db?mode=rwc".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_max_connections() -> u32 {
    16
}

/// Parse an optional numeric variable, rejecting anything that is set but
/// not a positive integer.
fn positive_var(name: &'static str, default: u64) -> Result<u64, ConfigError> {
    match env::var(name) {
        Err(_) => Ok(default),
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|v| *v > 0)
            .ok_or_else(|| ConfigError::Invalid(format!("{name} must be a positive integer"))),
    }
}

impl AppConfig {
    /// Build configuration from environment variables. Uses sensible defaults
    /// for optional values and validates numeric keys.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| default_database_url());
        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());

        let database_max_connections = u32::try_from(positive_var(
            "DATABASE_MAX_CONNECTIONS",
            u64::from(default_max_connections()),
        )?)
        .map_err(|_| ConfigError::Invalid("DATABASE_MAX_CONNECTIONS is too large".into()))?;

        let articles_per_page = PageSize::new(positive_var("ARTICLES_PER_PAGE", PageSize::DEFAULT)?)
            .map_err(|err| ConfigError::Invalid(err.to_string()))?;

        Ok(Self {
            database_url,
            database_max_connections,
            listen_addr,
            articles_per_page,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn articles_per_page(&self) -> PageSize {
        self.articles_per_page
    }
}
