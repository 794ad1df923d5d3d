pub mod database_config;
pub mod defaults;
pub mod security_config;

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;
use thiserror::Error;

pub use database_config::DatabaseConfig;
pub use security_config::SecurityConfig;

pub const ENV_PREFIX: &str = "SCHOOLS_";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Database configuration is invalid: {0}")]
    Database(String),
    #[error("Security configuration is invalid: {0}")]
    Security(String),
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub app: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub security: SecurityConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "defaults::default_host")]
    pub host: String,
    #[serde(default = "defaults::default_port")]
    pub port: u16,
    #[serde(default = "defaults::default_environment")]
    pub environment: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::default_host(),
            port: defaults::default_port(),
            environment: defaults::default_environment(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "defaults::default_logging_level")]
    pub level: String,
    #[serde(default = "defaults::default_logging_json_format")]
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::default_logging_level(),
            json_format: defaults::default_logging_json_format(),
        }
    }
}

impl AppConfig {
    /// Layers `config/default.toml`, `SCHOOLS_`-prefixed variables
    /// (`__` separates nesting) and the conventional `DATABASE_URL`, `PORT`
    /// and `RUST_LOG` variables, later sources winning.
    pub fn from_env() -> Result<Self, Box<figment::Error>> {
        Self::figment().extract().map_err(Box::new)
    }

    pub fn figment() -> Figment {
        Figment::new()
            .merge(Toml::file("config/default.toml"))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .merge(
                Env::raw()
                    .only(&["DATABASE_URL"])
                    .map(|_| "database.url".into()),
            )
            .merge(Env::raw().only(&["PORT"]).map(|_| "app.port".into()))
            .merge(
                Env::raw()
                    .only(&["RUST_LOG"])
                    .map(|_| "logging.level".into()),
            )
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::Database(
                "DATABASE_URL must be set".to_string(),
            ));
        }

        if self.database.max_connections == 0 {
            return Err(ConfigError::Database(
                "max_connections must be at least 1".to_string(),
            ));
        }

        if self.database.min_connections > self.database.max_connections {
            return Err(ConfigError::Database(
                "min_connections cannot exceed max_connections".to_string(),
            ));
        }

        if self.security.cors_allowed_origins.is_empty() {
            return Err(ConfigError::Security(
                "cors_allowed_origins must list at least one origin".to_string(),
            ));
        }

        Ok(())
    }
}
