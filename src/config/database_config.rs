use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "crate::config::defaults::default_db_max_connections")]
    pub max_connections: u32,
    #[serde(default = "crate::config::defaults::default_db_min_connections")]
    pub min_connections: u32,
    #[serde(default = "crate::config::defaults::default_db_acquire_timeout_seconds")]
    pub acquire_timeout_seconds: u64,
    #[serde(default = "crate::config::defaults::default_db_idle_timeout_seconds")]
    pub idle_timeout_seconds: u64,
    #[serde(default = "crate::config::defaults::default_db_max_lifetime_seconds")]
    pub max_lifetime_seconds: u64,
}

impl DatabaseConfig {
    pub fn with_url(url: impl Into<String>) -> Self {
        use crate::config::defaults::*;

        Self {
            url: url.into(),
            max_connections: default_db_max_connections(),
            min_connections: default_db_min_connections(),
            acquire_timeout_seconds: default_db_acquire_timeout_seconds(),
            idle_timeout_seconds: default_db_idle_timeout_seconds(),
            max_lifetime_seconds: default_db_max_lifetime_seconds(),
        }
    }
}
