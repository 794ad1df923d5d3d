use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct SecurityConfig {
    /// Exact origins allowed by CORS. A `"*"` entry allows every origin.
    #[serde(default = "crate::config::defaults::default_cors_allowed_origins")]
    pub cors_allowed_origins: Vec<String>,
    #[serde(default = "crate::config::defaults::default_metrics_allow_private_only")]
    pub metrics_allow_private_only: bool,
}

impl SecurityConfig {
    pub fn allows_any_origin(&self) -> bool {
        self.cors_allowed_origins
            .iter()
            .any(|origin| origin.trim() == "*")
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            cors_allowed_origins: crate::config::defaults::default_cors_allowed_origins(),
            metrics_allow_private_only: crate::config::defaults::default_metrics_allow_private_only(),
        }
    }
}
