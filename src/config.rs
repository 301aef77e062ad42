use serde::{Deserialize, Serialize};

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000/api";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub max_upload_mb: u32,
    pub show_demo_credentials: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: DEFAULT_BACKEND_URL.to_string(),
            backend_url_production: DEFAULT_BACKEND_URL.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            max_upload_mb: 50,
            show_demo_credentials: true,
        }
    }
}

impl AppConfig {
    /// Build the configuration from variables captured at compile time (see `build.rs`)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url_development: option_env!("BACKEND_URL_DEVELOPMENT")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url_development),
            backend_url_production: option_env!("BACKEND_URL_PRODUCTION")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url_production),
            environment: option_env!("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            max_upload_mb: option_env!("MAX_UPLOAD_MB")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_upload_mb),
            show_demo_credentials: option_env!("SHOW_DEMO_CREDENTIALS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.show_demo_credentials),
        }
    }

    /// Backend base URL for the current environment, without trailing slash
    pub fn backend_url(&self) -> &str {
        let url = match self.environment.as_str() {
            "production" => &self.backend_url_production,
            _ => &self.backend_url_development,
        };
        url.trim_end_matches('/')
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Upload limit in bytes
    pub fn max_upload_bytes(&self) -> u64 {
        u64::from(self.max_upload_mb) * 1024 * 1024
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_url_follows_environment() {
        let mut config = AppConfig {
            backend_url_development: "http://dev.local/api/".to_string(),
            backend_url_production: "https://prod.example/api".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.backend_url(), "http://dev.local/api");

        config.environment = "production".to_string();
        assert_eq!(config.backend_url(), "https://prod.example/api");
    }

    #[test]
    fn upload_limit_is_in_mebibytes() {
        let config = AppConfig::default();
        assert_eq!(config.max_upload_bytes(), 50 * 1024 * 1024);
    }
}
