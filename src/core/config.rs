//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use crate::core::api::DEFAULT_BACKEND_URL;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the auth/catalog backend, handed to the client through the shell
    /// Example: https://api.reelbase.dev
    pub backend_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            backend_url: std::env::var("BACKEND_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
        }
    }

    /// Check if a backend URL is configured
    pub fn has_backend_url(&self) -> bool {
        self.backend_url.is_some()
    }

    /// Backend URL, or the same-origin default
    pub fn backend_url(&self) -> &str {
        self.backend_url.as_deref().unwrap_or(DEFAULT_BACKEND_URL)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_with_backend_url() {
        let config = Config {
            backend_url: Some("https://api.reelbase.dev".to_string()),
        };

        assert!(config.has_backend_url());
        assert_eq!(config.backend_url(), "https://api.reelbase.dev");
    }

    #[test]
    fn test_config_without_backend_url() {
        let config = Config { backend_url: None };

        assert!(!config.has_backend_url());
        assert_eq!(config.backend_url(), "/api");
    }
}
