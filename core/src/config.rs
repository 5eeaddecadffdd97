//! Client configuration.

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "SOCIAL_API_BASE_URL";

pub const DEFAULT_BASE_URL: &str = "https://api.twitter.com/1.1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Read `SOCIAL_API_BASE_URL`, falling back to the public API root.
    pub fn from_env() -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
