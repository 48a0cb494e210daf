//! Client configuration.
//!
//! Built once by the host and handed to the transport and client. The base
//! URL is the only value read from the environment.

use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(30_000);
pub const BASE_URL_ENV: &str = "ASSIST_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Self::default()
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like `from_env`, reading variables through `lookup`. Blank values
    /// count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(BASE_URL_ENV) {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_localhost_and_thirty_seconds() {
        let config = ClientConfig::from_lookup(|_| None);
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.timeout, Duration::from_millis(30_000));
    }

    #[test]
    fn reads_base_url_from_env_var() {
        let config = ClientConfig::from_lookup(|key| {
            (key == BASE_URL_ENV).then(|| "https://api.example.org".to_string())
        });
        assert_eq!(config.base_url, "https://api.example.org");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn blank_env_var_falls_back() {
        let config = ClientConfig::from_lookup(|_| Some("   ".to_string()));
        assert_eq!(config, ClientConfig::default());
    }
}
