//! Connection settings for the REST collaborator.

use std::time::Duration;

use thiserror::Error;

pub const API_URL_VAR: &str = "STOCKDESK_API_URL";
pub const TIMEOUT_VAR: &str = "STOCKDESK_HTTP_TIMEOUT_SECS";

const DEFAULT_API_URL: &str = "http://localhost:3000";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be an http(s) URL, got '{value}'")]
    InvalidUrl { var: &'static str, value: String },
    #[error("{var} must be a positive number of seconds, got '{value}'")]
    InvalidTimeout { var: &'static str, value: String },
    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read settings through `lookup`; unset or blank variables fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        if let Some(url) = get(API_URL_VAR) {
            config = config.with_api_url(url)?;
        }
        if let Some(raw) = get(TIMEOUT_VAR) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or(ConfigError::InvalidTimeout {
                    var: TIMEOUT_VAR,
                    value: raw.clone(),
                })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Override the base URL (e.g. from a CLI flag).
    pub fn with_api_url(mut self, url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into().trim().trim_end_matches('/').to_string();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl {
                var: API_URL_VAR,
                value: url,
            });
        }
        self.api_url = url;
        Ok(self)
    }

    pub fn http_client(&self) -> Result<reqwest::Client, ConfigError> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api_url, "http://localhost:3000");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn reads_and_normalises_values() {
        let config = ClientConfig::from_lookup(lookup(&[
            (API_URL_VAR, "https://stock.example.com/api/"),
            (TIMEOUT_VAR, " 3 "),
        ]))
        .unwrap();
        assert_eq!(config.api_url, "https://stock.example.com/api");
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            ClientConfig::from_lookup(lookup(&[(API_URL_VAR, "localhost:3000")])),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert!(matches!(
            ClientConfig::from_lookup(lookup(&[(TIMEOUT_VAR, "0")])),
            Err(ConfigError::InvalidTimeout { .. })
        ));
    }
}
