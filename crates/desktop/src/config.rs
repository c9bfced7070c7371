//! Application configuration (environment with defaults).

use stockdesk_client::{ClientConfig, ConfigError};
use stockdesk_observability::LogFormat;

pub const LOG_FORMAT_VAR: &str = "STOCKDESK_LOG_FORMAT";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub client: ClientConfig,
    pub log_format: LogFormat,
}

#[derive(Debug, thiserror::Error)]
pub enum AppConfigError {
    #[error(transparent)]
    Client(#[from] ConfigError),
    #[error("STOCKDESK_LOG_FORMAT: {0}")]
    LogFormat(#[from] stockdesk_observability::ParseLogFormatError),
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppConfigError> {
        let client = ClientConfig::from_lookup(&lookup)?;
        let log_format = match lookup(LOG_FORMAT_VAR).filter(|v| !v.trim().is_empty()) {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };
        Ok(Self { client, log_format })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_local_server_and_pretty_logs() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.client.api_url, "http://localhost:3000");
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn reads_log_format() {
        let config = AppConfig::from_lookup(|var| (var == LOG_FORMAT_VAR).then(|| "json".to_string())).unwrap();
        assert_eq!(config.log_format, LogFormat::Json);

        let err = AppConfig::from_lookup(|var| (var == LOG_FORMAT_VAR).then(|| "xml".to_string()));
        assert!(matches!(err, Err(AppConfigError::LogFormat(_))));
    }
}
