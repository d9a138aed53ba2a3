use std::time::Duration;

use serde::Deserialize;

use crate::domain::{DomainError, ValidationSettings};

/// Default endpoint of the block-disposable-email easy API
pub const DEFAULT_VERIFIER_BASE_URL: &str = "http://check.block-disposable-email.com/easyapi/json";

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub blocker: ValidationSettings,
    pub verifier: VerifierConfig,
    pub mail: MailConfig,
    pub gate: GateConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Verification API client settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VerifierConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

/// Outbound mail settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MailConfig {
    /// HTTP mail relay; notifications are only logged when unset
    pub relay_url: Option<String>,
    pub timeout_secs: u64,
    pub from: String,
}

/// Registration gate settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Redirect target when a blocked submission has no `Referer`
    pub fallback_redirect: String,
    pub max_body_bytes: usize,
    /// Serve `GET /api/check`; every call spends a paid lookup
    pub expose_check_endpoint: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_VERIFIER_BASE_URL.to_string(),
            timeout_secs: 5,
        }
    }
}

impl VerifierConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            relay_url: None,
            timeout_secs: 10,
            from: "noreply@localhost".to_string(),
        }
    }
}

impl MailConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            fallback_redirect: "/".to_string(),
            max_body_bytes: 64 * 1024,
            expose_check_endpoint: false,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config = ::config::Config::builder()
            .add_source(::config::File::with_name("config/default").required(false))
            .add_source(::config::File::with_name("config/local").required(false))
            .add_source(
                ::config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Reject settings the services cannot start with
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.verifier.timeout_secs == 0 {
            return Err(DomainError::configuration(
                "verifier.timeout_secs must be greater than 0",
            ));
        }

        if self.mail.timeout_secs == 0 {
            return Err(DomainError::configuration(
                "mail.timeout_secs must be greater than 0",
            ));
        }

        if !self.verifier.base_url.starts_with("http://")
            && !self.verifier.base_url.starts_with("https://")
        {
            return Err(DomainError::configuration(
                "verifier.base_url must start with http:// or https://",
            ));
        }

        if self.gate.max_body_bytes == 0 {
            return Err(DomainError::configuration(
                "gate.max_body_bytes must be greater than 0",
            ));
        }

        if self.blocker.receive_notification_emails && self.blocker.notification_email.is_empty() {
            return Err(DomainError::configuration(
                "blocker.notification_email is required when receive_notification_emails is set",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.verifier.base_url, DEFAULT_VERIFIER_BASE_URL);
        assert_eq!(config.verifier.timeout(), Duration::from_secs(5));
        assert!(!config.blocker.plugin_enabled);
        assert!(config.mail.relay_url.is_none());
        assert_eq!(config.gate.fallback_redirect, "/");
        assert!(!config.gate.expose_check_endpoint);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let mut config = AppConfig::default();
        config.verifier.timeout_secs = 0;
        assert!(matches!(
            config.validate(),
            Err(DomainError::Configuration { .. })
        ));
    }

    #[test]
    fn test_non_http_base_url_is_rejected() {
        let mut config = AppConfig::default();
        config.verifier.base_url = "ftp://check.example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_notifications_without_recipient_are_rejected() {
        let mut config = AppConfig::default();
        config.blocker.receive_notification_emails = true;
        assert!(matches!(
            config.validate(),
            Err(DomainError::Configuration { .. })
        ));

        config.blocker.notification_email = "ops@example.com".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: AppConfig = serde_json::from_value(serde_json::json!({
            "blocker": {
                "api_key": "abc123",
                "plugin_enabled": true
            },
            "logging": { "format": "json" }
        }))
        .unwrap();

        assert_eq!(config.blocker.api_key(), Some("abc123"));
        assert!(config.blocker.plugin_enabled);
        assert!(matches!(config.logging.format, LogFormat::Json));
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.server.port, 8080);
    }
}
