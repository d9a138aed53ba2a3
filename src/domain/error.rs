use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Provider error: {provider} - {message}")]
    Provider { provider: String, message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error() {
        let error = DomainError::configuration("timeout_secs must be greater than 0");
        assert_eq!(
            error.to_string(),
            "Configuration error: timeout_secs must be greater than 0"
        );
    }

    #[test]
    fn test_provider_error() {
        let error = DomainError::provider("mail-relay", "HTTP 502");
        assert_eq!(error.to_string(), "Provider error: mail-relay - HTTP 502");
    }
}
