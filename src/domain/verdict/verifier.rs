use async_trait::async_trait;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

use super::RemoteVerdict;

/// Failure of the outbound lookup, before any verdict could be read
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchFailure {
    #[error("Request timed out")]
    Timeout,

    #[error("Connection failed: {0}")]
    Connect(String),

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Request failed: {0}")]
    Request(String),
}

/// Looks up how the verification service classifies a domain
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DomainVerifier: Send + Sync {
    async fn lookup(&self, domain: &str, api_key: &str) -> Result<RemoteVerdict, FetchFailure>;
}
