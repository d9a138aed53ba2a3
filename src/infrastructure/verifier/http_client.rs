use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;

use crate::domain::{DomainError, FetchFailure};

/// Trait for HTTP client operations (for mocking)
#[async_trait]
pub trait HttpClientTrait: Send + Sync + std::fmt::Debug {
    async fn get_json(&self, url: &Url) -> Result<serde_json::Value, FetchFailure>;
}

/// Real HTTP client using reqwest
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Build a client whose requests give up after `timeout`
    pub fn with_timeout(timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpClientTrait for HttpClient {
    async fn get_json(&self, url: &Url) -> Result<serde_json::Value, FetchFailure> {
        let response = self
            .client
            .get(url.clone())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(fetch_failure)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchFailure::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(fetch_failure)?;

        serde_json::from_slice(&body).map_err(|e| FetchFailure::Decode(e.to_string()))
    }
}

/// The URL carries the API key, so it is stripped before the error is rendered
fn fetch_failure(error: reqwest::Error) -> FetchFailure {
    if error.is_timeout() {
        FetchFailure::Timeout
    } else if error.is_connect() {
        FetchFailure::Connect(error.without_url().to_string())
    } else {
        FetchFailure::Request(error.without_url().to_string())
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Mutex, RwLock};

    #[derive(Debug, Default)]
    pub struct MockHttpClient {
        responses: RwLock<HashMap<String, serde_json::Value>>,
        errors: RwLock<HashMap<String, FetchFailure>>,
        requested: Mutex<Vec<String>>,
    }

    impl MockHttpClient {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_response(self, url: impl Into<String>, response: serde_json::Value) -> Self {
            self.responses.write().unwrap().insert(url.into(), response);
            self
        }

        pub fn with_error(self, url: impl Into<String>, error: FetchFailure) -> Self {
            self.errors.write().unwrap().insert(url.into(), error);
            self
        }

        pub fn requested(&self) -> Vec<String> {
            self.requested.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl HttpClientTrait for MockHttpClient {
        async fn get_json(&self, url: &Url) -> Result<serde_json::Value, FetchFailure> {
            self.requested.lock().unwrap().push(url.to_string());

            if let Some(error) = self.errors.read().unwrap().get(url.as_str()) {
                return Err(error.clone());
            }

            self.responses
                .read()
                .unwrap()
                .get(url.as_str())
                .cloned()
                .ok_or_else(|| FetchFailure::Status(404))
        }
    }
}
