use async_trait::async_trait;
use reqwest::Url;
use tracing::debug;

use super::http_client::HttpClientTrait;
use crate::domain::{DomainError, DomainVerifier, FetchFailure, RemoteVerdict};

/// Client for the block-disposable-email easy API.
///
/// Lookups go to `{base_url}/{api_key}/{domain}` and expect a JSON verdict.
#[derive(Debug)]
pub struct BlockDisposableVerifier<C: HttpClientTrait> {
    client: C,
    base_url: Url,
}

impl<C: HttpClientTrait> BlockDisposableVerifier<C> {
    pub fn new(client: C, base_url: &str) -> Result<Self, DomainError> {
        let base_url = Url::parse(base_url).map_err(|e| {
            DomainError::configuration(format!("Invalid verifier base URL '{}': {}", base_url, e))
        })?;

        if base_url.cannot_be_a_base() {
            return Err(DomainError::configuration(format!(
                "Verifier base URL '{}' cannot carry path segments",
                base_url
            )));
        }

        Ok(Self { client, base_url })
    }

    fn lookup_url(&self, domain: &str, api_key: &str) -> Result<Url, FetchFailure> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|_| FetchFailure::Request("base URL cannot carry path segments".to_string()))?
            .pop_if_empty()
            .push(api_key)
            .push(domain);

        Ok(url)
    }
}

#[async_trait]
impl<C: HttpClientTrait> DomainVerifier for BlockDisposableVerifier<C> {
    async fn lookup(&self, domain: &str, api_key: &str) -> Result<RemoteVerdict, FetchFailure> {
        let url = self.lookup_url(domain, api_key)?;

        debug!(base_url = %self.base_url, domain = %domain, "Looking up domain");

        let body = self.client.get_json(&url).await?;

        serde_json::from_value(body).map_err(|e| FetchFailure::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RequestStatus;
    use crate::infrastructure::verifier::http_client::mock::MockHttpClient;
    use crate::infrastructure::verifier::HttpClient;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const BASE_URL: &str = "http://check.block-disposable-email.com/easyapi/json";
    const LOOKUP_URL: &str =
        "http://check.block-disposable-email.com/easyapi/json/test-key/tempmail-example.test";

    #[tokio::test]
    async fn test_lookup_builds_url_from_key_and_domain() {
        let client = MockHttpClient::new().with_response(
            LOOKUP_URL,
            serde_json::json!({"request_status": "success", "domain_status": "block"}),
        );
        let verifier = BlockDisposableVerifier::new(client, BASE_URL).unwrap();

        let verdict = verifier
            .lookup("tempmail-example.test", "test-key")
            .await
            .unwrap();

        assert_eq!(verdict.status(), RequestStatus::Success);
        assert!(verdict.is_blocked());
        assert_eq!(verifier.client.requested(), vec![LOOKUP_URL.to_string()]);
    }

    #[tokio::test]
    async fn test_trailing_slash_in_base_url() {
        let client = MockHttpClient::new()
            .with_response(LOOKUP_URL, serde_json::json!({"request_status": "fail_key"}));
        let verifier = BlockDisposableVerifier::new(client, &format!("{}/", BASE_URL)).unwrap();

        let verdict = verifier
            .lookup("tempmail-example.test", "test-key")
            .await
            .unwrap();

        assert_eq!(verdict.status(), RequestStatus::FailKey);
    }

    #[tokio::test]
    async fn test_key_is_path_encoded() {
        let client = MockHttpClient::new();
        let verifier = BlockDisposableVerifier::new(client, BASE_URL).unwrap();

        let _ = verifier.lookup("example.com", "a/b?c").await;

        assert_eq!(
            verifier.client.requested(),
            vec![format!("{}/a%2Fb%3Fc/example.com", BASE_URL)]
        );
    }

    #[tokio::test]
    async fn test_unexpected_body_is_decode_failure() {
        let client =
            MockHttpClient::new().with_response(LOOKUP_URL, serde_json::json!({"status": "ok"}));
        let verifier = BlockDisposableVerifier::new(client, BASE_URL).unwrap();

        let result = verifier.lookup("tempmail-example.test", "test-key").await;

        assert!(matches!(result, Err(FetchFailure::Decode(_))));
    }

    #[tokio::test]
    async fn test_transport_failure_is_passed_through() {
        let client = MockHttpClient::new().with_error(LOOKUP_URL, FetchFailure::Timeout);
        let verifier = BlockDisposableVerifier::new(client, BASE_URL).unwrap();

        let result = verifier.lookup("tempmail-example.test", "test-key").await;

        assert_eq!(result, Err(FetchFailure::Timeout));
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let result = BlockDisposableVerifier::new(MockHttpClient::new(), "not a url");
        assert!(matches!(result, Err(DomainError::Configuration { .. })));

        let result = BlockDisposableVerifier::new(MockHttpClient::new(), "mailto:ops@example.com");
        assert!(matches!(result, Err(DomainError::Configuration { .. })));
    }

    #[tokio::test]
    async fn test_lookup_against_http_server() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/easyapi/json/live-key/example.org"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "request_status": "fail_key_low_credits",
                "servertime": "2024-05-01 10:00:00"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::with_timeout(Duration::from_secs(2)).unwrap();
        let verifier =
            BlockDisposableVerifier::new(client, &format!("{}/easyapi/json", server.uri()))
                .unwrap();

        let verdict = verifier.lookup("example.org", "live-key").await.unwrap();

        assert_eq!(verdict.status(), RequestStatus::FailKeyLowCredits);
    }
}
