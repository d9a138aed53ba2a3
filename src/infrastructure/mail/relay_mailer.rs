//! HTTP mail relay client

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{DomainError, Mailer, NotificationContext};

/// JSON message posted to the relay
#[derive(Debug, Clone, Serialize)]
pub struct RelayMessage<'a> {
    pub id: Uuid,
    pub template: &'a str,
    pub from: &'a str,
    pub to: &'a str,
    pub context: &'a NotificationContext,
    pub sent_at: DateTime<Utc>,
}

/// Mailer that hands messages to an HTTP mail relay
#[derive(Debug, Clone)]
pub struct RelayMailer {
    http_client: Client,
    url: String,
    from: String,
}

impl RelayMailer {
    pub fn new(
        url: impl Into<String>,
        from: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        let url = url.into();

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(DomainError::configuration(
                "Mail relay URL must start with http:// or https://",
            ));
        }

        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            url,
            from: from.into(),
        })
    }
}

#[async_trait]
impl Mailer for RelayMailer {
    async fn send(
        &self,
        template: &str,
        context: &NotificationContext,
        to: &str,
    ) -> Result<(), DomainError> {
        let message = RelayMessage {
            id: Uuid::new_v4(),
            template,
            from: &self.from,
            to,
            context,
            sent_at: Utc::now(),
        };

        let response = self
            .http_client
            .post(&self.url)
            .header("X-Mail-Message-Id", message.id.to_string())
            .json(&message)
            .send()
            .await
            .map_err(|e| {
                let error_msg = if e.is_timeout() {
                    "Request timed out".to_string()
                } else if e.is_connect() {
                    "Connection failed".to_string()
                } else {
                    format!("Request failed: {}", e)
                };
                warn!(message_id = %message.id, error = %error_msg, "Mail relay request failed");
                DomainError::provider("mail-relay", error_msg)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                message_id = %message.id,
                status = status.as_u16(),
                "Mail relay rejected message"
            );
            return Err(DomainError::provider(
                "mail-relay",
                format!("HTTP status {}", status.as_u16()),
            ));
        }

        info!(message_id = %message.id, to = %to, template = %template, "Notification relayed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Degradation, INFORM_TEMPLATE};
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_send_posts_message_to_relay() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/send"))
            .and(body_partial_json(serde_json::json!({
                "template": INFORM_TEMPLATE,
                "from": "blocker@example.com",
                "to": "ops@example.com",
                "context": { "type": "fail_key" }
            })))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&server)
            .await;

        let mailer = RelayMailer::new(
            format!("{}/send", server.uri()),
            "blocker@example.com",
            Duration::from_secs(2),
        )
        .unwrap();
        let context = NotificationContext::from(Degradation::InvalidApiKey);

        mailer
            .send(INFORM_TEMPLATE, &context, "ops@example.com")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_relay_error_status_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let mailer =
            RelayMailer::new(server.uri(), "blocker@example.com", Duration::from_secs(2)).unwrap();
        let context = NotificationContext::from(Degradation::ServerUnavailable);

        let result = mailer.send(INFORM_TEMPLATE, &context, "ops@example.com").await;

        assert!(matches!(result, Err(DomainError::Provider { .. })));
    }

    #[test]
    fn test_relay_url_must_be_http() {
        let result = RelayMailer::new("smtp://mail.example.com", "a@b.c", Duration::from_secs(1));
        assert!(matches!(result, Err(DomainError::Configuration { .. })));
    }
}
