//! Operator notifications

use async_trait::async_trait;
use serde::Serialize;

#[cfg(test)]
use mockall::automock;

use super::error::DomainError;
use super::outcome::Degradation;

/// Mail template used for operator notifications
pub const INFORM_TEMPLATE: &str = "disposable_email_blocker::mail.inform";

/// Variables rendered into the notification template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationContext {
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
}

impl From<Degradation> for NotificationContext {
    fn from(degradation: Degradation) -> Self {
        Self {
            kind: degradation.code().to_string(),
            content: degradation.operator_message().to_string(),
        }
    }
}

/// Sends templated email
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(
        &self,
        template: &str,
        context: &NotificationContext,
        to: &str,
    ) -> Result<(), DomainError>;
}
