use async_trait::async_trait;
use tracing::info;

use crate::domain::{DomainError, Mailer, NotificationContext};

/// Mailer that writes notifications to the log instead of delivering them
#[derive(Debug, Default, Clone)]
pub struct LogMailer;

impl LogMailer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Mailer for LogMailer {
    async fn send(
        &self,
        template: &str,
        context: &NotificationContext,
        to: &str,
    ) -> Result<(), DomainError> {
        info!(
            template = %template,
            to = %to,
            kind = %context.kind,
            content = %context.content,
            "Notification email (log only)"
        );
        Ok(())
    }
}
