//! Mailer implementations

mod log_mailer;
mod relay_mailer;

pub use log_mailer::LogMailer;
pub use relay_mailer::{RelayMailer, RelayMessage};

use std::sync::Arc;

use crate::config::MailConfig;
use crate::domain::{DomainError, Mailer};

/// Build the mailer selected by configuration
pub fn create_mailer(config: &MailConfig) -> Result<Arc<dyn Mailer>, DomainError> {
    match config.relay_url.as_deref().filter(|url| !url.is_empty()) {
        Some(url) => Ok(Arc::new(RelayMailer::new(url, &config.from, config.timeout())?)),
        None => Ok(Arc::new(LogMailer::new())),
    }
}
