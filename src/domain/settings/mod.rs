//! Validation settings and the store they are read from

use serde::Deserialize;

#[cfg(test)]
use mockall::automock;

/// Operator-controlled settings, read before each check
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ValidationSettings {
    pub api_key: Option<String>,
    pub plugin_enabled: bool,
    pub receive_notification_emails: bool,
    pub notification_email: String,
}

impl ValidationSettings {
    /// Key to present to the verification API, if one is set
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.is_empty())
    }

    /// Address that should receive operator notifications, if enabled
    pub fn notification_recipient(&self) -> Option<&str> {
        if self.receive_notification_emails && !self.notification_email.is_empty() {
            Some(&self.notification_email)
        } else {
            None
        }
    }
}

/// Read-only access to the current settings
#[cfg_attr(test, automock)]
pub trait SettingsProvider: Send + Sync {
    /// Snapshot of the settings; callers treat it as immutable for one check
    fn current(&self) -> ValidationSettings;
}
