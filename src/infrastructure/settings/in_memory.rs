//! In-memory settings store

use std::sync::RwLock;

use tracing::info;

use crate::domain::{SettingsProvider, ValidationSettings};

/// Thread-safe settings holder that can be swapped at runtime.
///
/// Each read returns an owned snapshot, so a replacement never affects a
/// check that is already running.
#[derive(Debug, Default)]
pub struct InMemorySettingsProvider {
    settings: RwLock<ValidationSettings>,
}

impl InMemorySettingsProvider {
    pub fn new(settings: ValidationSettings) -> Self {
        Self {
            settings: RwLock::new(settings),
        }
    }

    /// Replace the stored settings
    pub fn replace(&self, settings: ValidationSettings) {
        info!(
            plugin_enabled = settings.plugin_enabled,
            receive_notification_emails = settings.receive_notification_emails,
            "Validation settings replaced"
        );

        let mut guard = self
            .settings
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = settings;
    }
}

impl SettingsProvider for InMemorySettingsProvider {
    fn current(&self) -> ValidationSettings {
        self.settings
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}
