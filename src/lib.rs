//! Disposable Email Blocker
//!
//! Screens user self-registration and rejects addresses whose domain a
//! third-party validation API classifies as disposable:
//! - Decision engine mapping API verdicts onto allow / deny / warn / error
//! - Registration gate that runs before the registration handler
//! - Operator notifications when the validation service degrades

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::{
    gate::RegistrationGate,
    mail::create_mailer,
    settings::InMemorySettingsProvider,
    verifier::{BlockDisposableVerifier, HttpClient},
};
use tracing::{info, warn};

/// Create the application state with all services initialized
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let settings = Arc::new(InMemorySettingsProvider::new(config.blocker.clone()));

    let client = HttpClient::with_timeout(config.verifier.timeout())?;
    let verifier = Arc::new(BlockDisposableVerifier::new(
        client,
        &config.verifier.base_url,
    )?);

    let mailer = create_mailer(&config.mail)?;

    if config.blocker.plugin_enabled && config.blocker.api_key().is_none() {
        warn!("Blocker is enabled but no API key is configured; registrations will be rejected");
    }

    info!(
        plugin_enabled = config.blocker.plugin_enabled,
        verifier_timeout_secs = config.verifier.timeout_secs,
        mail_relay = config.mail.relay_url.is_some(),
        "Registration gate initialized"
    );

    let gate = RegistrationGate::new(settings, verifier, mailer);

    Ok(AppState::new(gate, config.gate.clone()))
}
