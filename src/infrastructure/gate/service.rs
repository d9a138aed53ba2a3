//! Registration gate service translating outcomes into actions

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{
    DecisionEngine, Degradation, DomainVerifier, Mailer, NotificationContext, Outcome,
    SettingsProvider, ValidationSettings, INFORM_TEMPLATE,
};

/// What the host should do with a registration submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Run the registration handler unmodified
    Proceed,
    /// Show `message` to the user and send them back instead of registering
    Block { message: String },
}

/// Screens registration submissions before the registration handler runs
#[derive(Clone)]
pub struct RegistrationGate {
    settings: Arc<dyn SettingsProvider>,
    engine: DecisionEngine,
    mailer: Arc<dyn Mailer>,
}

impl RegistrationGate {
    pub fn new(
        settings: Arc<dyn SettingsProvider>,
        verifier: Arc<dyn DomainVerifier>,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        Self {
            settings,
            engine: DecisionEngine::new(verifier),
            mailer,
        }
    }

    /// Snapshot of the operator settings; one snapshot serves one check
    pub fn settings(&self) -> ValidationSettings {
        self.settings.current()
    }

    /// Whether submissions should be screened at all; read on every call
    pub fn is_enabled(&self) -> bool {
        self.settings.current().plugin_enabled
    }

    /// Evaluate an address without acting on the result
    pub async fn evaluate(&self, settings: &ValidationSettings, email: &str) -> Outcome {
        self.engine.evaluate(email, settings.api_key()).await
    }

    /// Screen one submission. A missing email field is treated as an empty address.
    pub async fn screen(&self, settings: &ValidationSettings, email: Option<&str>) -> GateDecision {
        let outcome = self
            .engine
            .evaluate(email.unwrap_or_default(), settings.api_key())
            .await;

        match outcome {
            Outcome::Allow => GateDecision::Proceed,
            Outcome::AllowWithWarning(degradation) => {
                match settings.notification_recipient() {
                    Some(recipient) => self.notify(degradation, recipient),
                    None if settings.receive_notification_emails => warn!(
                        code = degradation.code(),
                        "Notification emails are enabled but notification_email is empty"
                    ),
                    None => {}
                }
                GateDecision::Proceed
            }
            Outcome::Deny => {
                info!("Registration blocked: disposable email domain");
                GateDecision::Block {
                    message: Outcome::Deny.message().unwrap_or_default(),
                }
            }
            Outcome::Error(rejection) => {
                info!(class = ?rejection.class(), "Registration blocked: {}", rejection);
                GateDecision::Block {
                    message: rejection.to_string(),
                }
            }
        }
    }

    /// Sends in the background; mail failures are logged and never reach the
    /// registration flow
    fn notify(&self, degradation: Degradation, recipient: &str) {
        let mailer = Arc::clone(&self.mailer);
        let context = NotificationContext::from(degradation);
        let recipient = recipient.to_string();

        tokio::spawn(async move {
            if let Err(e) = mailer.send(INFORM_TEMPLATE, &context, &recipient).await {
                warn!(
                    code = degradation.code(),
                    error = %e,
                    "Failed to send operator notification"
                );
            }
        });
    }
}

impl std::fmt::Debug for RegistrationGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationGate")
            .field("engine", &self.engine)
            .finish_non_exhaustive()
    }
}
