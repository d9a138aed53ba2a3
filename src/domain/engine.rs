//! Decision engine mapping an email address to an [`Outcome`]

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::email::EmailCandidate;
use super::outcome::{Degradation, Outcome, Rejection};
use super::verdict::{DomainVerifier, RequestStatus};

/// Evaluate an address against the verification service.
///
/// Performs at most one lookup and no retries. The lookup is skipped entirely
/// when the key is missing or the address is syntactically invalid.
pub async fn evaluate<V>(email: &str, api_key: Option<&str>, verifier: &V) -> Outcome
where
    V: DomainVerifier + ?Sized,
{
    let Some(api_key) = api_key.filter(|key| !key.is_empty()) else {
        warn!("Verification API key is not configured");
        return Outcome::Error(Rejection::MissingApiKey);
    };

    let candidate = match EmailCandidate::parse(email) {
        Ok(candidate) => candidate,
        Err(rejection) => return Outcome::Error(rejection),
    };
    let domain = candidate.domain();

    let verdict = match verifier.lookup(domain, api_key).await {
        Ok(verdict) => verdict,
        Err(e) => {
            warn!(domain = %domain, error = %e, "Domain lookup failed");
            return Outcome::Error(Rejection::VerificationFailed);
        }
    };

    debug!(
        domain = %domain,
        request_status = %verdict.request_status,
        domain_status = verdict.domain_status.as_deref().unwrap_or(""),
        "Received verdict"
    );

    let outcome = match verdict.status() {
        RequestStatus::Success if verdict.is_blocked() => Outcome::Deny,
        RequestStatus::Success => Outcome::Allow,
        RequestStatus::FailKey => Outcome::AllowWithWarning(Degradation::InvalidApiKey),
        RequestStatus::FailServer => Outcome::AllowWithWarning(Degradation::ServerUnavailable),
        RequestStatus::FailInputDomain => Outcome::Error(Rejection::MalformedDomain),
        RequestStatus::FailKeyLowCredits => {
            Outcome::AllowWithWarning(Degradation::CreditsExhausted)
        }
        RequestStatus::Unknown(status) => {
            warn!(domain = %domain, request_status = %status, "Unrecognized request status");
            Outcome::Error(Rejection::VerificationFailed)
        }
    };

    match &outcome {
        Outcome::Deny => info!(domain = %domain, "Disposable domain denied"),
        Outcome::AllowWithWarning(degradation) => warn!(
            domain = %domain,
            code = degradation.code(),
            "Verification degraded, allowing registration"
        ),
        _ => {}
    }

    outcome
}

/// Engine bound to a verifier
#[derive(Clone)]
pub struct DecisionEngine {
    verifier: Arc<dyn DomainVerifier>,
}

impl DecisionEngine {
    pub fn new(verifier: Arc<dyn DomainVerifier>) -> Self {
        Self { verifier }
    }

    pub async fn evaluate(&self, email: &str, api_key: Option<&str>) -> Outcome {
        evaluate(email, api_key, self.verifier.as_ref()).await
    }
}

impl std::fmt::Debug for DecisionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecisionEngine").finish_non_exhaustive()
    }
}
