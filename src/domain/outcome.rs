//! Decision outcomes produced by the engine

use serde::Serialize;
use thiserror::Error;

/// Message shown to a user whose address belongs to a disposable domain
pub const DISPOSABLE_DENIED_MESSAGE: &str =
    "This site does not allow temporary or disposable emails for registration. Please use a valid email account.";

/// Result of evaluating a single email address
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Domain is not disposable
    Allow,
    /// Domain is disposable
    Deny,
    /// Verification could not run for an operator-side reason; the registration is let through
    AllowWithWarning(Degradation),
    /// The address could not be validated; the user must correct it and retry
    Error(Rejection),
}

impl Outcome {
    /// Whether the registration may proceed
    pub fn permits_registration(&self) -> bool {
        matches!(self, Self::Allow | Self::AllowWithWarning(_))
    }

    /// Stable lowercase label used in logs and JSON responses
    pub fn label(&self) -> &'static str {
        match self {
            Self::Allow => "allow",
            Self::Deny => "deny",
            Self::AllowWithWarning(_) => "allow_with_warning",
            Self::Error(_) => "error",
        }
    }

    /// Human-readable message for the outcome, if any
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Allow => None,
            Self::Deny => Some(DISPOSABLE_DENIED_MESSAGE.to_string()),
            Self::AllowWithWarning(degradation) => Some(degradation.reason().to_string()),
            Self::Error(rejection) => Some(rejection.to_string()),
        }
    }
}

/// Administrative failure of the verification service.
///
/// These never block a user; they are escalated to the site operator instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Degradation {
    InvalidApiKey,
    ServerUnavailable,
    CreditsExhausted,
}

impl Degradation {
    /// Status code reported by the verification API
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidApiKey => "fail_key",
            Self::ServerUnavailable => "fail_server",
            Self::CreditsExhausted => "fail_key_low_credits",
        }
    }

    /// Short reason attached to the outcome
    pub fn reason(&self) -> &'static str {
        match self {
            Self::InvalidApiKey => "API key invalid; notify operator",
            Self::ServerUnavailable => "verification server unreachable; notify operator",
            Self::CreditsExhausted => "credit balance exhausted; notify operator",
        }
    }

    /// Longer text sent to the operator in the notification email
    pub fn operator_message(&self) -> &'static str {
        match self {
            Self::InvalidApiKey => {
                "Something is wrong with your API key. Please double-check it or request a new one."
            }
            Self::ServerUnavailable => {
                "The verification server could not connect to its database or had some other problem."
            }
            Self::CreditsExhausted => {
                "You used up your credits. The current and any additional request will be answered with ok without really checking the domain. Consider buying additional credits."
            }
        }
    }
}

impl std::fmt::Display for Degradation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason())
    }
}

/// Reason an address was rejected outright.
///
/// `Display` yields the message surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("API key is not configured.")]
    MissingApiKey,

    #[error("The email address you provided is not properly formatted. Please try again.")]
    MalformedEmail,

    #[error("The email domain is in the wrong format or does not exist. Please try again.")]
    MalformedDomain,

    #[error("There is a problem with the email address you provided. Please try again.")]
    VerificationFailed,
}

/// Error taxonomy class of a rejection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorClass {
    ConfigurationError,
    InputFormatError,
    TransportError,
}

impl Rejection {
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::MissingApiKey => ErrorClass::ConfigurationError,
            Self::MalformedEmail | Self::MalformedDomain => ErrorClass::InputFormatError,
            Self::VerificationFailed => ErrorClass::TransportError,
        }
    }
}
