//! Address check types

use serde::{Deserialize, Serialize};

use crate::domain::{Degradation, ErrorClass, Outcome};

#[derive(Debug, Clone, Deserialize)]
pub struct CheckQuery {
    pub email: Option<String>,
}

/// Outcome of a check, as returned to API clients
#[derive(Debug, Clone, Serialize)]
pub struct CheckResponse {
    pub outcome: &'static str,
    pub permitted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degradation: Option<Degradation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_class: Option<ErrorClass>,
}

impl From<&Outcome> for CheckResponse {
    fn from(outcome: &Outcome) -> Self {
        let (degradation, error_class) = match outcome {
            Outcome::AllowWithWarning(degradation) => (Some(*degradation), None),
            Outcome::Error(rejection) => (None, Some(rejection.class())),
            Outcome::Allow | Outcome::Deny => (None, None),
        };

        Self {
            outcome: outcome.label(),
            permitted: outcome.permits_registration(),
            message: outcome.message(),
            degradation,
            error_class,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Rejection;

    #[test]
    fn test_allow_serialization() {
        let json = serde_json::to_value(CheckResponse::from(&Outcome::Allow)).unwrap();
        assert_eq!(json, serde_json::json!({"outcome": "allow", "permitted": true}));
    }

    #[test]
    fn test_warning_serialization() {
        let response = CheckResponse::from(&Outcome::AllowWithWarning(
            Degradation::CreditsExhausted,
        ));
        let json = serde_json::to_value(response).unwrap();

        assert_eq!(json["outcome"], "allow_with_warning");
        assert_eq!(json["permitted"], true);
        assert_eq!(json["degradation"], "credits_exhausted");
        assert_eq!(json["message"], "credit balance exhausted; notify operator");
    }

    #[test]
    fn test_error_serialization() {
        let response = CheckResponse::from(&Outcome::Error(Rejection::VerificationFailed));
        let json = serde_json::to_value(response).unwrap();

        assert_eq!(json["outcome"], "error");
        assert_eq!(json["permitted"], false);
        assert_eq!(json["error_class"], "transport_error");
    }
}
