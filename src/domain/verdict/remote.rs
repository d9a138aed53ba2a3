use serde::{Deserialize, Serialize};

/// Parsed response body of the verification API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteVerdict {
    pub request_status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_status: Option<String>,
}

/// Closed set of request statuses the verification API reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestStatus {
    Success,
    FailKey,
    FailServer,
    FailInputDomain,
    FailKeyLowCredits,
    Unknown(String),
}

impl RequestStatus {
    /// Case-insensitive exact match; anything else is `Unknown`
    pub fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "success" => Self::Success,
            "fail_key" => Self::FailKey,
            "fail_server" => Self::FailServer,
            "fail_input_domain" => Self::FailInputDomain,
            "fail_key_low_credits" => Self::FailKeyLowCredits,
            _ => Self::Unknown(raw.to_string()),
        }
    }
}

impl RemoteVerdict {
    pub fn new(request_status: impl Into<String>) -> Self {
        Self {
            request_status: request_status.into(),
            domain_status: None,
        }
    }

    pub fn with_domain_status(mut self, domain_status: impl Into<String>) -> Self {
        self.domain_status = Some(domain_status.into());
        self
    }

    pub fn status(&self) -> RequestStatus {
        RequestStatus::parse(&self.request_status)
    }

    /// Whether the domain was classified as disposable
    pub fn is_blocked(&self) -> bool {
        self.domain_status
            .as_deref()
            .is_some_and(|status| status.eq_ignore_ascii_case("block"))
    }
}
