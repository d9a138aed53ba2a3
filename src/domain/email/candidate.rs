use validator::ValidateEmail;

use crate::domain::outcome::Rejection;

/// An email address that passed syntax validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailCandidate {
    address: String,
    domain_start: usize,
}

impl EmailCandidate {
    /// Validate raw user input as an email address.
    ///
    /// Input is taken verbatim: surrounding whitespace makes the address invalid.
    pub fn parse(raw: &str) -> Result<Self, Rejection> {
        let address = raw.to_string();

        if !address.validate_email() {
            return Err(Rejection::MalformedEmail);
        }

        let domain_start = address
            .rfind('@')
            .map(|at| at + 1)
            .ok_or(Rejection::MalformedEmail)?;

        Ok(Self {
            address,
            domain_start,
        })
    }

    /// The full address as submitted
    pub fn as_str(&self) -> &str {
        &self.address
    }

    /// Everything after the final `@`
    pub fn domain(&self) -> &str {
        &self.address[self.domain_start..]
    }
}

impl std::fmt::Display for EmailCandidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.address)
    }
}
