//! Verification API verdicts and the lookup seam

mod remote;
mod verifier;

pub use remote::{RemoteVerdict, RequestStatus};
pub use verifier::{DomainVerifier, FetchFailure};

#[cfg(test)]
pub use verifier::MockDomainVerifier;
