//! Submitted email addresses

mod candidate;

pub use candidate::EmailCandidate;
