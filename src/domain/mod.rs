//! Domain layer - Core business logic and entities

pub mod email;
pub mod engine;
pub mod error;
pub mod notification;
pub mod outcome;
pub mod settings;
pub mod verdict;

pub use email::EmailCandidate;
pub use engine::{evaluate, DecisionEngine};
pub use error::DomainError;
pub use notification::{Mailer, NotificationContext, INFORM_TEMPLATE};
pub use outcome::{Degradation, ErrorClass, Outcome, Rejection, DISPOSABLE_DENIED_MESSAGE};
pub use settings::{SettingsProvider, ValidationSettings};
pub use verdict::{DomainVerifier, FetchFailure, RemoteVerdict, RequestStatus};
