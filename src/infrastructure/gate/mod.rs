//! Registration gate

mod service;

pub use service::{GateDecision, RegistrationGate};
