//! Infrastructure layer - External service implementations

pub mod gate;
pub mod logging;
pub mod mail;
pub mod settings;
pub mod verifier;
