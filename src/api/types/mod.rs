//! API request and response types

pub mod check;
pub mod error;

pub use check::{CheckQuery, CheckResponse};
pub use error::ApiError;
