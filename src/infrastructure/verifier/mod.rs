//! Verification API client

mod block_disposable;
mod http_client;

pub use block_disposable::BlockDisposableVerifier;
pub use http_client::{HttpClient, HttpClientTrait};
