//! API layer - HTTP endpoints and middleware

pub mod check;
pub mod health;
pub mod registration;
pub mod router;
pub mod state;
pub mod types;

pub use router::{create_router_with_handler, create_router_with_state};
pub use state::AppState;
