use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use tracing::info;

#[derive(Debug, Serialize)]
struct RegistrationAccepted {
    status: &'static str,
}

/// Registration handler used when no host handler is supplied.
///
/// Only reached once the gate has let the submission through.
pub async fn accept_registration() -> impl IntoResponse {
    info!("Registration accepted");

    (
        StatusCode::CREATED,
        Json(RegistrationAccepted {
            status: "registered",
        }),
    )
}
