//! Middleware screening registration submissions before the handler runs

use axum::{
    body::{to_bytes, Body, Bytes},
    extract::{FromRequest, Multipart, Request, State},
    http::{
        header::{CONTENT_TYPE, REFERER},
        HeaderMap, Method,
    },
    middleware::Next,
    response::Response,
    Form, Json,
};
use serde::Deserialize;
use tracing::{debug, warn};

use super::flash::redirect_with_flash;
use crate::api::state::AppState;
use crate::infrastructure::gate::GateDecision;

const UNREADABLE_FORM_MESSAGE: &str =
    "The registration form could not be read. Please try again.";

/// Fields of a registration submission the gate looks at
#[derive(Debug, Default, Deserialize)]
pub struct RegistrationForm {
    #[serde(default)]
    pub email: Option<String>,
}

/// Runs the registration gate ahead of the wrapped handler.
///
/// Settings are read once per request and that snapshot serves the whole
/// check. A blocked submission never reaches the handler; the user is sent back
/// with the message as a flash.
pub async fn registration_gate(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let settings = state.gate.settings();
    if !settings.plugin_enabled {
        return next.run(request).await;
    }

    let (parts, body) = request.into_parts();
    let back = redirect_target(&parts.headers, &state.gate_config.fallback_redirect);

    let bytes = match to_bytes(body, state.gate_config.max_body_bytes).await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(error = %e, "Failed to read registration body");
            return redirect_with_flash(&back, UNREADABLE_FORM_MESSAGE);
        }
    };

    let email = submitted_email(&parts.headers, &bytes).await;

    match state.gate.screen(&settings, email.as_deref()).await {
        GateDecision::Proceed => {
            debug!("Registration gate passed");
            next.run(Request::from_parts(parts, Body::from(bytes))).await
        }
        GateDecision::Block { message } => redirect_with_flash(&back, &message),
    }
}

fn redirect_target(headers: &HeaderMap, fallback: &str) -> String {
    headers
        .get(REFERER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

/// Pull the `email` field out of a JSON, multipart or urlencoded body
async fn submitted_email(headers: &HeaderMap, body: &Bytes) -> Option<String> {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    if content_type.starts_with("multipart/form-data") {
        return multipart_email(content_type, body).await;
    }

    let form = if content_type.starts_with("application/json") {
        Json::<RegistrationForm>::from_bytes(body).ok()?.0
    } else {
        let request = axum::http::Request::builder()
            .method(Method::POST)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.clone()))
            .ok()?;

        Form::<RegistrationForm>::from_request(request, &())
            .await
            .ok()?
            .0
    };

    form.email
}

async fn multipart_email(content_type: &str, body: &Bytes) -> Option<String> {
    let request = axum::http::Request::builder()
        .method(Method::POST)
        .header(CONTENT_TYPE, content_type)
        .body(Body::from(body.clone()))
        .ok()?;

    let mut multipart = Multipart::from_request(request, &()).await.ok()?;

    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() == Some("email") {
            return field.text().await.ok();
        }
    }

    None
}
