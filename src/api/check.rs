//! Address check endpoint

use axum::{
    extract::{Query, State},
    Json,
};

use super::state::AppState;
use super::types::{ApiError, CheckQuery, CheckResponse};

/// Evaluate an address without registering anyone or notifying the operator.
///
/// Only routed when `gate.expose_check_endpoint` is set, and unavailable while
/// screening is disabled.
pub async fn check_email(
    State(state): State<AppState>,
    Query(query): Query<CheckQuery>,
) -> Result<Json<CheckResponse>, ApiError> {
    let email = query
        .email
        .ok_or_else(|| ApiError::bad_request("email query parameter is required").with_param("email"))?;

    let settings = state.gate.settings();
    if !settings.plugin_enabled {
        return Err(ApiError::unavailable("registration screening is disabled"));
    }

    let outcome = state.gate.evaluate(&settings, &email).await;

    Ok(Json(CheckResponse::from(&outcome)))
}
