use axum::{
    handler::Handler,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::check;
use super::health;
use super::registration;
use super::state::AppState;

/// Create the full router with the built-in registration handler
pub fn create_router_with_state(state: AppState) -> Router {
    create_router_with_handler(state, registration::accept_registration)
}

/// Create the full router, guarding `handler` as the registration route
pub fn create_router_with_handler<H, T>(state: AppState, handler: H) -> Router
where
    H: Handler<T, AppState>,
    T: 'static,
{
    let mut router: Router<AppState> = Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check));

    if state.gate_config.expose_check_endpoint {
        router = router.route("/api/check", get(check::check_email));
    }

    router
        // Registration, screened by the gate before the handler runs
        .route(
            "/register",
            post(handler).route_layer(middleware::from_fn_with_state(
                state.clone(),
                registration::registration_gate,
            )),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
