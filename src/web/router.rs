//! Router configuration.

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{entry, games, login, logout, register_identity, AppState};
use super::middleware::inject_state;

/// Create the main router.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    // Entry surface (anonymous clients only)
    let entry_routes = Router::new()
        .route("/", get(entry))
        .route("/login", post(login))
        .route("/register", post(register_identity));

    // Protected surface; HTML forms cannot issue DELETE, so logout also
    // answers POST
    let lounge_routes = Router::new()
        .route("/games", get(games))
        .route("/logout", delete(logout).post(logout));

    // Clone for the state-injection closure
    let state_for_middleware = app_state.clone();

    Router::new()
        .merge(entry_routes)
        .merge(lounge_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(move |req, next| {
                    let state = state_for_middleware.clone();
                    inject_state(state, req, next)
                })),
        )
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}
