use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

/// Creates all routes with state
///
/// The lookup is served at the root, as existing clients call it, and
/// under `/api`.
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::lookup))
        .route("/api/lookup", get(handlers::lookup))
        .route("/api/health", get(handlers::health_check))
        .with_state(state)
}
