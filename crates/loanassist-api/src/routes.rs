//! HTTP route definitions.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::handlers::{categories, health, query, users};
use crate::state::AppState;

/// Create the front door router.
///
/// CORS is fully permissive, matching what the browser client expects.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/query", post(query))
        .route("/health", get(health))
        .route("/users", get(users))
        .route("/categories", get(categories))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
