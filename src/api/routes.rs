//! Route configuration.

use crate::api::handlers;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use std::sync::Arc;

/// Creates the API router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // User listing
        .route("/users", get(handlers::users_page))
        .route("/api/v1/users", get(handlers::list_users))
        .with_state(state)
}
