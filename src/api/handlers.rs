//! API request handlers.
//!
//! Each handler runs at most one query. Dropping the handler future (for
//! example when the client disconnects) cancels the query and hands the
//! connection back to the pool.

use crate::db::{fetch_all_users, select_one};
use crate::error::ApiError;
use crate::models::{HEALTHY_BODY, HealthResponse, UsersListResponse};
use crate::state::AppState;
use crate::templates::render_users;
use axum::Json;
use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse, Response};
use std::sync::Arc;
use tracing::debug;


/// Checks the scalar returned by the liveness query.
fn verify_probe(value: i32) -> Result<(), ApiError> {
    if value == 1 {
        Ok(())
    } else {
        Err(ApiError::UnexpectedProbeResult(value))
    }
}

// ============================================================================
// Health Check
// ============================================================================

/// Health check endpoint.
///
/// Runs `SELECT 1` on every call.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Database answered", body = HealthResponse),
        (status = 500, description = "Database unavailable", body = String, content_type = "text/plain")
    ),
    tag = "Health"
)]
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let value = select_one(state.db.pool())
        .await
        .map_err(ApiError::HealthCheck)?;
    verify_probe(value)?;

    Ok(healthy_response())
}

/// The 200 reply, written out literally so the spacing of the body is kept.
fn healthy_response() -> Response {
    ([(header::CONTENT_TYPE, "application/json")], HEALTHY_BODY).into_response()
}

// ============================================================================
// Users
// ============================================================================

/// HTML page listing every user.
pub async fn users_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let users = fetch_all_users(state.db.pool()).await?;
    debug!(count = users.len(), "Rendering user listing");

    let page = render_users(&state.templates, &users)?;
    Ok(Html(page))
}

/// List all users.
#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "Every user in database order", body = UsersListResponse),
        (status = 500, description = "Query failed", body = String, content_type = "text/plain")
    ),
    tag = "Users"
)]
pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<UsersListResponse>, ApiError> {
    let users = fetch_all_users(state.db.pool()).await?;
    Ok(Json(UsersListResponse { users }))
}
