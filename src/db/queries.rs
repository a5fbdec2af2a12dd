//! Queries issued by the request handlers.

use super::schema::User;
use sqlx::PgPool;

/// Fetches every row of `users` in whatever order the database returns them.
///
/// The connection goes back to the pool once the rows are collected or the
/// future is dropped.
///
/// # Errors
/// Returns the driver error if the query fails or a row does not match [`User`].
pub async fn fetch_all_users(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT id, name, email FROM users")
        .fetch_all(pool)
        .await
}

/// Runs the liveness query and returns the scalar it produced.
///
/// # Errors
/// Returns the driver error if the query fails.
pub async fn select_one(pool: &PgPool) -> Result<i32, sqlx::Error> {
    sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(pool).await
}
