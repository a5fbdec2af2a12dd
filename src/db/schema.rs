//! Database schema types.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Row of the `users` relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    /// Identifier assigned by the database.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
}
