//! Response types for the Splitwise API.

use serde::{Deserialize, Serialize};


/// Health check response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Human-readable status message.
    pub message: String,
}

impl HealthResponse {
    /// Whether the server reported itself healthy.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// Undecoded HTTP response, kept byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Value of the `Content-Type` header, if any.
    pub content_type: Option<String>,
    /// Response body as text.
    pub body: String,
}

impl RawResponse {
    /// Whether the response declares a JSON media type.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|value| value.trim_start().starts_with("application/json"))
    }
}

/// A user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Identifier assigned by the database.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
}

/// JSON user listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersListResponse {
    /// Every user, in database order.
    pub users: Vec<User>,
}
