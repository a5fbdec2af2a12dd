//! Request and response models for the HTTP API.

use crate::db::User;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Exact body returned by a passing health check.
pub const HEALTHY_BODY: &str = r#"{"status": "ok", "message": "I am healthy!"}"#;

/// Health check response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Human-readable status message.
    pub message: String,
}

/// JSON user listing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UsersListResponse {
    /// Every user, in database order.
    pub users: Vec<User>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_healthy_body_matches_response() {
        let parsed: HealthResponse = serde_json::from_str(HEALTHY_BODY).unwrap();
        assert_eq!(
            parsed,
            HealthResponse {
                status: "ok".to_string(),
                message: "I am healthy!".to_string(),
            }
        );
    }

    #[test]
    fn test_users_list_response_serialization() {
        let response = UsersListResponse {
            users: vec![User {
                id: 1,
                name: "Alice".to_string(),
                email: "alice@x.com".to_string(),
            }],
        };

        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(
            json,
            r#"{"users":[{"id":1,"name":"Alice","email":"alice@x.com"}]}"#
        );
    }

    #[test]
    fn test_empty_users_list_serialization() {
        let response = UsersListResponse { users: vec![] };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"users":[]}"#);
    }
}
