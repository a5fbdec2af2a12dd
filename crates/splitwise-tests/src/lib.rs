//! Integration tests for the Splitwise backend.
//!
//! These tests require the server to be running against a PostgreSQL database
//! and are ignored by default. Configure the server URL via the
//! `API_BASE_URL` environment variable (default: `http://localhost:8080`) and
//! run them with `cargo test -p splitwise-tests -- --ignored`.
//!
//! The listing tests expect the `users` table to hold exactly Alice and Bob.
//! Seed it before starting the server:
//!
//! ```sql
//! CREATE TABLE IF NOT EXISTS users (id integer PRIMARY KEY, name text, email text);
//! TRUNCATE users;
//! INSERT INTO users (id, name, email) VALUES (1, 'Alice', 'alice@x.com'), (2, 'Bob', 'bob@x.com');
//! ```

use splitwise_client::{ClientConfig, SplitwiseClient};
use std::time::Duration;

/// Gets the API base URL from environment or uses default.
#[must_use]
pub fn get_api_url() -> String {
    std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string())
}

/// Creates a test client configured for the API.
///
/// # Errors
/// Returns error if client creation fails.
pub fn create_test_client() -> Result<SplitwiseClient, splitwise_client::Error> {
    SplitwiseClient::new(ClientConfig {
        base_url: get_api_url(),
        timeout: Duration::from_secs(10),
    })
}
