//! HTTP client library for the Splitwise backend.
//!
//! This crate provides a typed HTTP client for the health check and the user
//! listing endpoints.
//!
//! # Example
//!
//! ```no_run
//! use splitwise_client::{ClientConfig, SplitwiseClient};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), splitwise_client::Error> {
//!     let client = SplitwiseClient::new(ClientConfig {
//!         base_url: "http://localhost:8080".into(),
//!         timeout: Duration::from_secs(30),
//!     })?;
//!
//!     let health = client.health_check().await?;
//!     println!("Status: {}", health.status);
//!
//!     for user in client.list_users().await? {
//!         println!("{} {} <{}>", user.id, user.name, user.email);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::{ClientConfig, SplitwiseClient};
pub use error::Error;
pub use types::*;
