//! HTTP client for the Splitwise API.

use crate::error::Error;
use crate::types::*;
use reqwest::Client;
use std::time::Duration;
use url::Url;


/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API (e.g., "http://localhost:8080").
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// HTTP client for the Splitwise API.
#[derive(Debug, Clone)]
pub struct SplitwiseClient {
    client: Client,
    base_url: String,
}

impl SplitwiseClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    /// Returns error if the base URL is invalid or the HTTP client cannot be
    /// built.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        Url::parse(&config.base_url)?;
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a new client with default configuration.
    ///
    /// # Errors
    /// Returns error if the base URL is invalid or the HTTP client cannot be
    /// built.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::new(ClientConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        })
    }

    /// Returns the base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Performs a health check.
    ///
    /// # Errors
    /// Returns error if the request fails or the server reports unhealthy.
    pub async fn health_check(&self) -> Result<HealthResponse, Error> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        self.handle_response(resp).await
    }

    /// Performs a health check and returns the response as sent, whatever
    /// its status.
    ///
    /// # Errors
    /// Returns error only if the request itself fails.
    pub async fn health_check_raw(&self) -> Result<RawResponse, Error> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;

        let status = resp.status().as_u16();
        let content_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = resp.text().await?;

        Ok(RawResponse {
            status,
            content_type,
            body,
        })
    }

    /// Fetches the HTML user listing page.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn users_page(&self) -> Result<String, Error> {
        let url = format!("{}/users", self.base_url);
        let resp = self.client.get(&url).send().await?;
        self.handle_text_response(resp).await
    }

    /// Lists all users through the JSON API.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn list_users(&self) -> Result<Vec<User>, Error> {
        let url = format!("{}/api/v1/users", self.base_url);
        let resp = self.client.get(&url).send().await?;
        let list: UsersListResponse = self.handle_response(resp).await?;
        Ok(list.users)
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();

        if status.is_success() {
            Ok(resp.json().await?)
        } else {
            Err(Self::error_from(resp).await)
        }
    }

    async fn handle_text_response(&self, resp: reqwest::Response) -> Result<String, Error> {
        if resp.status().is_success() {
            Ok(resp.text().await?)
        } else {
            Err(Self::error_from(resp).await)
        }
    }

    async fn error_from(resp: reqwest::Response) -> Error {
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();

        if status.as_u16() == 404 {
            Error::NotFound(text)
        } else {
            Error::Api {
                status: status.as_u16(),
                message: text,
            }
        }
    }
}
