//! Shared HTTP client for the Filedrop backend API.
//!
//! Provides a minimal client with a generic multipart POST helper and the
//! domain upload methods in [`api`]. Construct with an explicit base URL, or
//! from the environment via [`ApiClient::from_env`].

pub mod api;
pub mod error;

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Path prefix prepended to every API route (e.g. "/api/upload").
pub const API_PREFIX: &str = "/api";

/// HTTP client for the Filedrop backend API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the backend at `base_url`. Trailing slashes are
    /// trimmed so joins always produce `{base_url}/api/...`.
    pub fn new(base_url: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create client from environment: FILEDROP_BACKEND_URL (or BACKEND_URL).
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let base_url = std::env::var("FILEDROP_BACKEND_URL")
            .or_else(|_| std::env::var("BACKEND_URL"))
            .unwrap_or_else(|_| "http://localhost:3000".to_string());

        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST a multipart form and deserialize the JSON response.
    ///
    /// Transport failures surface verbatim as [`ClientError::Transport`]; a
    /// non-success status becomes [`ClientError::Upload`] and the response
    /// body is kept in the error; a success body that is not valid JSON
    /// becomes [`ClientError::Parse`].
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> ClientResult<T> {
        let url = self.build_url(path);
        let response = self.client.post(&url).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::Upload { status, body });
        }

        let bytes = response.bytes().await?;
        let body: T = serde_json::from_slice(&bytes)?;

        Ok(body)
    }

    /// Raw client for custom requests. Build URLs via [`ApiClient::build_url`].
    pub fn client(&self) -> &Client {
        &self.client
    }
}

// Re-export the domain types for convenience.
pub use api::FileUpload;
pub use error::{ClientError, ClientResult};
