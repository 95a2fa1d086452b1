//! HTTP client for the roadmap status API.
//!
//! Used by the CLI front-ends (and any other out-of-process view) to reach a
//! running `goji serve`. Configuration is via environment variable:
//! - `GOJI_ROADMAP_URL` - Base URL (default: `http://localhost:3000/api`)

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{BulkStatusResponse, RoadmapBranch, SetStatusResponse, StatusMap};

/// Default URL for local development.
const DEFAULT_URL: &str = "http://localhost:3000/api";

/// HTTP client errors.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    Server(String),
}

/// HTTP client for the roadmap status API.
#[derive(Debug, Clone)]
pub struct RoadmapClient {
    base_url: String,
    client: Client,
}

impl RoadmapClient {
    /// Create client from environment variables.
    pub fn from_env() -> Self {
        let base_url = std::env::var("GOJI_ROADMAP_URL").unwrap_or_else(|_| DEFAULT_URL.to_string());
        Self::new(base_url)
    }

    /// Create with an explicit base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    /// Handle response, converting HTTP errors to ClientError.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            match status {
                StatusCode::BAD_REQUEST => Err(ClientError::BadRequest(body)),
                _ => Err(ClientError::Server(format!("{}: {}", status, body))),
            }
        }
    }

    /// Fetch the full status map.
    pub async fn status(&self) -> Result<StatusMap, ClientError> {
        let response = self
            .client
            .get(format!("{}/roadmap", self.base_url))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Persist one item's completion flag.
    pub async fn set_status(
        &self,
        id: &str,
        completed: bool,
    ) -> Result<SetStatusResponse, ClientError> {
        let response = self
            .client
            .post(format!("{}/roadmap", self.base_url))
            .json(&serde_json::json!({ "id": id, "completed": completed }))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Bulk-merge completion flags.
    pub async fn set_statuses(&self, map: &StatusMap) -> Result<BulkStatusResponse, ClientError> {
        let response = self
            .client
            .put(format!("{}/roadmap", self.base_url))
            .json(map)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Fetch the static catalog.
    pub async fn catalog(&self) -> Result<Vec<RoadmapBranch>, ClientError> {
        let response = self
            .client
            .get(format!("{}/roadmap/catalog", self.base_url))
            .send()
            .await?;
        self.handle_response(response).await
    }
}
