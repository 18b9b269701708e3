//! HTTP client for a running kanban API server.
//!
//! Configuration is via environment variables:
//! - `KANBAN_URL` - Base URL (default: `http://localhost:5000`)

use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::api::ErrorResponse;
use crate::models::*;

/// Default URL for a locally running server.
pub const DEFAULT_URL: &str = "http://localhost:5000";

/// HTTP client errors.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Server error: {0}")]
    Server(String),
}

#[derive(Debug, Clone)]
pub struct BoardClient {
    base_url: String,
    client: Client,
}

impl BoardClient {
    pub fn from_env() -> Self {
        let base_url = std::env::var("KANBAN_URL").unwrap_or_else(|_| DEFAULT_URL.to_string());
        Self::new(base_url)
    }

    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http_client(base_url, Client::new())
    }

    /// Use a preconfigured reqwest client (timeouts, proxies).
    pub fn with_http_client(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    /// Build a URL from path segments, percent-encoding each one.
    fn url(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ClientError> {
        let url = self.url(segments)?;
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        self.handle_response(response).await
    }

    /// Handle response, converting HTTP errors to ClientError.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorResponse>(&body)
            .map(|e| e.error)
            .unwrap_or(body);
        match status {
            StatusCode::NOT_FOUND => Err(ClientError::NotFound(message)),
            _ => Err(ClientError::Server(format!("{}: {}", status, message))),
        }
    }

    // ============================================================
    // Tickets
    // ============================================================

    pub async fn current_ticket(&self) -> Result<Ticket, ClientError> {
        self.get(&["current-ticket"]).await
    }

    pub async fn get_ticket(&self, id: &str) -> Result<Ticket, ClientError> {
        self.get(&["ticket", id]).await
    }

    pub async fn list_tickets(&self) -> Result<Vec<TicketSummary>, ClientError> {
        let list: TicketList = self.get(&["tickets"]).await?;
        Ok(list.tickets)
    }

    // ============================================================
    // Task Metadata
    // ============================================================

    /// Fetch metadata for a task. Slashes in the name become path segments,
    /// matching the server's wildcard route.
    pub async fn get_task(&self, name: &str) -> Result<TaskMetadata, ClientError> {
        let mut segments = vec!["task"];
        segments.extend(name.split('/'));
        self.get(&segments).await
    }

    pub async fn health(&self) -> Result<(), ClientError> {
        let _: serde_json::Value = self.get(&["health"]).await?;
        Ok(())
    }
}
