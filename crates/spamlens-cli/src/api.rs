//! SpamLens API Client

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::form::MessageApi;

/// API Client for SpamLens
pub struct SpamLensClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Response Types
// ============================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub id: Uuid,
    pub text: String,
    #[serde(default)]
    pub clean: String,
    #[serde(default)]
    pub label: i32,
    #[serde(default)]
    pub prob: f64,
    #[serde(default)]
    pub anomaly: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Serialize)]
pub struct CreateMessageRequest<'a> {
    pub text: &'a str,
}

impl SpamLensClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Backend status probe
    pub async fn status(&self) -> Result<StatusResponse> {
        let url = format!("{}/", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to SpamLens API")?;

        let resp = ensure_success(resp).await?;
        resp.json().await.context("Failed to parse response")
    }

    /// Submit a message for classification
    pub async fn post_message(&self, text: &str) -> Result<MessageResponse> {
        let url = format!("{}/api/messages", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(&CreateMessageRequest { text })
            .send()
            .await
            .context("Failed to connect to SpamLens API")?;

        let resp = ensure_success(resp).await?;
        resp.json().await.context("Failed to parse response")
    }

    /// All stored messages, newest first
    pub async fn get_messages(&self) -> Result<Vec<MessageResponse>> {
        let url = format!("{}/api/messages", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to SpamLens API")?;

        let resp = ensure_success(resp).await?;
        resp.json().await.context("Failed to parse response")
    }
}

/// Turn a non-2xx response into an error carrying the server's message
async fn ensure_success(resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<ErrorResponse>(&body)
        .map(|e| e.error)
        .unwrap_or(body);
    bail!("API error ({}): {}", status, detail);
}

#[async_trait]
impl MessageApi for SpamLensClient {
    async fn post_message(&self, text: &str) -> Result<MessageResponse> {
        SpamLensClient::post_message(self, text).await
    }

    async fn get_messages(&self) -> Result<Vec<MessageResponse>> {
        SpamLensClient::get_messages(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_trailing_slash() {
        let client = SpamLensClient::new("http://localhost:5002/");
        assert_eq!(client.base_url(), "http://localhost:5002");
    }

    #[test]
    fn test_message_tolerates_missing_fields() {
        let json = r#"{
            "id": "6f1c1c53-8f1e-4c36-9a55-1f0b2a8e4d10",
            "text": "hello",
            "createdAt": "2024-05-01T12:00:00Z"
        }"#;
        let msg: MessageResponse = serde_json::from_str(json).unwrap();
        assert_eq!(msg.clean, "");
        assert_eq!(msg.label, 0);
        assert_eq!(msg.prob, 0.0);
        assert!(!msg.anomaly);
    }
}
