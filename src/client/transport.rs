// src/client/transport.rs
use thiserror::Error;
use tracing::warn;

use crate::message::{ChatRequest, ChatResponse, CoachReply};

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("endpoint returned {0}")]
    Status(reqwest::StatusCode),
}

/// HTTP client for the coaching endpoint.
#[derive(Clone, Debug)]
pub struct CoachClient {
    http: reqwest::Client,
    endpoint: String,
}

impl CoachClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { http: reqwest::Client::new(), endpoint: endpoint.into() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn send(&self, utterance: &str) -> Result<CoachReply, TransportError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&ChatRequest::new(utterance))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "coach endpoint rejected request");
            return Err(TransportError::Status(status));
        }

        let body: ChatResponse = response.json().await?;
        Ok(body.into())
    }
}
