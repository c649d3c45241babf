// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ErrorBody;
use crate::services::gemini::UpstreamError;

pub const USER_MESSAGE_REQUIRED: &str = "userMessage is required.";
pub const NOT_CONFIGURED: &str = "The coach is not configured. Please contact the operator.";
pub const UPSTREAM_FAILED: &str = "Failed to communicate with the coach.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("missing configuration: {0}")]
    Configuration(&'static str),

    #[error("upstream call failed: {0}")]
    Upstream(#[from] UpstreamError),

    #[error("method not allowed")]
    MethodNotAllowed,
}

impl AppError {
    pub fn missing_user_message() -> Self {
        AppError::BadRequest(USER_MESSAGE_REQUIRED.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Configuration(_) | AppError::Upstream(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message shown to callers. Server-side causes stay in the logs.
    fn public_message(&self) -> String {
        match self {
            AppError::BadRequest(msg) => msg.clone(),
            AppError::MethodNotAllowed => "Method Not Allowed".to_string(),
            AppError::Configuration(_) => NOT_CONFIGURED.to_string(),
            AppError::Upstream(_) => UPSTREAM_FAILED.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "chat request failed");
        } else {
            tracing::debug!(error = %self, %status, "chat request rejected");
        }
        let body = ErrorBody { error: self.public_message() };
        (status, Json(body)).into_response()
    }
}
