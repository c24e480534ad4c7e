//! Application error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use stackit_core::completion::CompletionError;
use thiserror::Error;
use tracing::error;

use crate::models::ErrorResponse;

pub const NO_DATA_PROVIDED: &str = "No data provided";
pub const NO_INPUT_PROVIDED: &str = "No input provided";
pub const TEXT_AND_TYPE_REQUIRED: &str = "Text and type are required";
pub const UNSUPPORTED_ENHANCEMENT: &str = "Unsupported enhancement type";
pub const PROMPT_REQUIRED: &str = "Prompt is required";

pub const SERVICE_UNAVAILABLE: &str = "Service temporarily unavailable";
pub const ENHANCE_FAILED: &str = "Failed to enhance text";
pub const GENERATE_FAILED: &str = "Failed to generate content";

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level errors with HTTP status mapping.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed or incomplete client payload.
    #[error("Invalid request: {0}")]
    InvalidRequest(&'static str),

    /// The completion API could not produce an answer. Only `message`
    /// reaches the client; `source` is logged.
    #[error("{message}: {source}")]
    UpstreamFailure {
        message: &'static str,
        #[source]
        source: CompletionError,
    },
}

impl AppError {
    /// Adapter for `map_err` that tags an upstream error with a client-facing message.
    pub fn upstream(message: &'static str) -> impl FnOnce(CompletionError) -> Self {
        move |source| AppError::UpstreamFailure { message, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidRequest(m) => (StatusCode::BAD_REQUEST, *m),
            AppError::UpstreamFailure { message, source } => {
                error!(error = %source, "upstream completion failed");
                (StatusCode::INTERNAL_SERVER_ERROR, *message)
            }
        };
        let body = Json(ErrorResponse {
            error: message.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<CompletionError> for AppError {
    fn from(source: CompletionError) -> Self {
        AppError::UpstreamFailure {
            message: SERVICE_UNAVAILABLE,
            source,
        }
    }
}
