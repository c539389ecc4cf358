use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown mood: {0}")]
    UnknownMood(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Upstream API error: HTTP {status}: {message}")]
    UpstreamError { status: u16, message: String },

    #[error("Upstream API unreachable")]
    UpstreamUnavailable,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Get a sanitized error message safe for logging
    /// Filters out potentially sensitive information
    pub fn log_safe(&self) -> String {
        match self {
            // Upstream messages can echo the request URL, which carries the
            // API key as a query parameter
            Error::UpstreamError { status, message } => {
                if message.to_lowercase().contains("apikey")
                    || message.to_lowercase().contains("api_key")
                {
                    format!("Upstream API error: HTTP {status} (details redacted)")
                } else {
                    format!("Upstream API error: HTTP {status}: {message}")
                }
            }
            Error::UpstreamUnavailable => "Upstream API unreachable".to_string(),

            // Internal errors might contain sensitive details
            Error::Internal(msg) => {
                if msg.to_lowercase().contains("secret")
                    || msg.to_lowercase().contains("token")
                    || msg.to_lowercase().contains("key")
                {
                    "Internal error (details redacted)".to_string()
                } else {
                    format!("Internal error: {msg}")
                }
            }

            // These errors are generally safe to log as-is
            Error::InvalidInput(msg) => format!("Invalid input: {msg}"),
            Error::UnknownMood(mood) => format!("Unknown mood: {mood}"),
            Error::NotFound(msg) => format!("Not found: {msg}"),
            Error::Config(msg) => format!("Configuration error: {msg}"),
        }
    }
}

// Implement IntoResponse for API error handling
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        // Log the full error internally using the safe logging method
        tracing::error!("Request error: {}", self.log_safe());

        let (status, body) = match &self {
            Error::InvalidInput(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            Error::UnknownMood(_) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Invalid or missing mood parameter" }),
            ),
            Error::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
            Error::UpstreamError { status, message } => (
                StatusCode::BAD_GATEWAY,
                json!({
                    "error": "Recipe API request failed",
                    "details": format!("HTTP {status}: {message}"),
                }),
            ),
            // Transport-level detail is never exposed to callers
            Error::UpstreamUnavailable => (
                StatusCode::BAD_GATEWAY,
                json!({ "error": "Recipe API is unavailable" }),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Internal server error" }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
