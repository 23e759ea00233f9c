//! Error types for the Atlas server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failures raised by the storage layer
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Corrupt objectives column: {0}")]
    Objectives(#[from] serde_json::Error),

    #[error("Resolution not found: {0}")]
    NotFound(String),
}

/// Errors surfaced to HTTP callers.
///
/// Every variant renders as `500 {"error": "<message>"}`; the underlying
/// cause is only logged.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    #[error("Error fetching resolutions")]
    FetchResolutions,

    #[error("Error saving resolution")]
    SaveResolution,

    #[error("Error fetching wishes")]
    FetchWishes,

    #[error("Error liking wish")]
    LikeWish,

    #[error("Database unavailable")]
    Unavailable,
}

impl ApiError {
    /// Log `cause` under this error's message and return self
    pub fn log<E: std::fmt::Display>(self, cause: E) -> Self {
        tracing::error!("{}: {}", self, cause);
        self
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.to_string(),
        }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
