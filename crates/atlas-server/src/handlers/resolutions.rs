//! Resolution handlers

use crate::error::ApiError;
use crate::AppState;
use atlas_types::{CreateResolutionRequest, Resolution, ResolutionSummary};
use axum::{body::Bytes, extract::State, Json};

pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<ResolutionSummary>>, ApiError> {
    state
        .board
        .participants()
        .await
        .map(Json)
        .map_err(|e| ApiError::FetchResolutions.log(e))
}

/// Stores the submission as sent. The body is read as JSON whatever its
/// content type; unreadable bodies fail like storage errors.
pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Resolution>, ApiError> {
    let req: CreateResolutionRequest =
        serde_json::from_slice(&body).map_err(|e| ApiError::SaveResolution.log(e))?;

    state
        .board
        .submit(req.into())
        .await
        .map(Json)
        .map_err(|e| ApiError::SaveResolution.log(e))
}
