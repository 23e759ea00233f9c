//! Wish feed handlers

use crate::error::ApiError;
use crate::AppState;
use atlas_types::{LikeRequest, LikeResult, WishEntry};
use axum::{body::Bytes, extract::State, Json};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<WishEntry>>, ApiError> {
    state
        .wish_feed
        .sample()
        .await
        .map(Json)
        .map_err(|e| ApiError::FetchWishes.log(e))
}

pub async fn like(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<LikeResult>, ApiError> {
    let req: LikeRequest =
        serde_json::from_slice(&body).map_err(|e| ApiError::LikeWish.log(e))?;

    state
        .wish_feed
        .like(&req.id)
        .await
        .map(Json)
        .map_err(|e| ApiError::LikeWish.log(e))
}
