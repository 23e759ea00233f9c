//! Character catalogue handler

use atlas_types::{Character, CHARACTERS};
use axum::Json;

pub async fn list() -> Json<&'static [Character]> {
    Json(CHARACTERS.as_slice())
}
