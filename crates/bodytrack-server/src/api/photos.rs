use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Serialize;
use serde_json::Value;

use bodytrack_core::model::{Photo, PhotoDraft};

use super::{json_body, rejected, ApiError};
use crate::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct PhotoAdded {
    pub message: &'static str,
    pub photo: Photo,
}

pub async fn list(State(state): State<AppState>) -> Json<Vec<Photo>> {
    Json(state.store().list_photos())
}

pub async fn add(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<PhotoAdded>, ApiError> {
    let max = state.cfg().photos.max_data_url_bytes;
    let draft = json_body(payload)
        .and_then(|v| PhotoDraft::from_json(v, max))
        .map_err(|e| rejected(&state, "photos", e))?;

    let photo = state.store().add_photo(draft);
    tracing::info!(bytes = photo.data_url.len(), date = %photo.date, "photo added");

    Ok(Json(PhotoAdded {
        message: "Photo added successfully",
        photo,
    }))
}
