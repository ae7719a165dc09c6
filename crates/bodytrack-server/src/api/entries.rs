use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Serialize;
use serde_json::Value;

use bodytrack_core::model::{Entry, EntryDraft};

use super::{json_body, rejected, ApiError};
use crate::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct EntryAdded {
    pub message: &'static str,
    pub entry: Entry,
}

pub async fn list(State(state): State<AppState>) -> Json<Vec<Entry>> {
    Json(state.store().list_entries())
}

pub async fn add(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<EntryAdded>, ApiError> {
    let draft = json_body(payload)
        .and_then(EntryDraft::from_json)
        .map_err(|e| rejected(&state, "entries", e))?;

    let entry = state.store().append_entry(draft);
    tracing::info!(weight = entry.weight, body_fat = entry.body_fat, date = %entry.date, "entry added");

    Ok(Json(EntryAdded {
        message: "Entry added successfully",
        entry,
    }))
}
