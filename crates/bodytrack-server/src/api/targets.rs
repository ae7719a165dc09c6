use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde_json::Value;

use bodytrack_core::model::Targets;

use super::{json_body, rejected, ApiError, Message};
use crate::app_state::AppState;

pub async fn get(State(state): State<AppState>) -> Json<Targets> {
    Json(state.store().get_targets())
}

pub async fn set(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Message>, ApiError> {
    let targets = json_body(payload)
        .and_then(Targets::from_json)
        .map_err(|e| rejected(&state, "targets", e))?;

    tracing::info!(weight = targets.weight, body_fat = targets.body_fat, "targets updated");
    state.store().set_targets(targets);

    Ok(Json(Message {
        message: "Targets updated successfully",
    }))
}
