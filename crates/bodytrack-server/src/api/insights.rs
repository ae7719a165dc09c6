//! Derived views. Recomputed from the store on every call.

use axum::{extract::State, Json};

use bodytrack_core::metrics::{AnalyticsSnapshot, CompositionSnapshot, ProgressSnapshot};
use bodytrack_core::motivation::Quote;

use super::ApiError;
use crate::app_state::AppState;

pub async fn analytics(State(state): State<AppState>) -> Result<Json<AnalyticsSnapshot>, ApiError> {
    Ok(Json(state.store().analytics()?))
}

pub async fn progress(State(state): State<AppState>) -> Result<Json<ProgressSnapshot>, ApiError> {
    Ok(Json(state.store().progress()?))
}

pub async fn composition(
    State(state): State<AppState>,
) -> Result<Json<CompositionSnapshot>, ApiError> {
    Ok(Json(state.store().composition()?))
}

pub async fn quote(State(state): State<AppState>) -> Json<Quote> {
    Json(state.next_quote())
}
