//! JSON API handlers under `/api`.
//!
//! Every handler returns either its payload or an `ApiError`, which renders
//! `{"error": ..., "code": ...}` with a status picked from the client code.
//! `NO_DATA` is not a failure of the server and goes out as 200.

pub mod entries;
pub mod insights;
pub mod photos;
pub mod targets;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use bodytrack_core::error::{ClientCode, Result, TrackerError};

use crate::app_state::AppState;

#[derive(Debug)]
pub struct ApiError(pub TrackerError);

impl From<TrackerError> for ApiError {
    fn from(e: TrackerError) -> Self {
        Self(e)
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: String,
    code: &'a str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.client_code();
        let status = match code {
            ClientCode::NoData => StatusCode::OK,
            ClientCode::BadRequest => StatusCode::BAD_REQUEST,
            ClientCode::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ClientCode::UnsupportedVersion | ClientCode::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = ErrorBody {
            error: self.0.to_string(),
            code: code.as_str(),
        };
        (status, Json(body)).into_response()
    }
}

/// Plain acknowledgement body.
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: &'static str,
}

/// Unwrap the JSON extractor, folding axum's rejection into our error type.
fn json_body(payload: std::result::Result<Json<Value>, JsonRejection>) -> Result<Value> {
    match payload {
        Ok(Json(v)) => Ok(v),
        Err(rej) if rej.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            Err(TrackerError::PayloadTooLarge(rej.body_text()))
        }
        Err(rej) => Err(TrackerError::BadRequest(rej.body_text())),
    }
}

/// Count and log a rejected client payload.
fn rejected(state: &AppState, route: &'static str, err: TrackerError) -> ApiError {
    let field = match &err {
        TrackerError::MalformedInput { field, .. } => field.as_str(),
        _ => "",
    };
    tracing::warn!(route, field, error = %err, "rejected input");
    state
        .metrics()
        .rejected_inputs
        .inc(&[("route", route), ("code", err.client_code().as_str())]);
    ApiError(err)
}
