//! Lightweight in-process observability.
//!
//! `metrics` holds the registry; `track_request` is the route layer that
//! feeds it with one sample per handled request.

pub mod metrics;

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};

use crate::app_state::AppState;

pub async fn track_request(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_owned());
    let method = req.method().as_str().to_owned();

    let started = Instant::now();
    let resp = next.run(req).await;
    let elapsed = started.elapsed();

    let status = resp.status();
    let metrics = state.metrics();
    metrics.http_requests.inc(&[
        ("route", route.as_str()),
        ("method", method.as_str()),
        ("status", status.as_str()),
    ]);
    metrics
        .handler_duration
        .observe(&[("route", route.as_str()), ("method", method.as_str())], elapsed);

    resp
}
