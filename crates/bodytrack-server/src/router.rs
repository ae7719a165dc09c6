//! Axum router wiring.
//!
//! `/api/*` carries the tracker API and is instrumented per route; the
//! operational endpoints sit beside it without the request metrics layer.

use axum::{extract::DefaultBodyLimit, middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{api, app_state::AppState, cors, obs, ops};

pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/api/entries", get(api::entries::list).post(api::entries::add))
        .route("/api/targets", get(api::targets::get).post(api::targets::set))
        .route("/api/analytics", get(api::insights::analytics))
        .route("/api/progress", get(api::insights::progress))
        .route("/api/composition", get(api::insights::composition))
        .route("/api/photos", get(api::photos::list).post(api::photos::add))
        .route("/api/quote", get(api::insights::quote))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            obs::track_request,
        ));

    let ops_routes = Router::new()
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .route("/metrics", get(ops::metrics));

    let cfg = state.cfg();
    Router::new()
        .merge(api_routes)
        .merge(ops_routes)
        .layer(DefaultBodyLimit::max(cfg.server.max_body_bytes))
        .layer(cors::setup_cors(&cfg.cors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
