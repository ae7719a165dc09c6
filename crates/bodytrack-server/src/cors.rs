//! CORS layer for the browser client.

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::CorsSection;

/// `"*"` (or empty) allows any origin; otherwise a comma-separated list.
/// Unparseable list entries are skipped, and a list with nothing usable falls
/// back to any origin.
pub fn setup_cors(cfg: &CorsSection) -> CorsLayer {
    let raw = cfg.allowed_origins.trim();
    let allow_origin = if raw.is_empty() || raw == "*" {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();
        if origins.is_empty() {
            tracing::warn!(allowed_origins = %raw, "no valid CORS origins, allowing any");
            AllowOrigin::any()
        } else {
            AllowOrigin::list(origins)
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
}
