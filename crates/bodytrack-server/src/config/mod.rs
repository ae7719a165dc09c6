//! Server config loader (strict parsing).

pub mod schema;

use std::fs;

use bodytrack_core::error::{Result, TrackerError};

pub use schema::{CorsSection, PhotoSection, ServerSection, TrackerConfig};

/// Env var naming the config file.
pub const CONFIG_ENV: &str = "BODYTRACK_CONFIG";
/// Config file used when `BODYTRACK_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "bodytrack.yaml";

pub fn load_from_file(path: &str) -> Result<TrackerConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| TrackerError::Internal(format!("read config {path} failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<TrackerConfig> {
    let cfg: TrackerConfig = serde_yaml::from_str(s)
        .map_err(|e| TrackerError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Resolve the config the binary should run with.
///
/// An explicit `BODYTRACK_CONFIG` must exist. Without it, `bodytrack.yaml` is
/// read when present and built-in defaults are used otherwise.
pub fn load_default() -> Result<TrackerConfig> {
    match std::env::var(CONFIG_ENV) {
        Ok(path) => load_from_file(&path),
        Err(_) if std::path::Path::new(DEFAULT_CONFIG_PATH).exists() => {
            load_from_file(DEFAULT_CONFIG_PATH)
        }
        Err(_) => {
            tracing::warn!(path = DEFAULT_CONFIG_PATH, "config file not found, using defaults");
            let cfg = TrackerConfig::default();
            cfg.validate()?;
            Ok(cfg)
        }
    }
}
