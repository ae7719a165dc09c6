//! bodytrack server binary.
//!
//! - Loads config (`BODYTRACK_CONFIG`, else `bodytrack.yaml`, else defaults)
//! - Serves the tracker API until Ctrl-C, then drains

use tracing_subscriber::{fmt, EnvFilter};

use bodytrack_core::error::{Result, TrackerError};
use bodytrack_server::{app_state::AppState, config, router};

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::load_default()?;
    let listen = cfg.server.listen_addr()?;

    let state = AppState::new(cfg)?;
    let app = router::build_router(state.clone());

    tracing::info!(%listen, "bodytrack-server starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| TrackerError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state))
        .await
        .map_err(|e| TrackerError::Internal(format!("server failed: {e}")))?;

    tracing::info!("bodytrack-server stopped");
    Ok(())
}

async fn shutdown_signal(state: AppState) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "ctrl-c handler failed");
    }
    state.set_draining();
    tracing::info!("shutdown requested, draining");
}
