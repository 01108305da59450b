//! Pomo Clock - a 25 + 5 session/break countdown clock served over HTTP
//!
//! This is the main entry point for the pomo-clock application.

use std::sync::Arc;
use anyhow::anyhow;
use tokio::net::TcpListener;
use tracing::info;

use pomo_clock::{
    config::Config,
    state::{AppState, TimerWidget},
    api::create_router,
    services::build_cue,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("pomo_clock={},tower_http=info", config.log_level()))
        .init();

    info!("Starting pomo-clock v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, tick={}ms, cue={:?}",
          config.host, config.port, config.tick_ms, config.cue);

    let cue = build_cue(config.cue, config.cue_command.as_deref()).map_err(|e| anyhow!(e))?;

    // Mount the clock and wrap it in the server state
    let widget = TimerWidget::mount(cue, config.tick_interval());
    let state = Arc::new(AppState::new(widget, config.port, config.host.clone()));

    let app = create_router(Arc::clone(&state));

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Clock running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET  /                       - Clock page");
    info!("  POST /api/start_stop         - Start or stop the countdown");
    info!("  POST /api/reset              - Restore defaults");
    info!("  POST /api/break/decrement    - Shorten the break");
    info!("  POST /api/break/increment    - Lengthen the break");
    info!("  POST /api/session/decrement  - Shorten the session");
    info!("  POST /api/session/increment  - Lengthen the session");
    info!("  GET  /api/status             - Current clock state");
    info!("  GET  /api/events             - Stream of clock state changes");
    info!("  GET  /health                 - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    // Open connections may still hold the router, so stop the clock explicitly
    if let Err(e) = state.widget.reset() {
        tracing::warn!("Failed to stop clock on shutdown: {}", e);
    }
    drop(state);

    info!("Server shutdown complete");
    Ok(())
}
