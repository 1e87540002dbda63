//! ==============================================================================
//! main.rs - agribot host entry point
//! ==============================================================================
//!
//! purpose:
//!     hosts the telemetry simulator for a (simulated) agricultural
//!     monitoring robot and serves its state over http.
//!
//! responsibilities:
//!     - load configuration (host.toml, with defaults)
//!     - seed the shared telemetry state (history, robot, registries)
//!     - serve the web api with data from the shared state
//!     - run the periodic simulator tick until shutdown
//!
//! architecture:
//!
//!     ┌─────────────────────────────────────────────────────────────┐
//!     │                      rust host (this file)                  │
//!     │  ┌──────────────┐                    ┌───────────────────┐  │
//!     │  │ simulator    │                    │ web server        │  │
//!     │  │ (3s tick)    │                    │ (port 5000)       │  │
//!     │  └──────┬───────┘                    └─────────┬─────────┘  │
//!     │         │ writes                        reads  │            │
//!     │         └───────────┐          ┌───────────────┘            │
//!     │                     ▼          ▼                            │
//!     │              ┌─────────────────────────┐                    │
//!     │              │ Arc<RwLock<Telemetry…>> │ <- state.rs        │
//!     │              └─────────────────────────┘                    │
//!     └─────────────────────────────────────────────────────────────┘
//!
//! there is exactly one writer (the simulator tick) and any number of
//! read-only observers, so readers always see the latest published state,
//! never a torn intermediate.
//!
//! ==============================================================================

mod alerts;
mod config;
mod domain;
mod mock;
mod robot;
mod server;
mod simulator;
mod state;
mod thresholds;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::state::{SharedState, TelemetryState};

#[tokio::main]
async fn main() -> Result<()> {
    // startup banner
    println!("===========================================================");
    println!("  AgriBot Host - Telemetry Simulator");
    println!("  \"Mock Readings In, Dashboard Data Out\"");
    println!("===========================================================");

    // step 1: load configuration
    let config = config::HostConfig::load_or_default();
    init_tracing(&config.logging.level);
    config.print_summary();

    // step 2: seed shared state
    let mut rng = StdRng::from_os_rng();
    let state: SharedState = Arc::new(RwLock::new(TelemetryState::new(&config, &mut rng)));
    tracing::info!(
        history = config.simulation.history_days * 24,
        "telemetry state seeded"
    );

    // step 3: start the web server in background
    let web_state = state.clone();
    let server_config = config.server.clone();
    tokio::spawn(async move {
        if let Err(e) = server::serve(web_state, &server_config).await {
            tracing::error!("web server error: {e}");
        }
    });

    // step 4: run the simulator until shutdown
    let handle = simulator::start(
        state,
        Duration::from_secs(config.simulation.tick_interval_seconds),
        config.logging.show_samples,
    );
    tracing::info!(
        interval_seconds = config.simulation.tick_interval_seconds,
        "simulator running"
    );

    tokio::signal::ctrl_c().await?;
    println!();
    tracing::info!("shutdown requested");
    handle.stop().await;

    Ok(())
}

/// subscriber filter comes from RUST_LOG when set, else the config level
fn init_tracing(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
