//! ==============================================================================
//! simulator.rs - periodic telemetry simulator
//! ==============================================================================
//!
//! purpose:
//!     the single writer. a spawned task advances the shared state on a
//!     fixed period; each tick runs atomically under the write lock, so
//!     ticks are fifo and never interleave.
//!
//! lifecycle:
//!     `start` returns a handle owning the task; `stop` cancels it and
//!     awaits termination. no other way to pause the stream exists.
//!
//! ==============================================================================

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::state::SharedState;

pub struct SimulatorHandle {
    token: CancellationToken,
    task: JoinHandle<()>,
}

impl SimulatorHandle {
    /// cancel the tick loop and wait for it to wind down
    pub async fn stop(self) {
        self.token.cancel();
        let _ = self.task.await;
    }
}

/// spawn the tick loop against the shared state. the first tick fires
/// immediately, then every `period`.
pub fn start(state: SharedState, period: Duration, show_samples: bool) -> SimulatorHandle {
    let token = CancellationToken::new();
    let tick_token = token.clone();

    let task = tokio::spawn(async move {
        let mut rng = StdRng::from_os_rng();
        let mut ticker = tokio::time::interval(period);

        loop {
            tokio::select! {
                _ = tick_token.cancelled() => {
                    info!("simulator stopped");
                    break;
                }
                _ = ticker.tick() => {
                    let mut state = state.write().await;
                    let raised = state.advance(&mut rng);

                    if show_samples {
                        info!(
                            "[{}] soil {:.1}% | temp {:.1}°C | humidity {:.1}% | crop {:.1}",
                            state.current.sensor_id,
                            state.current.soil_moisture,
                            state.current.temperature,
                            state.current.humidity,
                            state.current.crop_health,
                        );
                    }
                    if !raised.is_empty() {
                        info!(count = raised.len(), "alerts raised");
                    }
                    debug!(
                        "robot: battery {:.1}% at ({:.0}, {:.0})",
                        state.robot.battery, state.robot.position.x, state.robot.position.y,
                    );
                }
            }
        }
    });

    SimulatorHandle { token, task }
}
