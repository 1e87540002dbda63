//! ==============================================================================
//! state.rs - shared telemetry state
//! ==============================================================================
//!
//! purpose:
//!     the process-wide state container: current sample, seeded history,
//!     robot status, alert/notification stores, and the admin registries.
//!
//! sharing model:
//!     Arc<RwLock<TelemetryState>> - exactly one writer (the simulator tick)
//!     and any number of read-only observers (the api handlers). a tick runs
//!     under the write lock, so readers never observe a torn intermediate.
//!
//! ==============================================================================

use rand::Rng;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::alerts::AlertStore;
use crate::config::HostConfig;
use crate::domain::{Alert, AlertThreshold, RobotStatus, Sensor, SensorSample};
use crate::{mock, robot, thresholds};

pub type SharedState = Arc<RwLock<TelemetryState>>;

pub struct TelemetryState {
    /// latest published reading, replaced wholesale each tick
    pub current: SensorSample,
    /// startup-seeded hourly history, oldest first
    pub history: Vec<SensorSample>,
    pub robot: RobotStatus,
    pub store: AlertStore,
    /// deployed sensor registry (admin crud)
    pub sensors: Vec<Sensor>,
    /// admin threshold table (not consulted by the live evaluator)
    pub thresholds: Vec<AlertThreshold>,
}

impl TelemetryState {
    /// seed the container at process start
    pub fn new<R: Rng + ?Sized>(config: &HostConfig, rng: &mut R) -> Self {
        let thresholds = if config.thresholds.is_empty() {
            thresholds::default_table()
        } else {
            config
                .thresholds
                .iter()
                .enumerate()
                .map(|(i, row)| AlertThreshold {
                    id: format!("th-{}", i + 1),
                    sensor_kind: row.sensor_type,
                    min_value: row.min_value,
                    max_value: row.max_value,
                    alert_level: row.alert_level,
                })
                .collect()
        };

        Self {
            current: mock::sample(rng),
            history: mock::history(rng, config.simulation.history_days),
            robot: robot::initial(),
            store: AlertStore::default(),
            sensors: mock::sensors(),
            thresholds,
        }
    }

    /// one simulator tick: draw a sample, publish it, move the robot,
    /// evaluate thresholds, record the resulting alerts. callers hold the
    /// write lock for the whole step.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<Alert> {
        let sample = mock::sample(rng);
        self.current = sample.clone();
        self.robot = robot::tick(&self.robot, rng);

        let raised = thresholds::evaluate(&sample);
        for alert in &raised {
            self.store.record(alert.clone());
        }
        raised
    }

    /// trailing `days * 24` history entries (the whole series if shorter)
    pub fn history_window(&self, days: u32) -> &[SensorSample] {
        let points = days as usize * 24;
        let start = self.history.len().saturating_sub(points);
        &self.history[start..]
    }
}
