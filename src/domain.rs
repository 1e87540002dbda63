//! ==============================================================================
//! domain.rs - shared data model
//! ==============================================================================
//!
//! purpose:
//!     wire types shared between the telemetry simulator (writer) and the
//!     web api (readers). field names serialize in the camelCase form the
//!     dashboard frontend consumes.
//!
//! relationships:
//!     - written by: simulator.rs / state.rs (one writer per tick)
//!     - read by: server.rs (json api responses)
//!
//! ==============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// one synthesized reading of the four tracked environmental metrics.
/// immutable once created; the "current" reference is replaced wholesale
/// each tick, never mutated.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorSample {
    /// synthetic sample id
    pub id: Uuid,
    /// utc time the reading was produced
    pub timestamp: DateTime<Utc>,
    /// volumetric soil moisture (%)
    pub soil_moisture: f64,
    /// air temperature (celsius)
    pub temperature: f64,
    /// relative humidity (0-100%)
    pub humidity: f64,
    /// synthetic vegetation-health index (NDVI-like, unrelated to any
    /// real imaging pipeline)
    pub crop_health: f64,
    /// originating sensor, drawn from the fixed registry pool
    pub sensor_id: String,
}

/// field coordinates, both axes confined to [0, 100].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// simulated robot state. battery and position drift each tick;
/// `is_online`, `mode` and `speed` change only through the admin api.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotStatus {
    pub is_online: bool,
    /// charge percentage, clamped to [20, 100], never recharges here
    pub battery: f64,
    pub position: Position,
    /// ground speed (m/s), static in this simulation
    pub speed: f64,
    pub last_update: DateTime<Utc>,
    pub mode: RobotMode,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RobotMode {
    Idle,
    Patrolling,
    Charging,
    Maintenance,
}

/// a persistent, acknowledgeable record raised when a sample crosses a
/// threshold. only `acknowledged` ever changes after creation (false->true,
/// exactly once, via the api).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub level: AlertLevel,
    pub message: String,
    pub sensor_id: String,
    pub timestamp: DateTime<Utc>,
    pub acknowledged: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Critical,
    Warning,
    Info,
}

/// registry entry for one deployed sensor (backing for the admin screens).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sensor {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SensorKind,
    pub location: Position,
    pub status: SensorStatus,
    pub last_reading: f64,
    pub unit: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorKind {
    SoilMoisture,
    Temperature,
    Humidity,
    CropHealth,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorStatus {
    Active,
    Inactive,
    Maintenance,
}

/// one row of the admin-configurable threshold table.
///
/// the table is served and edited over the api but the live evaluator runs
/// on its own fixed cutoffs - see thresholds.rs for the boundary.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertThreshold {
    pub id: String,
    #[serde(rename = "sensorType")]
    pub sensor_kind: SensorKind,
    pub min_value: f64,
    pub max_value: f64,
    pub alert_level: AlertLevel,
}
