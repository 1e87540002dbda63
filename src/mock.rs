//! ==============================================================================
//! mock.rs - mock reading generator
//! ==============================================================================
//!
//! purpose:
//!     synthesizes sensor readings in place of real hardware ingestion.
//!     `sample` draws one live reading; `history` builds a backdated hourly
//!     series with a diurnal pattern so the charts look plausible.
//!
//! relationships:
//!     - used by: state.rs (seeding + per-tick sample)
//!     - pure generation: no state between calls, no failure modes
//!
//! ==============================================================================

use chrono::{Duration, Timelike, Utc};
use rand::Rng;
use std::f64::consts::PI;
use uuid::Uuid;

use crate::domain::{Position, Sensor, SensorKind, SensorSample, SensorStatus};

/// number of sensors in the fixed pool ("sensor-1" .. "sensor-4")
pub const SENSOR_POOL: u32 = 4;

/// draw one live reading, all four metrics uniform within their domain range
pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> SensorSample {
    SensorSample {
        id: Uuid::new_v4(),
        timestamp: Utc::now(),
        soil_moisture: rng.random_range(25.0..=75.0),
        temperature: rng.random_range(18.0..=38.0),
        humidity: rng.random_range(40.0..=80.0),
        crop_health: rng.random_range(60.0..=95.0),
        sensor_id: format!("sensor-{}", rng.random_range(1..=SENSOR_POOL)),
    }
}

/// build `days * 24` hourly readings going backward from now, oldest first.
///
/// temperature and humidity ride a sinusoid peaking mid-afternoon (phase
/// anchored at 06:00); soil moisture and crop health drift on slower waves.
/// noise is uniform and independent per point.
pub fn history<R: Rng + ?Sized>(rng: &mut R, days: u32) -> Vec<SensorSample> {
    let hours = i64::from(days) * 24;
    let now = Utc::now();

    (0..hours)
        .map(|i| {
            let timestamp = now - Duration::hours(hours - i);
            let hour_of_day = f64::from(timestamp.hour());

            let diurnal = ((hour_of_day - 6.0) * PI / 12.0).sin();
            let temp_base = 22.0 + diurnal * 8.0;
            let humidity_base = 60.0 - diurnal * 15.0;

            SensorSample {
                id: Uuid::new_v4(),
                timestamp,
                soil_moisture: 35.0 + rng.random_range(0.0..30.0) + (i as f64 * 0.1).sin() * 10.0,
                temperature: temp_base + rng.random_range(-2.0..2.0),
                humidity: humidity_base + rng.random_range(-5.0..5.0),
                crop_health: 70.0 + rng.random_range(0.0..20.0) + (i as f64 * 0.05).sin() * 5.0,
                sensor_id: format!("sensor-{}", (i % i64::from(SENSOR_POOL)) + 1),
            }
        })
        .collect()
}

/// the deployed sensor registry the admin screens start from
pub fn sensors() -> Vec<Sensor> {
    vec![
        Sensor {
            id: "sensor-1".to_string(),
            name: "Soil Moisture Sensor A".to_string(),
            kind: SensorKind::SoilMoisture,
            location: Position { x: 20.0, y: 30.0 },
            status: SensorStatus::Active,
            last_reading: 45.2,
            unit: "%".to_string(),
        },
        Sensor {
            id: "sensor-2".to_string(),
            name: "Temperature Sensor B".to_string(),
            kind: SensorKind::Temperature,
            location: Position { x: 60.0, y: 40.0 },
            status: SensorStatus::Active,
            last_reading: 28.5,
            unit: "°C".to_string(),
        },
        Sensor {
            id: "sensor-3".to_string(),
            name: "Humidity Sensor C".to_string(),
            kind: SensorKind::Humidity,
            location: Position { x: 40.0, y: 70.0 },
            status: SensorStatus::Active,
            last_reading: 65.8,
            unit: "%".to_string(),
        },
        Sensor {
            id: "sensor-4".to_string(),
            name: "Crop Health Sensor D".to_string(),
            kind: SensorKind::CropHealth,
            location: Position { x: 80.0, y: 60.0 },
            status: SensorStatus::Maintenance,
            last_reading: 78.3,
            unit: "NDVI".to_string(),
        },
    ]
}
