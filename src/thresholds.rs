//! ==============================================================================
//! thresholds.rs - threshold evaluation
//! ==============================================================================
//!
//! purpose:
//!     classifies each fresh sample against the live alert cutoffs and
//!     carries the admin-configurable threshold table.
//!
//! boundary:
//!     the live evaluator runs on the two fixed cutoffs below. the editable
//!     table (`default_table`, served under /api/thresholds) is not consulted
//!     by the live path; wiring it in is the integration seam a hardened
//!     system would complete.
//!
//! ==============================================================================

use uuid::Uuid;

use crate::domain::{Alert, AlertLevel, AlertThreshold, SensorKind, SensorSample};

/// soil moisture below this raises a critical alert (%)
pub const SOIL_MOISTURE_CRITICAL: f64 = 30.0;

/// temperature above this raises a warning alert (°C)
pub const TEMPERATURE_WARNING: f64 = 35.0;

/// evaluate one sample against the live cutoffs.
///
/// metrics are checked independently, so a single sample can raise both
/// alerts. emission order is fixed: soil moisture first, then temperature.
/// every emitted alert starts unacknowledged.
pub fn evaluate(sample: &SensorSample) -> Vec<Alert> {
    let mut alerts = Vec::new();

    if sample.soil_moisture < SOIL_MOISTURE_CRITICAL {
        alerts.push(Alert {
            id: Uuid::new_v4(),
            level: AlertLevel::Critical,
            message: format!("Low soil moisture detected: {:.1}%", sample.soil_moisture),
            sensor_id: sample.sensor_id.clone(),
            timestamp: sample.timestamp,
            acknowledged: false,
        });
    }

    if sample.temperature > TEMPERATURE_WARNING {
        alerts.push(Alert {
            id: Uuid::new_v4(),
            level: AlertLevel::Warning,
            message: format!("High temperature detected: {:.1}°C", sample.temperature),
            sensor_id: sample.sensor_id.clone(),
            timestamp: sample.timestamp,
            acknowledged: false,
        });
    }

    alerts
}

/// the default admin threshold table (min/max per alert level)
pub fn default_table() -> Vec<AlertThreshold> {
    let rows = [
        (SensorKind::SoilMoisture, 30.0, 80.0, AlertLevel::Warning),
        (SensorKind::SoilMoisture, 20.0, 90.0, AlertLevel::Critical),
        (SensorKind::Temperature, 10.0, 35.0, AlertLevel::Warning),
        (SensorKind::Temperature, 5.0, 40.0, AlertLevel::Critical),
        (SensorKind::Humidity, 40.0, 80.0, AlertLevel::Warning),
        (SensorKind::CropHealth, 50.0, 100.0, AlertLevel::Warning),
    ];

    rows.iter()
        .enumerate()
        .map(|(i, &(sensor_kind, min_value, max_value, alert_level))| AlertThreshold {
            id: format!("th-{}", i + 1),
            sensor_kind,
            min_value,
            max_value,
            alert_level,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn fixture(soil_moisture: f64, temperature: f64) -> SensorSample {
        SensorSample {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            soil_moisture,
            temperature,
            humidity: 55.0,
            crop_health: 80.0,
            sensor_id: "sensor-2".to_string(),
        }
    }

    #[test]
    fn low_soil_moisture_raises_one_critical_with_the_value() {
        let alerts = evaluate(&fixture(29.9, 25.0));
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].level, AlertLevel::Critical);
        assert!(alerts[0].message.contains("29.9"), "{}", alerts[0].message);
        assert!(!alerts[0].acknowledged);
    }

    #[test]
    fn high_temperature_raises_one_warning_with_the_value() {
        let alerts = evaluate(&fixture(50.0, 35.1));
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].level, AlertLevel::Warning);
        assert!(alerts[0].message.contains("35.1"), "{}", alerts[0].message);
    }

    #[test]
    fn both_cutoffs_can_fire_on_one_sample_in_stable_order() {
        let alerts = evaluate(&fixture(29.0, 36.0));
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].level, AlertLevel::Critical);
        assert_eq!(alerts[1].level, AlertLevel::Warning);
    }

    #[test]
    fn cutoff_boundaries_are_exclusive() {
        assert!(evaluate(&fixture(30.0, 35.0)).is_empty());
    }

    #[test]
    fn nominal_sample_raises_nothing() {
        assert!(evaluate(&fixture(50.0, 25.0)).is_empty());
    }

    #[test]
    fn alerts_carry_the_originating_sensor() {
        let alerts = evaluate(&fixture(10.0, 20.0));
        assert_eq!(alerts[0].sensor_id, "sensor-2");
    }

    #[test]
    fn default_table_covers_all_four_metrics() {
        let table = default_table();
        assert_eq!(table.len(), 6);
        assert_eq!(table[0].id, "th-1");
        assert_eq!(table[5].id, "th-6");
        assert!(table.iter().any(|t| t.sensor_kind == SensorKind::Humidity));
        assert!(table.iter().any(|t| t.sensor_kind == SensorKind::CropHealth));
    }
}
