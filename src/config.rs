//! ==============================================================================
//! config.rs - Runtime Configuration Loader
//! ==============================================================================
//!
//! purpose:
//!     defines the schema for `host.toml`.
//!     loads configuration from file or falls back to defaults.
//!
//! structure:
//!     - SimulationConfig: tick period and seeded history window.
//!     - ServerConfig: where the api listens.
//!     - LoggingConfig: log level and per-tick sample logging.
//!     - [[thresholds]]: optional override of the default alert threshold table.
//!
//! ==============================================================================

use serde::Deserialize;
use std::path::Path;

use crate::domain::{AlertLevel, SensorKind};

/// Root configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct HostConfig {
    pub simulation: SimulationConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    /// empty means "use the built-in default table"
    #[serde(default)]
    pub thresholds: Vec<ThresholdRow>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SimulationConfig {
    /// seconds between simulator ticks
    pub tick_interval_seconds: u64,
    /// days of synthetic history seeded at startup
    pub history_days: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub show_samples: bool,
}

/// one `[[thresholds]]` entry; ids are assigned when the table is seeded
#[derive(Debug, Deserialize, Clone)]
pub struct ThresholdRow {
    pub sensor_type: SensorKind,
    pub min_value: f64,
    pub max_value: f64,
    pub alert_level: AlertLevel,
}

impl HostConfig {
    /// Load configuration from file
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to read config file: {}", e))?;

        let config: HostConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config: {}", e))?;

        Ok(config)
    }

    /// Load with default fallback
    pub fn load_or_default() -> Self {
        let paths = [
            std::path::PathBuf::from("config").join("host.toml"),
            std::path::PathBuf::from("host.toml"),
        ];

        for path in &paths {
            if path.exists() {
                match Self::load(path) {
                    Ok(config) => {
                        println!("[CONFIG] Loaded from {}", path.display());
                        return config;
                    }
                    Err(e) => {
                        println!("[CONFIG] Warning: Failed to load {}: {}", path.display(), e);
                    }
                }
            }
        }

        println!("[CONFIG] Warning: No config file found - using defaults");
        Self::default()
    }

    /// Print configuration summary
    pub fn print_summary(&self) {
        println!("┌─────────────────────────────────────────┐");
        println!("│           HOST CONFIGURATION            │");
        println!("├─────────────────────────────────────────┤");
        println!("│ Tick Interval: {}s                      │", self.simulation.tick_interval_seconds);
        println!("│ History Window: {} days                 │", self.simulation.history_days);
        println!("│ Bind: {}:{}                    │", self.server.bind_addr, self.server.port);
        println!("│ Log Level: {}                        │", self.logging.level);
        println!("└─────────────────────────────────────────┘");
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                tick_interval_seconds: 3,
                history_days: 7,
            },
            server: ServerConfig {
                bind_addr: "0.0.0.0".to_string(),
                port: 5000,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                show_samples: true,
            },
            thresholds: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let toml = r#"
            [simulation]
            tick_interval_seconds = 5
            history_days = 3

            [server]
            bind_addr = "127.0.0.1"
            port = 8080

            [logging]
            level = "debug"
            show_samples = false

            [[thresholds]]
            sensor_type = "soil_moisture"
            min_value = 30.0
            max_value = 80.0
            alert_level = "warning"
        "#;

        let config: HostConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.simulation.tick_interval_seconds, 5);
        assert_eq!(config.simulation.history_days, 3);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.thresholds.len(), 1);
        assert_eq!(config.thresholds[0].sensor_type, SensorKind::SoilMoisture);
        assert_eq!(config.thresholds[0].alert_level, AlertLevel::Warning);
    }

    #[test]
    fn thresholds_section_is_optional() {
        let toml = r#"
            [simulation]
            tick_interval_seconds = 3
            history_days = 7

            [server]
            bind_addr = "0.0.0.0"
            port = 5000

            [logging]
            level = "info"
            show_samples = true
        "#;

        let config: HostConfig = toml::from_str(toml).unwrap();
        assert!(config.thresholds.is_empty());
    }

    #[test]
    fn defaults_match_reference_behavior() {
        let config = HostConfig::default();
        assert_eq!(config.simulation.tick_interval_seconds, 3);
        assert_eq!(config.simulation.history_days, 7);
        assert_eq!(config.server.port, 5000);
    }
}
