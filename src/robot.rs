//! ==============================================================================
//! robot.rs - simulated robot status updater
//! ==============================================================================
//!
//! one tick merges a partial update into the previous status: battery drains
//! with a floor clamp, position takes a bounded random-walk step, and
//! `last_update` moves to now. `is_online`, `mode` and `speed` pass through
//! untouched - those change only via the admin api.
//!
//! ==============================================================================

use chrono::Utc;
use rand::Rng;

use crate::domain::{Position, RobotMode, RobotStatus};

/// battery never drains below this (%)
pub const BATTERY_FLOOR: f64 = 20.0;

/// field coordinates are confined to [0, FIELD_MAX]²
const FIELD_MAX: f64 = 100.0;

/// max battery drain per tick (%)
const DRAIN_MAX: f64 = 0.1;

/// max random-walk step per axis per tick
const STEP_MAX: f64 = 2.5;

/// status at process start: fully charged, centered in the field
pub fn initial() -> RobotStatus {
    RobotStatus {
        is_online: true,
        battery: 100.0,
        position: Position { x: 50.0, y: 50.0 },
        speed: 1.2,
        last_update: Utc::now(),
        mode: RobotMode::Patrolling,
    }
}

/// advance the status by one tick
pub fn tick<R: Rng + ?Sized>(prev: &RobotStatus, rng: &mut R) -> RobotStatus {
    RobotStatus {
        battery: (prev.battery - rng.random_range(0.0..DRAIN_MAX)).max(BATTERY_FLOOR),
        position: Position {
            x: (prev.position.x + rng.random_range(-STEP_MAX..=STEP_MAX)).clamp(0.0, FIELD_MAX),
            y: (prev.position.y + rng.random_range(-STEP_MAX..=STEP_MAX)).clamp(0.0, FIELD_MAX),
        },
        last_update: Utc::now(),
        ..prev.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn battery_drains_monotonically_to_the_floor() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut status = initial();
        status.battery = 20.05;

        for _ in 0..100 {
            let next = tick(&status, &mut rng);
            assert!(next.battery <= status.battery);
            assert!(next.battery >= BATTERY_FLOOR, "battery {}", next.battery);
            status = next;
        }
        assert_eq!(status.battery, BATTERY_FLOOR);
    }

    #[test]
    fn position_stays_in_the_field_from_a_corner() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut status = initial();
        status.position = Position { x: 0.0, y: 0.0 };

        for _ in 0..1000 {
            status = tick(&status, &mut rng);
            assert!((0.0..=100.0).contains(&status.position.x), "x {}", status.position.x);
            assert!((0.0..=100.0).contains(&status.position.y), "y {}", status.position.y);
        }
    }

    #[test]
    fn step_size_is_bounded() {
        let mut rng = StdRng::seed_from_u64(3);
        let status = initial();
        for _ in 0..100 {
            let next = tick(&status, &mut rng);
            assert!((next.position.x - status.position.x).abs() <= STEP_MAX);
            assert!((next.position.y - status.position.y).abs() <= STEP_MAX);
        }
    }

    #[test]
    fn tick_leaves_admin_fields_untouched() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut status = initial();
        status.mode = RobotMode::Charging;
        status.is_online = false;
        status.speed = 0.0;

        let next = tick(&status, &mut rng);
        assert_eq!(next.mode, RobotMode::Charging);
        assert!(!next.is_online);
        assert_eq!(next.speed, 0.0);
        assert!(next.last_update >= status.last_update);
    }
}
