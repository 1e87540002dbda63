//! ==============================================================================
//! alerts.rs - bounded alert and notification stores
//! ==============================================================================
//!
//! both lists are newest-first; capping drops from the tail (oldest) and is
//! only evaluated on insertion. the notification list is an independent
//! transient view: clearing it neither acknowledges nor deletes alerts.
//!
//! ==============================================================================

use uuid::Uuid;

use crate::domain::Alert;

/// persistent alert history cap
pub const MAX_ALERTS: usize = 50;

/// transient notification feed cap
pub const MAX_NOTIFICATIONS: usize = 10;

#[derive(Debug, Default)]
pub struct AlertStore {
    alerts: Vec<Alert>,
    notifications: Vec<Alert>,
}

impl AlertStore {
    /// prepend to both lists, evicting past each cap
    pub fn record(&mut self, alert: Alert) {
        self.notifications.insert(0, alert.clone());
        self.notifications.truncate(MAX_NOTIFICATIONS);

        self.alerts.insert(0, alert);
        self.alerts.truncate(MAX_ALERTS);
    }

    /// flip `acknowledged` for the matching alert. idempotent; an absent id
    /// is a no-op. returns whether the id was found.
    pub fn acknowledge(&mut self, id: Uuid) -> bool {
        match self.alerts.iter_mut().find(|a| a.id == id) {
            Some(alert) => {
                alert.acknowledged = true;
                true
            }
            None => false,
        }
    }

    /// empty the notification feed; the alert list is untouched
    pub fn clear_notifications(&mut self) {
        self.notifications.clear();
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn notifications(&self) -> &[Alert] {
        &self.notifications
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AlertLevel;
    use chrono::Utc;

    fn alert(n: usize) -> Alert {
        Alert {
            id: Uuid::new_v4(),
            level: AlertLevel::Info,
            message: format!("alert {n}"),
            sensor_id: "sensor-1".to_string(),
            timestamp: Utc::now(),
            acknowledged: false,
        }
    }

    #[test]
    fn record_keeps_newest_first() {
        let mut store = AlertStore::default();
        store.record(alert(1));
        store.record(alert(2));
        assert_eq!(store.alerts()[0].message, "alert 2");
        assert_eq!(store.alerts()[1].message, "alert 1");
    }

    #[test]
    fn alert_cap_evicts_the_oldest() {
        let mut store = AlertStore::default();
        let first = alert(0);
        let first_id = first.id;
        store.record(first);
        for n in 1..=50 {
            store.record(alert(n));
        }

        assert_eq!(store.alerts().len(), MAX_ALERTS);
        assert!(store.alerts().iter().all(|a| a.id != first_id));
        assert_eq!(store.alerts()[0].message, "alert 50");
        assert_eq!(store.alerts()[49].message, "alert 1");
    }

    #[test]
    fn notification_cap_is_ten() {
        let mut store = AlertStore::default();
        for n in 0..25 {
            store.record(alert(n));
        }
        assert_eq!(store.notifications().len(), MAX_NOTIFICATIONS);
        assert_eq!(store.notifications()[0].message, "alert 24");
        // alerts kept the full run
        assert_eq!(store.alerts().len(), 25);
    }

    #[test]
    fn acknowledge_is_idempotent() {
        let mut store = AlertStore::default();
        let a = alert(1);
        let id = a.id;
        store.record(a);

        assert!(store.acknowledge(id));
        assert!(store.alerts()[0].acknowledged);

        assert!(store.acknowledge(id));
        assert!(store.alerts()[0].acknowledged);
        assert_eq!(store.alerts().len(), 1);
    }

    #[test]
    fn acknowledge_absent_id_is_a_noop() {
        let mut store = AlertStore::default();
        store.record(alert(1));

        assert!(!store.acknowledge(Uuid::new_v4()));
        assert!(!store.alerts()[0].acknowledged);
        assert_eq!(store.alerts().len(), 1);
    }

    #[test]
    fn acknowledge_touches_only_the_matching_alert() {
        let mut store = AlertStore::default();
        let a = alert(1);
        let id = a.id;
        store.record(a);
        store.record(alert(2));

        store.acknowledge(id);
        assert!(store.alerts()[1].acknowledged);
        assert!(!store.alerts()[0].acknowledged);
    }

    #[test]
    fn clearing_notifications_leaves_alerts_intact() {
        let mut store = AlertStore::default();
        for n in 0..5 {
            store.record(alert(n));
        }

        store.clear_notifications();
        assert!(store.notifications().is_empty());
        assert_eq!(store.alerts().len(), 5);
    }
}
