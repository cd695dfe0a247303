//! Notification sink trait and implementations.

use std::sync::{Arc, Mutex};

use log::info;

use super::Notification;

/// Trait for delivering notifications to users.
///
/// Core services emit notifications through this trait after a state change
/// has committed. Delivery is best-effort: the contract is infallible, and
/// implementations log their own failures. A committed transition is never
/// rolled back because a notification could not be delivered.
///
/// # Design Rules
///
/// - `notify()` must be fast and non-blocking (no network calls, no DB writes)
/// - Implementations should queue notifications for async delivery
pub trait NotificationSink: Send + Sync {
    /// Deliver a single notification.
    fn notify(&self, notification: Notification);

    /// Deliver multiple notifications.
    ///
    /// Default implementation calls `notify()` for each one.
    fn notify_all(&self, notifications: Vec<Notification>) {
        for notification in notifications {
            self.notify(notification);
        }
    }
}

/// No-op implementation for tests or contexts that don't deliver.
#[derive(Clone, Default)]
pub struct NoOpNotificationSink;

impl NotificationSink for NoOpNotificationSink {
    fn notify(&self, _notification: Notification) {
        // Intentionally empty - notifications are discarded
    }
}

/// Sink that records deliveries to the application log.
#[derive(Clone, Default)]
pub struct LogNotificationSink;

impl NotificationSink for LogNotificationSink {
    fn notify(&self, notification: Notification) {
        info!(
            "notify user={} kind={} request={} proposal={:?}",
            notification.user_id,
            notification.kind.as_str(),
            notification.request_id,
            notification.proposal_id
        );
    }
}

/// Mock sink for testing - collects emitted notifications.
#[derive(Clone, Default)]
pub struct MockNotificationSink {
    notifications: Arc<Mutex<Vec<Notification>>>,
}

impl MockNotificationSink {
    pub fn new() -> Self {
        Self {
            notifications: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns all collected notifications.
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }

    /// Clears collected notifications.
    pub fn clear(&self) {
        self.notifications.lock().unwrap().clear();
    }

    /// Returns the number of collected notifications.
    pub fn len(&self) -> usize {
        self.notifications.lock().unwrap().len()
    }

    /// Returns true if nothing has been collected.
    pub fn is_empty(&self) -> bool {
        self.notifications.lock().unwrap().is_empty()
    }
}

impl NotificationSink for MockNotificationSink {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_sink_does_not_panic() {
        let sink = NoOpNotificationSink;
        sink.notify(Notification::request_completed("client-1", "req-1"));
        sink.notify_all(vec![
            Notification::proposal_received("client-1", "req-1", "prop-1"),
            Notification::proposal_rejected("designer-2", "req-1", "prop-2"),
        ]);
    }

    #[test]
    fn test_mock_sink_collects_notifications() {
        let sink = MockNotificationSink::new();
        assert!(sink.is_empty());

        sink.notify(Notification::proposal_received("client-1", "req-1", "prop-1"));
        assert_eq!(sink.len(), 1);

        sink.notify_all(vec![
            Notification::proposal_accepted("designer-1", "req-1", "prop-1"),
            Notification::proposal_rejected("designer-2", "req-1", "prop-2"),
        ]);
        assert_eq!(sink.len(), 3);

        sink.clear();
        assert!(sink.is_empty());
    }
}
