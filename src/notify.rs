//! Notification fan-out between producers and renderers.
//!
//! Producers publish through a [`NotificationBus`] handed to them; sinks
//! are registered on the bus explicitly. There is no global instance.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum NotificationKind {
    /// An operation completed.
    Success,
    /// An operation was rejected.
    Error,
    /// Informational message.
    Info,
}

/// A user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Notification {
    /// Severity.
    pub kind: NotificationKind,
    /// Message text.
    pub message: String,
}

impl Notification {
    /// Success notification.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    /// Error notification.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }

    /// Informational notification.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Receives published notifications.
pub trait NotificationSink: Send + Sync {
    /// Handle one notification.
    fn notify(&self, notification: &Notification);
}

impl<F> NotificationSink for F
where
    F: Fn(&Notification) + Send + Sync,
{
    fn notify(&self, notification: &Notification) {
        self(notification);
    }
}

/// Fans notifications out to every registered sink.
#[derive(Clone, Default)]
pub struct NotificationBus {
    sinks: Vec<Arc<dyn NotificationSink>>,
}

impl NotificationBus {
    /// Create a bus with no sinks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a sink that will receive subsequent notifications.
    pub fn subscribe(&mut self, sink: Arc<dyn NotificationSink>) {
        self.sinks.push(sink);
    }

    /// Builder form of [`NotificationBus::subscribe`].
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn NotificationSink>) -> Self {
        self.subscribe(sink);
        self
    }

    /// Deliver a notification to all sinks, in registration order.
    pub fn publish(&self, notification: &Notification) {
        debug!(kind = ?notification.kind, sinks = self.sinks.len(), "{}", notification.message);
        for sink in &self.sinks {
            sink.notify(notification);
        }
    }

    /// Number of registered sinks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    /// Returns true when no sink is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl fmt::Debug for NotificationBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationBus")
            .field("sinks", &self.sinks.len())
            .finish()
    }
}
