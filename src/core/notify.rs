//! User-visible notifications sent from the data boundary to the presentation layer.
//!
//! Pages that fetch data hold a [`Notifier`]; whatever renders the storefront owns the
//! matching [`NotificationReceiver`] and decides how to display each message.

use std::fmt;
use tokio::sync::mpsc;
use tracing::warn;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Something failed but the page keeps working
    Error,
    /// Informational message
    Info,
}

/// A transient, non-fatal message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Severity
    pub level: Level,
    /// Text shown to the user
    pub message: String,
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level {
            Level::Error => write!(f, "❌ {}", self.message),
            Level::Info => write!(f, "ℹ️ {}", self.message),
        }
    }
}

/// Receiving half owned by the presentation layer.
pub type NotificationReceiver = mpsc::UnboundedReceiver<Notification>;

/// Sending half handed to pages. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: mpsc::UnboundedSender<Notification>,
}

impl Notifier {
    /// Sends an error notification.
    pub fn error(&self, message: impl Into<String>) {
        self.send(Level::Error, message.into());
    }

    /// Sends an informational notification.
    pub fn info(&self, message: impl Into<String>) {
        self.send(Level::Info, message.into());
    }

    fn send(&self, level: Level, message: String) {
        if let Err(e) = self.tx.send(Notification { level, message }) {
            warn!("Notification dropped, presentation layer is gone: {}", e.0.message);
        }
    }
}

/// Creates a connected notifier/receiver pair.
#[must_use]
pub fn channel() -> (Notifier, NotificationReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (Notifier { tx }, rx)
}

/// Takes every notification currently queued without waiting.
pub fn drain(rx: &mut NotificationReceiver) -> Vec<Notification> {
    let mut queued = Vec::new();
    while let Ok(notification) = rx.try_recv() {
        queued.push(notification);
    }
    queued
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notifications_arrive_in_order() {
        let (notifier, mut rx) = channel();
        notifier.error("Failed to load products");
        notifier.clone().info("Catalog seeded");

        let queued = drain(&mut rx);
        assert_eq!(queued.len(), 2);
        assert_eq!(queued[0].level, Level::Error);
        assert_eq!(queued[0].to_string(), "❌ Failed to load products");
        assert_eq!(queued[1].level, Level::Info);
        assert!(drain(&mut rx).is_empty());
    }

    #[test]
    fn test_send_without_receiver_does_not_panic() {
        let (notifier, rx) = channel();
        drop(rx);
        notifier.error("nobody is listening");
    }
}
