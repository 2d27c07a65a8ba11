//! Notification types for surfacing transient operation outcomes.
//!
//! The ledger emits one [`Notification`] per completed mutating operation
//! over an unbounded channel; the bot layer decides how to display them.
//! Sends are best-effort - a dropped receiver never fails an operation.

use tokio::sync::mpsc;

/// Visual flavor of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// The operation completed
    Success,
    /// The operation failed and was rolled back
    Destructive,
}

/// A transient user-facing message describing an operation outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Short headline, e.g. "Debt added"
    pub title: String,
    /// One-line detail, e.g. the debtor concerned
    pub description: String,
    /// Whether this reports a success or a rolled-back failure
    pub kind: NotificationKind,
}

impl Notification {
    /// Builds a success notification.
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: NotificationKind::Success,
        }
    }

    /// Builds a failure notification.
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: NotificationKind::Destructive,
        }
    }
}

/// Sending half of the notification channel, held by the ledger.
pub type NotificationSender = mpsc::UnboundedSender<Notification>;

/// Receiving half of the notification channel, drained by the bot.
pub type NotificationReceiver = mpsc::UnboundedReceiver<Notification>;

/// Creates the notification channel.
#[must_use]
pub fn channel() -> (NotificationSender, NotificationReceiver) {
    mpsc::unbounded_channel()
}
