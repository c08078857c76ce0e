//! Per-user notification records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use lumina_core::{NotificationId, UserId};

/// What produced a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// A new order landed for a seller.
    Order,
    /// System-generated confirmation (e.g., checkout receipt for the buyer).
    System,
    /// Operational alert.
    Alert,
}

/// A one-way message addressed to exactly one user.
///
/// Only checkout creates these. `read` starts `false` and no flow in scope
/// flips it; the "mark all as read" control upstream was never wired to state,
/// and that gap is preserved rather than guessed at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique notification ID.
    pub id: NotificationId,
    /// Addressee.
    pub user_id: UserId,
    /// Human-readable message body.
    pub message: String,
    /// Creation time.
    pub timestamp: DateTime<Utc>,
    /// Whether the addressee has seen this. Never set `true` in scope.
    pub read: bool,
    /// What produced this notification.
    pub kind: NotificationKind,
}

impl Notification {
    /// Create an unread notification stamped now.
    #[must_use]
    pub fn new(user_id: UserId, message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            id: NotificationId::generate(),
            user_id,
            message: message.into(),
            timestamp: Utc::now(),
            read: false,
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_unread() {
        let n = Notification::new(UserId::new("u1"), "hello", NotificationKind::System);
        assert!(!n.read);
        assert_eq!(n.kind, NotificationKind::System);
        assert_eq!(n.user_id, UserId::new("u1"));
    }
}
