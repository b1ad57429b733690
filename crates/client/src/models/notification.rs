use chrono::{DateTime, Duration, Utc};

/// Visual severity of a transient message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// How long a success message stays visible.
const SUCCESS_TTL_SECS: i64 = 3;
/// How long an error message stays visible.
const ERROR_TTL_SECS: i64 = 5;

/// A transient inline message shown near the form that triggered it.
///
/// Expiry is data, not a timer: the renderer polls `is_expired` (or the
/// app's `active_notifications`) and drops messages past their deadline.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub expires_at: DateTime<Utc>,
}

impl Notification {
    pub fn success(message: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Success,
            expires_at: now + Duration::seconds(SUCCESS_TTL_SECS),
        }
    }

    pub fn error(message: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Error,
            expires_at: now + Duration::seconds(ERROR_TTL_SECS),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}
