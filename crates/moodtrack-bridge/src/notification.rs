use std::{collections::BTreeMap, fmt};

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Severity or category for user-visible notifications.
///
/// This is a presentation tag only: the notification center never branches
/// on it, the rendering layer uses it to pick a label or style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    /// Indicates a successful operation or positive outcome.
    Success,
    /// Indicates an error or failure that may affect functionality.
    Error,
    /// Neutral informational message that does not indicate success or failure.
    Info,
    /// Indicates a non-critical issue that the user should be aware of, but
    /// does not prevent normal operation.
    Warning,
}

impl NotificationKind {
    /// All kinds, in the order they are usually listed to the user.
    pub const ALL: [NotificationKind; 4] = [
        NotificationKind::Success,
        NotificationKind::Error,
        NotificationKind::Info,
        NotificationKind::Warning,
    ];

    /// Lowercase tag of the kind, as typed by the user and printed in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
            NotificationKind::Warning => "warning",
        }
    }

    /// Looks a kind up by its lowercase tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == tag)
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unique token identifying an active notification.
///
/// Only equality is meaningful; the value says nothing about insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(Uuid);

impl NotificationId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // short form is enough to tell toasts apart in logs
        write!(f, "{}", &self.0.simple().to_string()[..8])
    }
}

/// A primitive value attached to a notification as auxiliary data.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for DetailValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetailValue::Bool(value) => write!(f, "{value}"),
            DetailValue::Integer(value) => write!(f, "{value}"),
            DetailValue::Float(value) => write!(f, "{value}"),
            DetailValue::Text(value) => f.write_str(value),
        }
    }
}

impl From<bool> for DetailValue {
    fn from(value: bool) -> Self {
        DetailValue::Bool(value)
    }
}

impl From<i64> for DetailValue {
    fn from(value: i64) -> Self {
        DetailValue::Integer(value)
    }
}

impl From<f64> for DetailValue {
    fn from(value: f64) -> Self {
        DetailValue::Float(value)
    }
}

impl From<String> for DetailValue {
    fn from(value: String) -> Self {
        DetailValue::Text(value)
    }
}

impl From<&str> for DetailValue {
    fn from(value: &str) -> Self {
        DetailValue::Text(value.to_owned())
    }
}

/// Auxiliary key/value data carried by a notification. Ordered by key so
/// that rendering is stable.
pub type Details = BTreeMap<String, DetailValue>;

/// The caller-supplied part of a notification.
///
/// Nothing here is validated: empty titles and messages are displayed as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationRequest {
    /// The type/severity of the notification, determining its visual style.
    pub kind: NotificationKind,
    /// Short headline.
    pub title: String,
    /// Longer body text.
    pub message: String,
    /// Optional auxiliary data, empty by default.
    pub details: Details,
}

impl NotificationRequest {
    pub fn new(kind: NotificationKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
            details: Details::new(),
        }
    }

    /// Attaches one detail entry, replacing any previous value for `key`.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<DetailValue>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

/// A notification held in the active set and shown by the user interface.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// Identifier used to dismiss the notification before it expires.
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub details: Details,
    /// Insertion time. Informational only, expiry is timer-driven.
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Builds a notification from a request, assigning a fresh id and the
    /// current timestamp.
    pub fn new(request: NotificationRequest) -> Self {
        Self {
            id: NotificationId::generate(),
            kind: request.kind,
            title: request.title,
            message: request.message,
            details: request.details,
            created_at: Utc::now(),
        }
    }
}

/// Why a notification left the active set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalReason {
    /// Its expiry timer fired.
    Expired,
    /// It was dismissed explicitly by id.
    Dismissed,
    /// The whole active set was cleared.
    Cleared,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_tags_round_trip() {
        for kind in NotificationKind::ALL {
            assert_eq!(NotificationKind::from_tag(kind.as_str()), Some(kind));
        }
        assert_eq!(NotificationKind::from_tag("fatal"), None);
        assert_eq!(NotificationKind::from_tag("Success"), None);
    }

    #[test]
    fn request_keeps_empty_strings() {
        let request = NotificationRequest::new(NotificationKind::Info, "", "");
        let notification = Notification::new(request);
        assert_eq!(notification.title, "");
        assert_eq!(notification.message, "");
        assert!(notification.details.is_empty());
    }

    #[test]
    fn details_are_replaced_per_key_and_sorted() {
        let request = NotificationRequest::new(NotificationKind::Error, "Save failed", "")
            .with_detail("retry", true)
            .with_detail("attempts", 2i64)
            .with_detail("retry", false);

        let entries: Vec<_> = request.details.iter().collect();
        assert_eq!(
            entries,
            vec![
                (&"attempts".to_owned(), &DetailValue::Integer(2)),
                (&"retry".to_owned(), &DetailValue::Bool(false)),
            ]
        );
    }

    #[test]
    fn generated_ids_differ() {
        let first = Notification::new(NotificationRequest::new(NotificationKind::Info, "a", "b"));
        let second = Notification::new(NotificationRequest::new(NotificationKind::Info, "a", "b"));
        assert_ne!(first.id, second.id);
    }
}
