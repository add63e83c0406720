use chrono::{DateTime, Local, Utc};
use moodtrack_bridge::notification::{Details, NotificationKind};

/// Short fixed-width label for a notification kind.
pub fn format_kind(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "[ ok ]",
        NotificationKind::Error => "[fail]",
        NotificationKind::Info => "[info]",
        NotificationKind::Warning => "[warn]",
    }
}

/// Formats a creation timestamp as local wall-clock time, `HH:MM:SS`.
pub fn format_time(timestamp: DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%H:%M:%S").to_string()
}

/// Formats details as `key=value` pairs separated by spaces, in key order.
pub fn format_details(details: &Details) -> String {
    details
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join(" ")
}
