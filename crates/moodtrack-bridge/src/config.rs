use serde::{Deserialize, Serialize};

/// Default lifetime of a notification before it is removed automatically.
pub const DEFAULT_EXPIRY_MS: u64 = 5000;

/// Configuration for the notification center.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct NotificationsConfig {
    /// Delay in milliseconds between adding a notification and its automatic
    /// removal. Applies to every notification alike.
    pub expiry_ms: u64,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            expiry_ms: DEFAULT_EXPIRY_MS,
        }
    }
}

impl NotificationsConfig {
    pub fn expiry(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.expiry_ms)
    }
}

/// Global application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Configuration for the notifications shown to the user.
    pub notifications: NotificationsConfig,
}
