//! Communication bridge between frontend and backend.
//!
//! This crate defines the types and protocols used to connect a user-facing
//! frontend with the asynchronous backend that owns the notification center.
//!
//! The design is deliberately lightweight and unidirectional:
//! - The frontend sends commands (e.g., show a notification, dismiss one,
//!   request config).
//! - The backend pushes events (e.g., a notification was added or removed).
//!
//! Communication happens over [`tokio::sync::mpsc`] channels wrapped in
//! [`BridgeChannels`]. Commands to the backend are bounded and provide
//! back-pressure. Events to the frontend are unbounded, so the backend never
//! waits on the frontend and keeps draining commands and applying expiries.

pub mod config;
pub mod notification;

use tokio::sync::mpsc::{self, Receiver, Sender, UnboundedReceiver, UnboundedSender};

use crate::notification::{Notification, NotificationId, NotificationRequest, RemovalReason};

/// Messages emitted by the backend to inform the frontend of state updates.
#[derive(Debug, Clone)]
pub enum MessageFromBackend {
    /// A notification was appended to the tail of the active set.
    NotificationAdded(Notification),
    /// A notification left the active set. Only sent for actual removals.
    NotificationRemoved {
        id: NotificationId,
        reason: RemovalReason,
    },
    /// Snapshot of the active set, in display order.
    ActiveNotificationsResponse(Vec<Notification>),
    /// Response to the configuration request from the frontend.
    ConfigurationResponse(config::Config),
}

/// Commands issued by the frontend to control or query the backend.
#[derive(Debug, Clone)]
pub enum MessageToBackend {
    /// Request to show a new notification.
    ShowNotification(NotificationRequest),
    /// Request to dismiss a notification before it expires. Dismissing an
    /// unknown id is not an error.
    DismissNotification(NotificationId),
    /// Request to dismiss every active notification.
    ClearNotifications,
    /// Request for a snapshot of the active notifications.
    ActiveNotificationsRequest,
    /// Request for the application configuration.
    ConfigurationRequest,
}

/// Paired `tokio::mpsc` channels for bidirectional communication between
/// frontend and backend.
///
/// Only the frontend-to-backend direction is bounded. If both directions were
/// bounded, a frontend blocked on a full command channel would stop reading
/// events, and the backend would block on a full event channel.
pub struct BridgeChannels {
    /// Receiver used by the frontend to get messages from the backend.
    pub frontend_rx: UnboundedReceiver<MessageFromBackend>,
    /// Sender used by the frontend to send commands to the backend.
    pub frontend_tx: Sender<MessageToBackend>,

    /// Receiver used by the backend to get commands from the frontend.
    pub backend_rx: Receiver<MessageToBackend>,
    /// Sender used by the backend to send events/responses to the frontend.
    pub backend_tx: UnboundedSender<MessageFromBackend>,
}

impl BridgeChannels {
    /// Creates a new pair of bridged channels. `buffer` bounds the commands
    /// queued for the backend.
    pub fn new(buffer: usize) -> Self {
        let (to_backend_tx, to_backend_rx) = mpsc::channel(buffer);
        let (to_frontend_tx, to_frontend_rx) = mpsc::unbounded_channel();
        Self {
            frontend_tx: to_backend_tx,
            frontend_rx: to_frontend_rx,
            backend_rx: to_backend_rx,
            backend_tx: to_frontend_tx,
        }
    }
}

impl Default for BridgeChannels {
    fn default() -> Self {
        Self::new(64)
    }
}
