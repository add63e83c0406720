//! Application context and message dispatching utilities.
//!
//! The context contains the backend state and provides helpers for sending
//! responses and notifications back to the frontend bridge.

use moodtrack_bridge::{
    MessageFromBackend, MessageToBackend,
    notification::{NotificationId, NotificationRequest},
};
use tokio::sync::mpsc::{Receiver, UnboundedSender};

use crate::services;
use crate::state::State;

/// Application context passed to services and message handlers.
pub(crate) struct AppContext {
    /// Application state, owned by the backend loop.
    pub state: State,
    /// Outbound channel to the frontend bridge. Unbounded, so handlers never
    /// wait on the frontend.
    pub tx: UnboundedSender<MessageFromBackend>,
}

impl AppContext {
    pub fn new(state: State, tx: UnboundedSender<MessageFromBackend>) -> Self {
        Self { state, tx }
    }

    /// Read and dispatch messages from the frontend bridge until it closes,
    /// applying notification expiries in between.
    pub async fn consume_bridge_messages(&mut self, mut rx: Receiver<MessageToBackend>) {
        loop {
            tokio::select! {
                message = rx.recv() => match message {
                    Some(message) => {
                        log::debug!("Got a frontend message: {message:?}");
                        self.dispatch_message(message);
                    }
                    None => break,
                },
                expired = self.state.notifications.expire_next() => {
                    // `None` is a moot expiry, nothing changed
                    if let Some(expired) = expired {
                        services::notification_service::handle_expired_notification(
                            self, expired,
                        );
                    }
                }
            }
        }

        log::info!("Frontend bridge closed, stopping backend loop");
    }

    /// Dispatches the received message from frontend down to individual
    /// service handlers.
    fn dispatch_message(&mut self, message: MessageToBackend) {
        match message {
            MessageToBackend::ShowNotification(request) => {
                services::notification_service::handle_show_notification(self, request);
            }
            MessageToBackend::DismissNotification(id) => {
                services::notification_service::handle_dismiss_notification(self, id);
            }
            MessageToBackend::ClearNotifications => {
                services::notification_service::handle_clear_notifications(self);
            }
            MessageToBackend::ActiveNotificationsRequest => {
                services::notification_service::handle_active_notifications_request(self);
            }
            MessageToBackend::ConfigurationRequest => {
                services::config_service::handle_config_request(self);
            }
        }
    }

    /// Send a message to the frontend bridge.
    pub fn send(&self, message: MessageFromBackend) {
        if let Err(error) = self.tx.send(message) {
            log::warn!("Failed to send message to frontend: {error}");
        }
    }

    /// Add a notification to the active set and announce it to the frontend.
    pub fn send_notification(&mut self, request: NotificationRequest) -> NotificationId {
        let notification = self.state.notifications.submit(request).clone();
        let id = notification.id;
        self.send(MessageFromBackend::NotificationAdded(notification));
        id
    }
}
