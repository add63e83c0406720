//! Backend runtime setup and orchestration.
//!
//! This module wires together configuration, backend state, and the message
//! dispatch loop that listens to frontend bridge requests.

use std::thread;

use moodtrack_bridge::{
    MessageFromBackend, MessageToBackend,
    config::Config,
    notification::{NotificationKind, NotificationRequest},
};
use tokio::sync::mpsc::{Receiver, UnboundedSender};

use crate::app::AppContext;
use crate::config::ConfigError;
use crate::state::State;

/// Builds the notification shown when the configuration could not be loaded.
fn config_failure_notification(error: &ConfigError) -> NotificationRequest {
    let request = NotificationRequest::new(
        NotificationKind::Error,
        "Settings unavailable",
        format!("Using default settings: {error}"),
    );
    match crate::config::config_path() {
        Ok(path) => request.with_detail("path", path.display().to_string()),
        Err(_) => request,
    }
}

/// Initialize backend state and start processing frontend messages.
async fn setup_backend(rx: Receiver<MessageToBackend>, tx: UnboundedSender<MessageFromBackend>) {
    let (config, config_error) = match crate::config::load_config().await {
        Ok(config) => (config, None),
        Err(error) => {
            log::warn!("Failed to load config, falling back to defaults: {error}");
            (Config::default(), Some(error))
        }
    };
    log::info!(
        "Notifications expire after {} ms",
        config.notifications.expiry_ms
    );

    let mut context = AppContext::new(State::new(config), tx);
    if let Some(error) = config_error {
        context.send_notification(config_failure_notification(&error));
    }
    context.consume_bridge_messages(rx).await;
}

/// Spawn the backend runtime and begin processing bridge messages.
///
/// The backend runs on a single-threaded runtime, so every change to the
/// notification center is applied in order on one task. The returned handle
/// finishes once the frontend side of the bridge is dropped.
pub fn run(
    rx: Receiver<MessageToBackend>,
    tx: UnboundedSender<MessageFromBackend>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(error) => {
                log::error!("Failed to build tokio runtime: {error}");
                return;
            }
        };
        runtime.block_on(setup_backend(rx, tx));
    })
}
