//! Terminal frontend: reads commands from stdin, forwards them to the backend
//! and renders the notifications the backend reports.

use anyhow::Context;
use moodtrack_bridge::{
    MessageFromBackend, MessageToBackend,
    notification::{NotificationId, NotificationRequest},
};
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::mpsc,
};

use crate::{
    command::Command,
    entities::NotificationsEntity,
    views::{HELP, NotificationListView},
};

pub mod command;
pub mod entities;
pub mod formatting;
mod views;

#[derive(Clone)]
pub struct BackendBridge {
    pub to_backend: mpsc::Sender<MessageToBackend>,
}

impl BackendBridge {
    async fn send(&self, message: MessageToBackend) -> anyhow::Result<()> {
        self.to_backend
            .send(message)
            .await
            .context("backend is no longer running")
    }

    pub async fn request_config(&self) -> anyhow::Result<()> {
        self.send(MessageToBackend::ConfigurationRequest).await
    }

    pub async fn show_notification(&self, request: NotificationRequest) -> anyhow::Result<()> {
        self.send(MessageToBackend::ShowNotification(request)).await
    }

    pub async fn dismiss_notification(&self, id: NotificationId) -> anyhow::Result<()> {
        self.send(MessageToBackend::DismissNotification(id)).await
    }

    pub async fn clear_notifications(&self) -> anyhow::Result<()> {
        self.send(MessageToBackend::ClearNotifications).await
    }

    pub async fn request_active_notifications(&self) -> anyhow::Result<()> {
        self.send(MessageToBackend::ActiveNotificationsRequest).await
    }
}

enum Flow {
    Continue,
    Quit,
}

/// Parses one line of user input and forwards it to the backend.
async fn handle_line(
    line: &str,
    bridge: &BackendBridge,
    notifications: &NotificationsEntity,
) -> anyhow::Result<Flow> {
    if line.trim().is_empty() {
        return Ok(Flow::Continue);
    }

    let command = match line.parse::<Command>() {
        Ok(command) => command,
        Err(error) => {
            println!("{error}");
            return Ok(Flow::Continue);
        }
    };

    match command {
        Command::Show(request) => bridge.show_notification(request).await?,
        Command::Dismiss(position) => match notifications.id_at(position) {
            Some(id) => bridge.dismiss_notification(id).await?,
            None => println!("There is no notification number {position}."),
        },
        Command::Clear => bridge.clear_notifications().await?,
        Command::List => bridge.request_active_notifications().await?,
        Command::Config => bridge.request_config().await?,
        Command::Help => println!("{HELP}"),
        Command::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

async fn event_loop(
    mut rx: mpsc::UnboundedReceiver<MessageFromBackend>,
    bridge: BackendBridge,
) -> anyhow::Result<()> {
    let mut notifications = NotificationsEntity::default();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{HELP}");
    bridge.request_config().await?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read from stdin")? else {
                    break;
                };
                if let Flow::Quit = handle_line(&line, &bridge, &notifications).await? {
                    break;
                }
            }
            message = rx.recv() => {
                let Some(message) = message else {
                    log::warn!("Backend closed the bridge");
                    break;
                };
                log::debug!("Got a message from backend: {message:?}");
                if let MessageFromBackend::ConfigurationResponse(config) = &message {
                    println!("{}", views::render_config(config));
                }
                if notifications.apply(&message) {
                    println!("{}", NotificationListView::new(&notifications));
                }
            }
        }
    }

    Ok(())
}

/// Runs the frontend on the calling thread until the user quits or stdin is
/// closed.
pub fn run(
    rx: mpsc::UnboundedReceiver<MessageFromBackend>,
    tx: mpsc::Sender<MessageToBackend>,
) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build frontend runtime")?;

    let bridge = BackendBridge { to_backend: tx };
    let result = runtime.block_on(event_loop(rx, bridge));
    // a pending stdin read would otherwise block shutdown
    runtime.shutdown_background();
    result
}
