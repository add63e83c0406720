pub mod notification_list_view;

use moodtrack_bridge::config::Config;

pub use notification_list_view::NotificationListView;

pub const HELP: &str = "\
Commands:
  success|error|info|warning <title> [| <message>]   show a notification
  dismiss <n>                                       dismiss notification number n
  clear                                             dismiss every notification
  list                                              show active notifications
  config                                            show the loaded settings
  help                                              show this help
  quit                                              leave";

pub fn render_config(config: &Config) -> String {
    format!(
        "Settings: notifications expire after {} ms",
        config.notifications.expiry_ms
    )
}
