//! Parsing of the commands typed by the user.

use std::str::FromStr;

use moodtrack_bridge::notification::{NotificationKind, NotificationRequest};

/// A single line of user input, parsed.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Show a new notification.
    Show(NotificationRequest),
    /// Dismiss the notification at this 1-based position of the list.
    Dismiss(usize),
    Clear,
    List,
    Config,
    Help,
    Quit,
}

/// Errors reported back to the user for input that could not be parsed.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("nothing to do, type `help` for a list of commands")]
    Empty,
    #[error("unknown command `{0}`, type `help` for a list of commands")]
    Unknown(String),
    #[error("`dismiss` needs the number of a notification")]
    MissingPosition,
    #[error("`{0}` is not a notification number")]
    InvalidPosition(String),
}

fn parse_position(argument: &str) -> Result<usize, CommandError> {
    if argument.is_empty() {
        return Err(CommandError::MissingPosition);
    }
    match argument.parse::<usize>() {
        Ok(position) if position > 0 => Ok(position),
        _ => Err(CommandError::InvalidPosition(argument.to_owned())),
    }
}

/// Splits `<title> | <message>`. Both parts may be empty, they are shown
/// as typed.
fn parse_request(kind: NotificationKind, argument: &str) -> NotificationRequest {
    let (title, message) = argument.split_once('|').unwrap_or((argument, ""));
    NotificationRequest::new(kind, title.trim(), message.trim())
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, argument) = line
            .split_once(char::is_whitespace)
            .map(|(word, argument)| (word, argument.trim()))
            .unwrap_or((line, ""));

        if let Some(kind) = NotificationKind::from_tag(word) {
            return Ok(Command::Show(parse_request(kind, argument)));
        }

        match word {
            "" => Err(CommandError::Empty),
            "dismiss" => parse_position(argument).map(Command::Dismiss),
            "clear" => Ok(Command::Clear),
            "list" => Ok(Command::List),
            "config" => Ok(Command::Config),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_title_and_message() {
        let command: Command = "error Save failed | Network error".parse().unwrap();
        assert_eq!(
            command,
            Command::Show(NotificationRequest::new(
                NotificationKind::Error,
                "Save failed",
                "Network error"
            ))
        );
    }

    #[test]
    fn message_is_optional_and_empty_input_is_kept() {
        let command: Command = "  success Saved  ".parse().unwrap();
        assert_eq!(
            command,
            Command::Show(NotificationRequest::new(NotificationKind::Success, "Saved", ""))
        );

        let command: Command = "warning".parse().unwrap();
        assert_eq!(
            command,
            Command::Show(NotificationRequest::new(NotificationKind::Warning, "", ""))
        );
    }

    #[test]
    fn parses_dismiss_positions() {
        assert_eq!("dismiss 2".parse::<Command>(), Ok(Command::Dismiss(2)));
        assert_eq!(
            "dismiss".parse::<Command>(),
            Err(CommandError::MissingPosition)
        );
        assert_eq!(
            "dismiss 0".parse::<Command>(),
            Err(CommandError::InvalidPosition("0".to_owned()))
        );
        assert_eq!(
            "dismiss first".parse::<Command>(),
            Err(CommandError::InvalidPosition("first".to_owned()))
        );
    }

    #[test]
    fn parses_keywords() {
        assert_eq!("clear".parse::<Command>(), Ok(Command::Clear));
        assert_eq!("list".parse::<Command>(), Ok(Command::List));
        assert_eq!("config".parse::<Command>(), Ok(Command::Config));
        assert_eq!("help".parse::<Command>(), Ok(Command::Help));
        assert_eq!("exit".parse::<Command>(), Ok(Command::Quit));
        assert_eq!("   ".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "Success Saved".parse::<Command>(),
            Err(CommandError::Unknown("Success".to_owned()))
        );
    }
}
