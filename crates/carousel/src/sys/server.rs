use crate::events::AppEvent;
use async_channel::Sender;
use std::str::FromStr;
use strum::EnumString;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::UnixListener;

pub const SOCKET_PATH: &str = "/tmp/carousel.sock";

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, strum::Display)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
enum Verb {
    Show,
    Hide,
    Next,
    #[strum(to_string = "prev", serialize = "previous")]
    Previous,
    Scroll,
    Fling,
}

#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}'")]
    Unknown(String),
    #[error("'{0}' needs an argument")]
    MissingArgument(String),
    #[error("'{verb}' got an invalid argument '{value}'")]
    InvalidArgument { verb: String, value: String },
    #[error("'{0}' takes no more than one argument")]
    TrailingInput(String),
}

/// Parses one control line, e.g. `scroll 3` or `fling -1200`.
pub fn parse_command(line: &str) -> Result<AppEvent, CommandError> {
    let mut words = line.split_whitespace();
    let word = words.next().ok_or(CommandError::Empty)?;
    let verb = Verb::from_str(word).map_err(|_| CommandError::Unknown(word.to_string()))?;
    let arg = words.next();
    if words.next().is_some() {
        return Err(CommandError::TrailingInput(verb.to_string()));
    }

    let event = match (verb, arg) {
        (Verb::Show, None) => AppEvent::Show,
        (Verb::Hide, None) => AppEvent::Hide,
        (Verb::Next, None) => AppEvent::Next,
        (Verb::Previous, None) => AppEvent::Previous,
        (Verb::Scroll, Some(value)) => AppEvent::ScrollTo(parse_arg(verb, value)?),
        (Verb::Fling, Some(value)) => {
            let velocity: f64 = parse_arg(verb, value)?;
            if !velocity.is_finite() {
                return Err(invalid(verb, value));
            }
            AppEvent::Fling(velocity)
        }
        (Verb::Scroll | Verb::Fling, None) => {
            return Err(CommandError::MissingArgument(verb.to_string()));
        }
        (_, Some(_)) => return Err(CommandError::TrailingInput(verb.to_string())),
    };
    Ok(event)
}

fn parse_arg<T: FromStr>(verb: Verb, value: &str) -> Result<T, CommandError> {
    value.parse().map_err(|_| invalid(verb, value))
}

fn invalid(verb: Verb, value: &str) -> CommandError {
    CommandError::InvalidArgument {
        verb: verb.to_string(),
        value: value.to_string(),
    }
}

pub async fn run_server(tx: Sender<AppEvent>) {
    // stale socket from a previous run
    if std::fs::metadata(SOCKET_PATH).is_ok() {
        let _ = std::fs::remove_file(SOCKET_PATH);
    }

    let listener = match UnixListener::bind(SOCKET_PATH) {
        Ok(l) => l,
        Err(e) => {
            log::error!("Failed to bind unix socket: {}", e);
            return;
        }
    };
    log::info!("Listening on {}", SOCKET_PATH);

    loop {
        match listener.accept().await {
            Ok((mut stream, _)) => {
                let tx = tx.clone();
                tokio::spawn(async move {
                    let reader = BufReader::new(&mut stream);
                    let mut lines = reader.lines();

                    while let Ok(Some(line)) = lines.next_line().await {
                        if line.trim().is_empty() {
                            continue;
                        }
                        match parse_command(&line) {
                            Ok(event) => {
                                if tx.send(event).await.is_err() {
                                    return;
                                }
                            }
                            Err(e) => log::warn!("Ignoring control line: {}", e),
                        }
                    }
                });
            }
            Err(e) => {
                log::error!("Failed to accept connection: {}", e);
            }
        }
    }
}
