use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::os::unix::net::UnixStream;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Control a running carousel", long_about = None)]
struct Cli {
    /// Control socket of the carousel daemon
    #[arg(short, long, default_value = "/tmp/carousel.sock")]
    socket: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Show the carousel
    Show,
    /// Hide the carousel
    Hide,
    /// Rotate the next item into place
    Next,
    /// Rotate the previous item into place
    Prev,
    /// Rotate the item at INDEX into place
    Scroll { index: usize },
    /// Spin the wheel with an initial velocity
    Fling {
        #[arg(allow_hyphen_values = true)]
        velocity: f64,
    },
}

impl Command {
    fn line(&self) -> String {
        match self {
            Command::Show => "show".to_string(),
            Command::Hide => "hide".to_string(),
            Command::Next => "next".to_string(),
            Command::Prev => "prev".to_string(),
            Command::Scroll { index } => format!("scroll {index}"),
            Command::Fling { velocity } => format!("fling {velocity}"),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let line = cli.command.line();
    let mut stream = UnixStream::connect(&cli.socket)
        .with_context(|| format!("is carousel running? no socket at {}", cli.socket.display()))?;
    writeln!(stream, "{line}").context("failed to send command")?;
    log::debug!("sent '{}' to {}", line, cli.socket.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_lines() {
        let cases = vec![
            (vec!["carouselctl", "show"], "show"),
            (vec!["carouselctl", "prev"], "prev"),
            (vec!["carouselctl", "scroll", "4"], "scroll 4"),
            (vec!["carouselctl", "fling", "-1500"], "fling -1500"),
            (vec!["carouselctl", "fling", "2.5"], "fling 2.5"),
        ];

        for (args, expected) in cases {
            let cli = Cli::try_parse_from(args).unwrap();
            assert_eq!(cli.command.line(), expected);
        }
    }

    #[test]
    fn test_socket_override() {
        let cli = Cli::try_parse_from(["carouselctl", "-s", "/run/c.sock", "hide"]).unwrap();
        assert_eq!(cli.socket, PathBuf::from("/run/c.sock"));
        assert_eq!(cli.command, Command::Hide);
    }

    #[test]
    fn test_rejects_bad_arguments() {
        assert!(Cli::try_parse_from(["carouselctl", "scroll", "-2"]).is_err());
        assert!(Cli::try_parse_from(["carouselctl", "spin"]).is_err());
    }
}
