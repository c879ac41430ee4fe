use crate::config::ExecCommand;
use std::process::{Command, Stdio};

/// Runs `exec` through `sh -c`, detached from our stdio.
pub fn spawn_shell(exec: &ExecCommand) -> std::io::Result<()> {
    Command::new("sh")
        .arg("-c")
        .arg(exec.as_str())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(())
}
