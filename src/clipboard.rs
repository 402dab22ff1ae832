use std::io::Write;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::config::{CopyCommand, Settings};
use crate::error::{AppError, AppResult};

/// Destination for finished email text.
pub trait Clipboard {
    fn copy(&self, text: &str) -> AppResult<()>;
}

/// Pipes text into an external copy program such as `pbcopy` or `wl-copy`.
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    command: CopyCommand,
}

impl CommandClipboard {
    pub fn new(command: CopyCommand) -> Self {
        Self { command }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let command = settings
            .copy_command
            .clone()
            .unwrap_or_else(platform_default);
        Self::new(command)
    }

    pub fn command(&self) -> &CopyCommand {
        &self.command
    }
}

impl Clipboard for CommandClipboard {
    fn copy(&self, text: &str) -> AppResult<()> {
        let program = &self.command.program;
        debug!(program = %program, bytes = text.len(), "copying to clipboard");

        let mut child = Command::new(program)
            .args(&self.command.args)
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|err| AppError::Clipboard(format!("failed to spawn `{program}`: {err}")))?;

        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };

        // Reap the child even when the write failed.
        let status = child.wait()?;
        written.map_err(|err| {
            AppError::Clipboard(format!("failed to write to `{program}`: {err}"))
        })?;
        if !status.success() {
            return Err(AppError::Clipboard(format!(
                "`{program}` exited with {status}"
            )));
        }

        Ok(())
    }
}

fn platform_default() -> CopyCommand {
    if cfg!(target_os = "macos") {
        return CopyCommand::new("pbcopy", &[]);
    }

    if cfg!(windows) {
        return CopyCommand::new("clip", &[]);
    }

    if std::env::var_os("WAYLAND_DISPLAY").is_some() {
        return CopyCommand::new("wl-copy", &[]);
    }

    CopyCommand::new("xclip", &["-selection", "clipboard"])
}
