// src/clipboard.rs
use std::process::Stdio;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

pub const DEFAULT_COPY_COMMAND: &str = "xclip -selection clipboard";

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("copy command I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("copy command exited with status {0}")]
    CommandFailed(std::process::ExitStatus),
}

pub type Result<T> = std::result::Result<T, ClipboardError>;

// Writes text to the system clipboard by piping it into a shell copy
// command (xclip by default, overridable for Wayland, macOS, etc.).
#[derive(Debug, Clone)]
pub struct ClipboardWriter {
    command: String,
}

impl ClipboardWriter {
    pub fn new(command: impl Into<String>) -> Self {
        Self { command: command.into() }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub async fn write(&self, text: &str) -> Result<()> {
        let mut child = Command::new("sh")
            .arg("-c")
            .arg(&self.command)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).await?;
            // Close stdin so the copy command sees EOF
            drop(stdin);
        }

        let status = child.wait().await?;
        if !status.success() {
            return Err(ClipboardError::CommandFailed(status));
        }

        Ok(())
    }
}

impl Default for ClipboardWriter {
    fn default() -> Self {
        Self::new(DEFAULT_COPY_COMMAND)
    }
}
