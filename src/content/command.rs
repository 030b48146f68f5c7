use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::app::{DigestError, Result};
use crate::content::Transport;

/// Runs an external fetch utility (e.g. `curl -sL`) and returns its stdout
pub struct CommandTransport {
    program: String,
    args: Vec<String>,
}

impl CommandTransport {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// `["curl", "-sL"]` → program `curl` with args `-sL`. `None` when empty.
    pub fn from_args(command: &[String]) -> Option<Self> {
        let (program, args) = command.split_first()?;
        Some(Self::new(program.clone(), args.to_vec()))
    }
}

#[async_trait]
impl Transport for CommandTransport {
    fn name(&self) -> &str {
        &self.program
    }

    async fn get(&self, url: &str) -> Result<String> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(url)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                DigestError::ContentFetch(format!("Failed to spawn '{}': {}", self.program, e))
            })?;

        if !output.status.success() {
            return Err(DigestError::ContentFetch(format!(
                "'{}' exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
