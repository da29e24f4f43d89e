//! Human player reading commands line by line.

use super::{Command, Player};
use anyhow::{Context, Result};
use noughts_core::Board;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tracing::debug;

/// Human player typing commands into a line-oriented stream.
pub struct HumanPlayer<R> {
    name: String,
    lines: Lines<R>,
}

impl<R: AsyncBufRead + Unpin> HumanPlayer<R> {
    /// Creates a new human player reading from `input`.
    pub fn new(name: impl Into<String>, input: R) -> Self {
        Self {
            name: name.into(),
            lines: input.lines(),
        }
    }
}

#[async_trait::async_trait]
impl<R: AsyncBufRead + Unpin + Send> Player for HumanPlayer<R> {
    async fn next_command(&mut self, _board: &Board) -> Result<Option<Command>> {
        while let Some(line) = self
            .lines
            .next_line()
            .await
            .context("Failed to read player input")?
        {
            if line.trim().is_empty() {
                continue;
            }
            let command = Command::parse(&line)
                .unwrap_or_else(|| Command::Unrecognized(line.trim().to_string()));
            debug!(player = %self.name, ?command, "Read command");
            return Ok(Some(command));
        }

        debug!(player = %self.name, "Input closed");
        Ok(None)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
