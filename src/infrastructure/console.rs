//! # Stdio Console
//!
//! `Console` over the process's stdin/stdout.

use crate::domain::traits::Console;
use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Stdin, Stdout};
use tokio::sync::Mutex;

pub struct StdioConsole {
    reader: Mutex<BufReader<Stdin>>,
    writer: Mutex<Stdout>,
}

impl StdioConsole {
    pub fn new() -> Self {
        Self {
            reader: Mutex::new(BufReader::new(tokio::io::stdin())),
            writer: Mutex::new(tokio::io::stdout()),
        }
    }
}

impl Default for StdioConsole {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Console for StdioConsole {
    async fn send_message(&self, content: &str) -> Result<()> {
        let mut writer = self.writer.lock().await;
        writer
            .write_all(format!("{content}\n").as_bytes())
            .await
            .context("Failed to write to stdout")?;
        writer.flush().await.context("Failed to flush stdout")?;
        Ok(())
    }

    async fn read_line(&self) -> Result<Option<String>> {
        let mut reader = self.reader.lock().await;
        let mut line = String::new();
        let read = reader
            .read_line(&mut line)
            .await
            .context("Failed to read from stdin")?;
        if read == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

/// Console fed from a fixed script, recording everything sent to it.
#[cfg(test)]
pub struct ScriptedConsole {
    input: std::sync::Mutex<std::collections::VecDeque<String>>,
    pub output: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl ScriptedConsole {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            input: std::sync::Mutex::new(lines.iter().map(|line| line.to_string()).collect()),
            output: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn transcript(&self) -> String {
        self.output.lock().expect("output lock").join("\n")
    }
}

#[cfg(test)]
#[async_trait]
impl Console for ScriptedConsole {
    async fn send_message(&self, content: &str) -> Result<()> {
        self.output.lock().expect("output lock").push(content.to_string());
        Ok(())
    }

    async fn read_line(&self) -> Result<Option<String>> {
        Ok(self.input.lock().expect("input lock").pop_front())
    }
}
