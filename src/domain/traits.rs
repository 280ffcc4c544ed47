//! # Domain Traits
//!
//! Abstract interface for the terminal the wizard talks through.
//! Allows the stdio implementation to be swapped for a scripted one in tests.

use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait Console: Send + Sync {
    /// Show a block of text to the user.
    async fn send_message(&self, content: &str) -> Result<()>;

    /// Next line of input without its line terminator, `None` at end of input.
    async fn read_line(&self) -> Result<Option<String>>;
}
