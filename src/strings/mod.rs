//! # Strings Module
//!
//! Centralizes user-facing strings, templates, and help text.
//! Ensures consistency in messaging and easier updates.

pub mod help;
pub mod logs;
pub mod messages;
pub mod templates;
pub mod wizard;
