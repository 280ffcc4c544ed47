//! # Interface Layer
//!
//! Entry points for the CLI subcommands.

pub mod commands;
