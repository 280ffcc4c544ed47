//! # Domain Layer
//!
//! Core definitions, types, and traits that define the business domain of the application.
//! Independent of the terminal and the file system, serving as the contract for other layers.

pub mod config;
pub mod error;
pub mod paths;
pub mod traits;
pub mod types;
