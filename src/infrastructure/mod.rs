//! # Infrastructure Layer
//!
//! Handles interactions with the outside world.
//! Implements the traits defined in the Domain layer (e.g., Console).

pub mod console;
