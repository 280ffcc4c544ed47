//! # Application Layer
//!
//! Contains the core logic of the generator and its orchestration.
//! This includes the lookup tables, strategy generation, the wizard state
//! machine, input routing, export and logging setup.

pub mod export;
pub mod logging;
pub mod router;
pub mod state;
pub mod strategy;
pub mod tables;
