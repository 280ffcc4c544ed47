//! # Domain Errors
//!
//! Failures the strategy generator can report, and the lookup misses that
//! feed them.

use crate::domain::types::Field;
use std::fmt;
use thiserror::Error;

/// A table lookup that found no row for the given answers and fell back to
/// the table default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupMiss {
    ProductType { value: String },
    CustomerProfile { key: String },
    Channels { key: String },
    Tactics { goal: String },
    Metrics { goal: String },
    Timeline { value: String },
}

impl fmt::Display for LookupMiss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupMiss::ProductType { value } => {
                write!(f, "product type '{value}' has no noun, using 'solution'")
            }
            LookupMiss::CustomerProfile { key } => {
                write!(f, "no customer profile for '{key}', using b2b-smb")
            }
            LookupMiss::Channels { key } => write!(f, "no channel set for '{key}', using b2b-low"),
            LookupMiss::Tactics { goal } => write!(f, "no tactics for goal '{goal}', using awareness"),
            LookupMiss::Metrics { goal } => write!(f, "no metrics for goal '{goal}', using awareness"),
            LookupMiss::Timeline { value } => {
                write!(f, "timeline '{value}' is not recognized, using the quarterly plan")
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum StrategyError {
    #[error("Unmatched lookup: {}", join(.misses))]
    UnmatchedLookup { misses: Vec<LookupMiss> },

    #[error("Answers are incomplete, missing: {}", join(.missing))]
    IncompleteAnswers { missing: Vec<Field> },

    #[error("No strategy has been generated yet")]
    NotGenerated,
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
