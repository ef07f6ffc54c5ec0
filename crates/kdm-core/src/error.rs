//! Error types for roster and stat operations
//!
//! The roll formulas themselves are total; errors only arise when a caller
//! addresses a slot or field that does not exist.

use thiserror::Error;

use crate::stats::ValueKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Survivor slot {index} is out of range (expected 0-3)")]
    SlotOutOfRange { index: usize },

    #[error("Field '{field}' expects a {expected} value")]
    ValueKind { field: String, expected: ValueKind },

    #[error("Invalid stat bounds: min {min} is greater than max {max}")]
    InvalidBounds { min: i32, max: i32 },

    #[error("Unknown field: {0}")]
    UnknownField(String),
}
