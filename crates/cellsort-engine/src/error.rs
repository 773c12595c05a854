//! Error types for the cellsort engine.

use thiserror::Error;

/// Errors produced while parsing names, directions and references.
///
/// The message strings are part of the public surface: callers are expected
/// to show them to end users unchanged, so they carry exact character
/// positions where one exists.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Missing comparator name")]
    MissingComparatorName,

    #[error("Invalid character '{ch}' at {pos}")]
    InvalidCharacter { ch: char, pos: usize },

    #[error("Missing UP/DOWN")]
    MissingUpDown,

    #[error("Expected UP or DOWN got \"{token}\"")]
    InvalidDirection { token: String },

    #[error("Invalid reference: {text}")]
    InvalidReference { text: String },

    #[error("Expected at least one comparator name")]
    EmptyComparators,
}

pub type Result<T> = std::result::Result<T, EngineError>;
