//! Error types for cellsort-core.
//!
//! Grammar and validation messages are end-user-facing diagnostics and are
//! stable: callers surface them unchanged.

use cellsort_engine::{ComparatorName, EngineError};
use thiserror::Error;

/// Errors from sort-spec parsing, alias parsing and provider resolution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    #[error("Expected column/row")]
    ExpectedColumnOrRow,

    #[error("Duplicate column {text}")]
    DuplicateColumn { text: String },

    #[error("Duplicate row {text}")]
    DuplicateRow { text: String },

    #[error("Expected all columns or all rows, got {text}")]
    MixedAxis { text: String },

    #[error("Empty comparator list")]
    EmptyList,

    #[error("Unknown comparator {name}")]
    UnknownComparator { name: ComparatorName },

    #[error("Comparator {name} does not take parameters")]
    UnexpectedParameters { name: ComparatorName },

    #[error("Duplicate alias {name}")]
    DuplicateAlias { name: ComparatorName },

    #[error("Duplicate name {name}")]
    DuplicateInfoName { name: ComparatorName },

    #[error("Duplicate url {url}")]
    DuplicateInfoUrl { url: String },

    #[error("Invalid url {text}")]
    InvalidUrl { text: String },

    #[error(transparent)]
    Engine(#[from] EngineError),
}

pub type Result<T> = std::result::Result<T, SortError>;

impl SortError {
    /// Positional grammar error, shared with the engine's name parsing.
    pub fn invalid_character(ch: char, pos: usize) -> SortError {
        SortError::Engine(EngineError::InvalidCharacter { ch, pos })
    }
}
