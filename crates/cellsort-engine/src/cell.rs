//! Cells and the sparse grid.
//!
//! - [`CellRef`] - A1-notation cell reference (column + row indices)
//! - [`Cell`] - a cell position together with its evaluated value
//! - [`Grid`] - thread-safe sparse storage for cells (backed by `DashMap`)

use dashmap::DashMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::reference::{index_to_letters, letters_to_index};
use crate::value::CellValue;

/// A reference to a cell by column and row indices (0-indexed).
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

impl CellRef {
    pub fn new(col: usize, row: usize) -> CellRef {
        CellRef { row, col }
    }

    /// Parse a cell reference from spreadsheet notation (e.g., "A1", "$B$2").
    /// Returns None if the input is invalid.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(name: &str) -> Option<CellRef> {
        let re = Regex::new(r"^\$?(?<letters>[A-Za-z]+)\$?(?<numbers>[0-9]+)$").unwrap();
        let caps = re.captures(name)?;
        let col = letters_to_index(&caps["letters"].to_ascii_uppercase())?;
        let row = caps["numbers"].parse::<usize>().ok()?.checked_sub(1)?;
        Some(CellRef::new(col, row))
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", index_to_letters(self.col), self.row + 1)
    }
}

/// A cell with its evaluated value.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pub reference: CellRef,
    pub value: CellValue,
}

impl Cell {
    pub fn new(reference: CellRef, value: CellValue) -> Cell {
        Cell { reference, value }
    }
}

/// Thread-safe sparse grid storage.
pub type Grid = Arc<DashMap<CellRef, Cell>>;

pub fn new_grid() -> Grid {
    Arc::new(DashMap::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_a1() {
        let r = CellRef::from_str("B3").unwrap();
        assert_eq!((r.col, r.row), (1, 2));
        assert_eq!(r.to_string(), "B3");
    }

    #[test]
    fn test_parse_absolute_markers() {
        assert_eq!(CellRef::from_str("$A$1"), Some(CellRef::new(0, 0)));
        assert_eq!(CellRef::from_str("$AA10"), Some(CellRef::new(26, 9)));
    }

    #[test]
    fn test_parse_a1_overflow_returns_none() {
        let huge = format!("{}1", "Z".repeat(40));
        assert!(CellRef::from_str(&huge).is_none());
    }
}
