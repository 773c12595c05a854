//! cellsort-engine - comparator engine for spreadsheet sorting.
//!
//! This crate provides the value-level building blocks:
//!
//! - [`CellValue`], [`ValueKind`] - typed cell values
//! - [`ValueConverter`], [`BasicConverter`] - conversion to a comparator's kind
//! - [`ColumnReference`], [`RowReference`], [`ColumnOrRowReference`] - axis references
//! - [`CellRef`], [`Cell`], [`Grid`] - A1 references and sparse cell storage
//! - [`ComparatorName`], [`Direction`], [`NameAndDirection`] - the naming model
//! - [`ComparatorKind`], [`Comparator`] - built-in comparators and reversal
//! - [`CellComparator`] - multi-key cell ordering

mod cell;
mod cell_comparator;
mod comparator;
mod convert;
mod error;
mod name;
mod reference;
mod value;

pub use cell::{Cell, CellRef, Grid, new_grid};
pub use cell_comparator::CellComparator;
pub use comparator::{Comparator, ComparatorKind};
pub use convert::{BasicConverter, ValueConverter};
pub use error::{EngineError, Result};
pub use name::{ComparatorName, Direction, NameAndDirection};
pub use reference::{
    Axis, ColumnOrRowReference, ColumnReference, RowReference, index_to_letters, letters_to_index,
};
pub use value::{CellValue, ValueKind};
