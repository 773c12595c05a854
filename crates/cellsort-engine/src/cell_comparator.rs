//! Multi-key ordering over spreadsheet cells.
//!
//! A [`CellComparator`] chains resolved comparators: for each key both cells
//! are converted to the key's value kind, compared, and the first non-equal
//! result wins. Cells whose value cannot convert are placed before or after
//! convertible cells by the `missing_before` policy; cells absent from the
//! grid altogether always sort last.

use std::cmp::Ordering;

use crate::cell::Cell;
use crate::comparator::Comparator;
use crate::convert::ValueConverter;
use crate::error::{EngineError, Result};

/// Composes an ordered, non-empty comparator chain with a missing-value
/// policy and a conversion capability. Stateless and reentrant once built;
/// stability is the responsibility of the sorting routine that calls it.
pub struct CellComparator<'a> {
    comparators: Vec<Comparator>,
    missing_before: bool,
    converter: &'a dyn ValueConverter,
}

impl std::fmt::Debug for CellComparator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CellComparator")
            .field("comparators", &self.comparators)
            .field("missing_before", &self.missing_before)
            .finish_non_exhaustive()
    }
}

impl<'a> CellComparator<'a> {
    /// Fails if `comparators` is empty.
    pub fn new(
        comparators: Vec<Comparator>,
        missing_before: bool,
        converter: &'a dyn ValueConverter,
    ) -> Result<CellComparator<'a>> {
        if comparators.is_empty() {
            return Err(EngineError::EmptyComparators);
        }
        Ok(CellComparator {
            comparators,
            missing_before,
            converter,
        })
    }

    pub fn comparators(&self) -> &[Comparator] {
        &self.comparators
    }

    /// Order two cells. `None` is a cell absent from the grid: it sorts
    /// after any present cell, whatever the missing-value policy says.
    pub fn compare(&self, a: Option<&Cell>, b: Option<&Cell>) -> Ordering {
        let (a, b) = match (a, b) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Greater,
            (Some(_), None) => return Ordering::Less,
            (Some(a), Some(b)) => (a, b),
        };

        for comparator in &self.comparators {
            let kind = comparator.value_kind();
            let left = self.converter.convert(&a.value, kind);
            let right = self.converter.convert(&b.value, kind);
            match (left, right) {
                (Some(left), Some(right)) => {
                    let ordering = comparator.compare(&left, &right);
                    if ordering != Ordering::Equal {
                        return ordering;
                    }
                }
                // One side unconvertible: the policy decides, and no later
                // key gets a say.
                (Some(_), None) => {
                    return if self.missing_before {
                        Ordering::Less
                    } else {
                        Ordering::Greater
                    };
                }
                (None, Some(_)) => {
                    return if self.missing_before {
                        Ordering::Greater
                    } else {
                        Ordering::Less
                    };
                }
                // Neither converts: tied on this key, try the next one.
                (None, None) => {}
            }
        }

        Ordering::Equal
    }
}
