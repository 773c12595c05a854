//! Sorting a grid by a resolved sort specification.
//!
//! Sorting by columns reorders rows; sorting by rows reorders columns. The
//! set of occupied band positions is preserved: in a sparse grid the rows
//! (or columns) change their order, not their layout.

use cellsort_engine::{
    Axis, Cell, CellComparator, CellRef, Grid, ValueConverter, new_grid,
};
use std::collections::{BTreeSet, HashMap};

use crate::error::{Result, SortError};
use crate::spec::ResolvedColumnOrRow;

/// Which coordinate of a [`CellRef`] moves during the sort.
#[derive(Copy, Clone)]
enum Band {
    Row,
    Column,
}

impl Band {
    fn of(axis: Axis) -> Band {
        // Sorting by column comparators moves whole rows, and vice versa.
        match axis {
            Axis::Column => Band::Row,
            Axis::Row => Band::Column,
        }
    }

    fn coord(&self, cell_ref: &CellRef) -> usize {
        match self {
            Band::Row => cell_ref.row,
            Band::Column => cell_ref.col,
        }
    }

    fn cell_ref(&self, key_index: usize, band: usize) -> CellRef {
        match self {
            Band::Row => CellRef::new(key_index, band),
            Band::Column => CellRef::new(band, key_index),
        }
    }

    fn with_band(&self, cell_ref: &CellRef, band: usize) -> CellRef {
        match self {
            Band::Row => CellRef::new(cell_ref.col, band),
            Band::Column => CellRef::new(band, cell_ref.row),
        }
    }
}

/// Stable-sort the grid's rows (or columns), returning the reordered grid.
///
/// `resolved` comes from
/// [`parse_list_resolved`](crate::spec::parse_list_resolved); its entries
/// are axis-uniform by construction.
pub fn sort_grid(
    grid: &Grid,
    resolved: &[ResolvedColumnOrRow],
    missing_before: bool,
    converter: &dyn ValueConverter,
) -> Result<Grid> {
    let Some(first) = resolved.first() else {
        return Err(SortError::EmptyList);
    };
    let band = Band::of(first.reference.axis());

    // Snapshot for lookups during comparison.
    let cells: HashMap<CellRef, Cell> = grid
        .iter()
        .map(|entry| (*entry.key(), entry.value().clone()))
        .collect();

    let mut keyed: Vec<(usize, CellComparator)> = Vec::with_capacity(resolved.len());
    for entry in resolved {
        keyed.push((
            entry.reference.index(),
            CellComparator::new(entry.comparators.clone(), missing_before, converter)?,
        ));
    }

    // Occupied band positions, ascending.
    let occupied: BTreeSet<usize> = cells.keys().map(|r| band.coord(r)).collect();
    let positions: Vec<usize> = occupied.iter().copied().collect();

    let mut order = positions.clone();
    order.sort_by(|&a, &b| {
        for (key_index, comparator) in &keyed {
            let left = cells.get(&band.cell_ref(*key_index, a));
            let right = cells.get(&band.cell_ref(*key_index, b));
            let ordering = comparator.compare(left, right);
            if ordering != std::cmp::Ordering::Equal {
                return ordering;
            }
        }
        std::cmp::Ordering::Equal
    });

    // The band ranked k-th lands on the k-th occupied position.
    let target: HashMap<usize, usize> = order
        .iter()
        .zip(positions.iter())
        .map(|(&old, &new)| (old, new))
        .collect();

    let sorted = new_grid();
    for (cell_ref, cell) in cells {
        let new_band = target[&band.coord(&cell_ref)];
        let new_ref = band.with_band(&cell_ref, new_band);
        sorted.insert(new_ref, Cell::new(new_ref, cell.value));
    }
    Ok(sorted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{BuiltinComparatorProvider, ProviderContext};
    use crate::spec::parse_list_resolved;
    use cellsort_engine::{BasicConverter, CellValue};

    fn grid_of(cells: &[(&str, CellValue)]) -> Grid {
        let grid = new_grid();
        for (reference, value) in cells {
            let cell_ref = CellRef::from_str(reference).unwrap();
            grid.insert(cell_ref, Cell::new(cell_ref, value.clone()));
        }
        grid
    }

    fn value_at(grid: &Grid, reference: &str) -> Option<CellValue> {
        let cell_ref = CellRef::from_str(reference).unwrap();
        grid.get(&cell_ref).map(|c| c.value.clone())
    }

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    fn sorted_by(grid: &Grid, spec: &str) -> Grid {
        let resolved = parse_list_resolved(
            spec,
            &BuiltinComparatorProvider::new(),
            &ProviderContext::default(),
        )
        .unwrap();
        sort_grid(grid, &resolved, true, &BasicConverter).unwrap()
    }

    #[test]
    fn test_sort_rows_by_column() {
        let grid = grid_of(&[
            ("A1", text("banana")),
            ("A2", text("apple")),
            ("A3", text("cherry")),
            ("B1", text("second")),
            ("B2", text("first")),
            ("B3", text("third")),
        ]);
        let sorted = sorted_by(&grid, "A=text");
        assert_eq!(value_at(&sorted, "A1"), Some(text("apple")));
        assert_eq!(value_at(&sorted, "A2"), Some(text("banana")));
        assert_eq!(value_at(&sorted, "A3"), Some(text("cherry")));
        // Sibling cells travel with their row.
        assert_eq!(value_at(&sorted, "B1"), Some(text("first")));
        assert_eq!(value_at(&sorted, "B3"), Some(text("third")));
    }

    #[test]
    fn test_sort_descending() {
        let grid = grid_of(&[
            ("A1", CellValue::Number(1.0)),
            ("A2", CellValue::Number(3.0)),
            ("A3", CellValue::Number(2.0)),
        ]);
        let sorted = sorted_by(&grid, "A=number DOWN");
        assert_eq!(value_at(&sorted, "A1"), Some(CellValue::Number(3.0)));
        assert_eq!(value_at(&sorted, "A2"), Some(CellValue::Number(2.0)));
        assert_eq!(value_at(&sorted, "A3"), Some(CellValue::Number(1.0)));
    }

    #[test]
    fn test_sort_columns_by_row() {
        let grid = grid_of(&[
            ("A1", CellValue::Number(2.0)),
            ("B1", CellValue::Number(1.0)),
            ("A2", text("was-under-2")),
            ("B2", text("was-under-1")),
        ]);
        let sorted = sorted_by(&grid, "1=number");
        assert_eq!(value_at(&sorted, "A1"), Some(CellValue::Number(1.0)));
        assert_eq!(value_at(&sorted, "B1"), Some(CellValue::Number(2.0)));
        assert_eq!(value_at(&sorted, "A2"), Some(text("was-under-1")));
        assert_eq!(value_at(&sorted, "B2"), Some(text("was-under-2")));
    }

    #[test]
    fn test_sparse_layout_preserved() {
        // Rows 1 and 5 are occupied; after sorting they still are.
        let grid = grid_of(&[("A1", text("zebra")), ("A5", text("apple"))]);
        let sorted = sorted_by(&grid, "A=text");
        assert_eq!(value_at(&sorted, "A1"), Some(text("apple")));
        assert_eq!(value_at(&sorted, "A5"), Some(text("zebra")));
        assert_eq!(value_at(&sorted, "A2"), None);
    }

    #[test]
    fn test_row_without_key_cell_sorts_last() {
        let grid = grid_of(&[
            ("B1", text("no key cell in A1")),
            ("A2", text("apple")),
        ]);
        let sorted = sorted_by(&grid, "A=text");
        assert_eq!(value_at(&sorted, "A1"), Some(text("apple")));
        assert_eq!(value_at(&sorted, "B2"), Some(text("no key cell in A1")));
    }

    #[test]
    fn test_stable_on_ties() {
        let grid = grid_of(&[
            ("A1", text("same")),
            ("B1", text("first")),
            ("A2", text("same")),
            ("B2", text("second")),
        ]);
        let sorted = sorted_by(&grid, "A=text");
        assert_eq!(value_at(&sorted, "B1"), Some(text("first")));
        assert_eq!(value_at(&sorted, "B2"), Some(text("second")));
    }
}
