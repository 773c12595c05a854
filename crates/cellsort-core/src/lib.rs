//! cellsort-core - sort-spec parsing, comparator providers and grid sorting.
//!
//! - [`spec`] - the textual sort-spec grammar (`"A=day-of-month UP,month-of-year DOWN;B=text"`)
//! - [`provider`] - comparator providers, aliases, filtering and merging
//! - [`sort`] - stable row/column sorting of a grid by a resolved spec
//! - [`error`] - the shared error type with end-user-facing diagnostics

pub mod error;
pub mod provider;
pub mod sort;
pub mod spec;

pub use error::{Result, SortError};
pub use provider::{
    Alias, AliasSet, BuiltinComparatorProvider, ComparatorProvider, ComparatorProviderCollection,
    FilteredComparatorProvider, Info, InfoSet, MappedComparatorProvider,
    MergedMappedComparatorProvider, ProviderContext, Selector, Url,
};
pub use sort::sort_grid;
pub use spec::{
    ColumnOrRowComparatorNames, ColumnOrRowComparatorNamesList, ResolvedColumnOrRow,
    parse_list, parse_list_resolved, parse_one, parse_one_resolved,
};
