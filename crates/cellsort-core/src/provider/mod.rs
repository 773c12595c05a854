//! Comparator providers.
//!
//! A provider resolves comparator names (via a [`Selector`]) to live
//! [`Comparator`] instances and advertises what it serves as an [`InfoSet`].
//! Providers are built once at startup, hold no mutable state, and may be
//! shared across threads behind an `Arc`.
//!
//! - [`BuiltinComparatorProvider`] - the built-in kinds under fixed URLs
//! - [`FilteredComparatorProvider`] - restricts a provider to a declared subset
//! - [`MappedComparatorProvider`] - strict renaming through an [`AliasSet`]
//! - [`MergedMappedComparatorProvider`] - renaming plus passthrough
//! - [`ComparatorProviderCollection`] - first-wins merge of several providers

mod alias;
mod builtin;
mod collection;
mod filtered;
mod info;
mod mapped;
mod merged;

pub use alias::{Alias, AliasSet, Selector};
pub use builtin::{BUILTIN_BASE_URL, BuiltinComparatorProvider};
pub use collection::ComparatorProviderCollection;
pub use filtered::FilteredComparatorProvider;
pub use info::{Info, InfoSet, Url};
pub use mapped::MappedComparatorProvider;
pub use merged::MergedMappedComparatorProvider;

use cellsort_engine::Comparator;

use crate::error::Result;

/// Request-scoped environment for comparator instantiation. Opaque to the
/// providers themselves; carried through unchanged.
#[derive(Clone, Debug, Default)]
pub struct ProviderContext {
    pub locale: Option<String>,
}

/// A source of comparator instances and their discoverability metadata.
///
/// `resolve` and `infos` perform no mutation; implementations are expected
/// to be usable concurrently without synchronization.
pub trait ComparatorProvider: Send + Sync {
    /// Resolve a selector to a comparator instance, or fail with an error
    /// identifying the unknown name.
    fn resolve(&self, selector: &Selector, context: &ProviderContext) -> Result<Comparator>;

    /// The set of comparators this provider currently serves.
    fn infos(&self) -> InfoSet;
}
