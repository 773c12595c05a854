//! A provider renaming part of a backing provider, passing the rest through.

use cellsort_engine::Comparator;
use std::sync::Arc;

use crate::error::{Result, SortError};
use crate::provider::alias::Selector;
use crate::provider::info::InfoSet;
use crate::provider::{ComparatorProvider, ProviderContext};

/// Unlike [`MappedComparatorProvider`], names not covered by the declared
/// renames delegate straight to the backing provider, so provider-only names
/// stay visible under their original name.
///
/// A declared [`Info`](crate::provider::Info) renames the backing info that
/// carries the same URL.
///
/// [`MappedComparatorProvider`]: crate::provider::MappedComparatorProvider
pub struct MergedMappedComparatorProvider {
    declared: InfoSet,
    backing: Arc<dyn ComparatorProvider>,
}

impl MergedMappedComparatorProvider {
    pub fn new(
        declared: InfoSet,
        backing: Arc<dyn ComparatorProvider>,
    ) -> MergedMappedComparatorProvider {
        MergedMappedComparatorProvider { declared, backing }
    }
}

impl ComparatorProvider for MergedMappedComparatorProvider {
    fn resolve(&self, selector: &Selector, context: &ProviderContext) -> Result<Comparator> {
        let backing_infos = self.backing.infos();

        // A declared rename: forward under the backing provider's own name
        // for the shared URL.
        if let Some(declared) = self.declared.get(&selector.name) {
            if let Some(backing_name) = backing_infos.name_for_url(&declared.url) {
                return self.backing.resolve(
                    &Selector::new(backing_name.clone(), selector.params.clone()),
                    context,
                );
            }
            return Err(SortError::UnknownComparator {
                name: selector.name.clone(),
            });
        }

        // A provider-only name: visible only if no rename covers its URL.
        if let Some(url) = backing_infos.url_for(&selector.name) {
            if self.declared.name_for_url(url).is_none() {
                return self.backing.resolve(selector, context);
            }
        }

        Err(SortError::UnknownComparator {
            name: selector.name.clone(),
        })
    }

    /// Declared renames (under their declared name) plus backing infos whose
    /// URL no rename covers. A name never appears twice: on a clash the
    /// rename wins.
    fn infos(&self) -> InfoSet {
        let backing = self.backing.infos();
        // Declared sets are name- and url-unique, so each subset is too.
        let renamed = InfoSet::new(
            self.declared
                .iter()
                .filter(|info| backing.name_for_url(&info.url).is_some())
                .cloned()
                .collect::<Vec<_>>(),
        )
        .unwrap_or_else(|_| unreachable!());
        let passthrough = InfoSet::new(
            backing
                .iter()
                .filter(|info| self.declared.name_for_url(&info.url).is_none())
                .cloned()
                .collect::<Vec<_>>(),
        )
        .unwrap_or_else(|_| unreachable!());
        renamed.union(&passthrough)
    }
}
