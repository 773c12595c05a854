//! A provider renaming a backing provider through an alias set.

use cellsort_engine::Comparator;
use std::sync::Arc;

use crate::error::{Result, SortError};
use crate::provider::alias::{Alias, AliasSet, Selector};
use crate::provider::info::{Info, InfoSet};
use crate::provider::{ComparatorProvider, ProviderContext};

/// Strict remap: every request must go through the alias set. Names the
/// alias set does not mention fail, even if the backing provider has them.
pub struct MappedComparatorProvider {
    aliases: AliasSet,
    backing: Arc<dyn ComparatorProvider>,
}

impl MappedComparatorProvider {
    pub fn new(
        aliases: AliasSet,
        backing: Arc<dyn ComparatorProvider>,
    ) -> MappedComparatorProvider {
        MappedComparatorProvider { aliases, backing }
    }
}

impl ComparatorProvider for MappedComparatorProvider {
    fn resolve(&self, selector: &Selector, context: &ProviderContext) -> Result<Comparator> {
        match self.aliases.get(&selector.name) {
            None => Err(SortError::UnknownComparator {
                name: selector.name.clone(),
            }),
            // A passthrough name forwards the request's own parameters.
            Some(Alias::Name(name)) => self.backing.resolve(
                &Selector::new(name.clone(), selector.params.clone()),
                context,
            ),
            // A redefinition carries its own selector.
            Some(Alias::Rename {
                selector: target, ..
            }) => self.backing.resolve(target, context),
        }
    }

    /// One info per alias entry, named by the alias and located at the
    /// alias's own declared URL, or at the backing provider's URL for the
    /// target when the alias declares none. Aliases whose target the
    /// backing provider does not serve are dropped. Two aliases of the
    /// same target share the backing URL, and only the first stays
    /// discoverable; both still resolve. Declaring a distinct URL on the
    /// second keeps it visible.
    fn infos(&self) -> InfoSet {
        let backing = self.backing.infos();
        let infos = self.aliases.iter().filter_map(|alias| {
            let served = backing.url_for(alias.target_name())?;
            let url = match alias {
                Alias::Rename { url: Some(url), .. } => url.clone(),
                _ => served.clone(),
            };
            Some(Info::new(url, alias.name().clone()))
        });
        // Alias names are unique; colliding URLs keep the first.
        let mut seen_urls = std::collections::BTreeSet::new();
        InfoSet::new(
            infos
                .filter(|info| seen_urls.insert(info.url.clone()))
                .collect::<Vec<_>>(),
        )
        .unwrap_or_else(|_| unreachable!())
    }
}
