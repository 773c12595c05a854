//! A provider exposing a restricted view of a richer provider.

use cellsort_engine::Comparator;
use std::sync::Arc;

use crate::error::{Result, SortError};
use crate::provider::info::InfoSet;
use crate::provider::{ComparatorProvider, ProviderContext, Selector};

/// Only names present in the declared subset resolve, even when the backing
/// provider could serve more.
pub struct FilteredComparatorProvider {
    backing: Arc<dyn ComparatorProvider>,
    declared: InfoSet,
}

impl FilteredComparatorProvider {
    pub fn new(
        backing: Arc<dyn ComparatorProvider>,
        declared: InfoSet,
    ) -> FilteredComparatorProvider {
        FilteredComparatorProvider { backing, declared }
    }
}

impl ComparatorProvider for FilteredComparatorProvider {
    fn resolve(&self, selector: &Selector, context: &ProviderContext) -> Result<Comparator> {
        if !self.declared.contains_name(&selector.name) {
            return Err(SortError::UnknownComparator {
                name: selector.name.clone(),
            });
        }
        self.backing.resolve(selector, context)
    }

    /// The declared subset intersected with what the backing provider
    /// actually serves.
    fn infos(&self) -> InfoSet {
        let backing = self.backing.infos();
        let kept = self
            .declared
            .iter()
            .filter(|info| backing.contains_name(&info.name))
            .cloned();
        InfoSet::new(kept).unwrap_or_else(|_| unreachable!())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::BuiltinComparatorProvider;
    use crate::provider::info::Info;
    use cellsort_engine::ComparatorName;

    fn name(text: &str) -> ComparatorName {
        ComparatorName::new(text).unwrap()
    }

    fn declared(entries: &[(&str, &str)]) -> InfoSet {
        InfoSet::new(
            entries
                .iter()
                .map(|(url, n)| Info::new(url.parse().unwrap(), name(n))),
        )
        .unwrap()
    }

    #[test]
    fn test_undeclared_name_fails_even_when_backing_has_it() {
        let provider = FilteredComparatorProvider::new(
            Arc::new(BuiltinComparatorProvider::new()),
            declared(&[("https://example.com/text", "text")]),
        );
        let ctx = ProviderContext::default();

        assert!(provider.resolve(&Selector::name_only(name("text")), &ctx).is_ok());
        assert_eq!(
            provider
                .resolve(&Selector::name_only(name("number")), &ctx)
                .unwrap_err(),
            SortError::UnknownComparator {
                name: name("number")
            }
        );
    }

    #[test]
    fn test_infos_is_declared_intersected_with_backing() {
        let provider = FilteredComparatorProvider::new(
            Arc::new(BuiltinComparatorProvider::new()),
            declared(&[
                ("https://example.com/text", "text"),
                ("https://example.com/absent", "absent"),
            ]),
        );
        let infos = provider.infos();
        assert_eq!(infos.len(), 1);
        assert!(infos.contains_name(&name("text")));
    }
}
