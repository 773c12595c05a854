//! A first-wins merge of several providers under one namespace.

use cellsort_engine::Comparator;
use std::sync::Arc;

use crate::error::{Result, SortError};
use crate::provider::alias::Selector;
use crate::provider::info::InfoSet;
use crate::provider::{ComparatorProvider, ProviderContext};

/// Tries each member in order; the first successful resolution wins.
pub struct ComparatorProviderCollection {
    providers: Vec<Arc<dyn ComparatorProvider>>,
}

impl ComparatorProviderCollection {
    pub fn new(providers: Vec<Arc<dyn ComparatorProvider>>) -> ComparatorProviderCollection {
        ComparatorProviderCollection { providers }
    }
}

impl ComparatorProvider for ComparatorProviderCollection {
    fn resolve(&self, selector: &Selector, context: &ProviderContext) -> Result<Comparator> {
        for provider in &self.providers {
            if let Ok(comparator) = provider.resolve(selector, context) {
                return Ok(comparator);
            }
        }
        Err(SortError::UnknownComparator {
            name: selector.name.clone(),
        })
    }

    /// Union of all members' infos; duplicate `(url, name)` pairs collapse.
    fn infos(&self) -> InfoSet {
        self.providers
            .iter()
            .fold(InfoSet::default(), |acc, provider| {
                acc.union(&provider.infos())
            })
    }
}
