//! Provider for the built-in comparator kinds.

use cellsort_engine::{Comparator, ComparatorKind};

use crate::error::{Result, SortError};
use crate::provider::info::{Info, InfoSet};
use crate::provider::{ComparatorProvider, ProviderContext, Selector};

/// Base URL the built-in comparators are advertised under; each kind lives
/// at `<base>/<name>`.
pub const BUILTIN_BASE_URL: &str = "https://github.com/cellsort/cellsort/Comparator";

/// Serves every [`ComparatorKind`] by its canonical name. The name table is
/// the closed enum itself; there is no runtime discovery.
#[derive(Debug)]
pub struct BuiltinComparatorProvider {
    infos: InfoSet,
}

impl BuiltinComparatorProvider {
    pub fn new() -> BuiltinComparatorProvider {
        let infos = ComparatorKind::ALL.into_iter().map(|kind| {
            let url = format!("{}/{}", BUILTIN_BASE_URL, kind.name());
            // Statically well-formed: base URL constant plus a validated name.
            Info::new(
                url.parse().unwrap_or_else(|_| unreachable!()),
                Comparator::of(kind).comparator_name(),
            )
        });
        BuiltinComparatorProvider {
            infos: InfoSet::new(infos).unwrap_or_else(|_| unreachable!()),
        }
    }
}

impl Default for BuiltinComparatorProvider {
    fn default() -> BuiltinComparatorProvider {
        BuiltinComparatorProvider::new()
    }
}

impl ComparatorProvider for BuiltinComparatorProvider {
    fn resolve(&self, selector: &Selector, _context: &ProviderContext) -> Result<Comparator> {
        let kind = ComparatorKind::from_name(selector.name.as_str()).ok_or_else(|| {
            SortError::UnknownComparator {
                name: selector.name.clone(),
            }
        })?;
        if selector.params.is_some() {
            return Err(SortError::UnexpectedParameters {
                name: selector.name.clone(),
            });
        }
        Ok(Comparator::of(kind))
    }

    fn infos(&self) -> InfoSet {
        self.infos.clone()
    }
}
