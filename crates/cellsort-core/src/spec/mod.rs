//! Sort specifications: per-column/row comparator name lists.
//!
//! A [`ColumnOrRowComparatorNames`] pairs one column or row reference with a
//! non-empty ordered list of comparator names and directions. A
//! [`ColumnOrRowComparatorNamesList`] holds several, all on the same axis
//! with no duplicate keys. Both round-trip through the textual grammar
//! (`"A=day-of-month UP,month-of-year DOWN;B=text"`) and serialize to JSON
//! as that same string.

mod parser;

pub use parser::{parse_list, parse_one};

use cellsort_engine::{Axis, ColumnOrRowReference, Comparator, NameAndDirection};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SortError};
use crate::provider::{ComparatorProvider, ProviderContext, Selector};

/// One column or row with its ordered comparator names.
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct ColumnOrRowComparatorNames {
    reference: ColumnOrRowReference,
    comparators: Vec<NameAndDirection>,
}

impl ColumnOrRowComparatorNames {
    /// Fails if `comparators` is empty.
    pub fn new(
        reference: ColumnOrRowReference,
        comparators: Vec<NameAndDirection>,
    ) -> Result<ColumnOrRowComparatorNames> {
        if comparators.is_empty() {
            return Err(SortError::EmptyList);
        }
        Ok(ColumnOrRowComparatorNames {
            reference,
            comparators,
        })
    }

    pub fn reference(&self) -> ColumnOrRowReference {
        self.reference
    }

    pub fn comparators(&self) -> &[NameAndDirection] {
        &self.comparators
    }

    /// Resolve every name through `provider`, applying directions.
    pub fn resolve(
        &self,
        provider: &dyn ComparatorProvider,
        context: &ProviderContext,
    ) -> Result<ResolvedColumnOrRow> {
        let mut comparators = Vec::with_capacity(self.comparators.len());
        for entry in &self.comparators {
            let comparator =
                provider.resolve(&Selector::name_only(entry.name.clone()), context)?;
            comparators.push(entry.direction.apply(comparator));
        }
        Ok(ResolvedColumnOrRow {
            reference: self.reference,
            comparators,
        })
    }
}

impl fmt::Display for ColumnOrRowComparatorNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=", self.reference)?;
        for (i, c) in self.comparators.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl FromStr for ColumnOrRowComparatorNames {
    type Err = SortError;

    fn from_str(s: &str) -> Result<ColumnOrRowComparatorNames> {
        parse_one(s)
    }
}

impl Serialize for ColumnOrRowComparatorNames {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ColumnOrRowComparatorNames {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<ColumnOrRowComparatorNames, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// An ordered list of [`ColumnOrRowComparatorNames`], axis-uniform and
/// duplicate-free.
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct ColumnOrRowComparatorNamesList(Vec<ColumnOrRowComparatorNames>);

impl ColumnOrRowComparatorNamesList {
    pub fn new(entries: Vec<ColumnOrRowComparatorNames>) -> Result<ColumnOrRowComparatorNamesList> {
        if entries.is_empty() {
            return Err(SortError::EmptyList);
        }

        let axis = entries[0].reference.axis();
        let mut seen = std::collections::HashSet::new();
        for entry in &entries {
            let reference = entry.reference;
            if reference.axis() != axis {
                return Err(SortError::MixedAxis {
                    text: reference.to_string(),
                });
            }
            if !seen.insert(reference.key()) {
                return Err(match axis {
                    Axis::Column => SortError::DuplicateColumn {
                        text: reference.to_string(),
                    },
                    Axis::Row => SortError::DuplicateRow {
                        text: reference.to_string(),
                    },
                });
            }
        }

        Ok(ColumnOrRowComparatorNamesList(entries))
    }

    pub fn axis(&self) -> Axis {
        self.0[0].reference.axis()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColumnOrRowComparatorNames> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn resolve(
        &self,
        provider: &dyn ComparatorProvider,
        context: &ProviderContext,
    ) -> Result<Vec<ResolvedColumnOrRow>> {
        self.0
            .iter()
            .map(|entry| entry.resolve(provider, context))
            .collect()
    }
}

impl fmt::Display for ColumnOrRowComparatorNamesList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ";")?;
            }
            write!(f, "{}", entry)?;
        }
        Ok(())
    }
}

impl FromStr for ColumnOrRowComparatorNamesList {
    type Err = SortError;

    fn from_str(s: &str) -> Result<ColumnOrRowComparatorNamesList> {
        parse_list(s)
    }
}

impl Serialize for ColumnOrRowComparatorNamesList {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ColumnOrRowComparatorNamesList {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<ColumnOrRowComparatorNamesList, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// One column or row with its comparators resolved to live instances.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedColumnOrRow {
    pub reference: ColumnOrRowReference,
    pub comparators: Vec<Comparator>,
}

/// Parse one entry and resolve its names immediately.
pub fn parse_one_resolved(
    text: &str,
    provider: &dyn ComparatorProvider,
    context: &ProviderContext,
) -> Result<ResolvedColumnOrRow> {
    parse_one(text)?.resolve(provider, context)
}

/// Parse a list and resolve every name immediately.
pub fn parse_list_resolved(
    text: &str,
    provider: &dyn ComparatorProvider,
    context: &ProviderContext,
) -> Result<Vec<ResolvedColumnOrRow>> {
    parse_list(text)?.resolve(provider, context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::BuiltinComparatorProvider;
    use cellsort_engine::{ComparatorKind, ComparatorName, Direction};

    fn names(text: &str) -> ColumnOrRowComparatorNames {
        text.parse().unwrap()
    }

    #[test]
    fn test_empty_comparator_list_rejected() {
        let reference: ColumnOrRowReference = "A".parse().unwrap();
        assert_eq!(
            ColumnOrRowComparatorNames::new(reference, vec![]),
            Err(SortError::EmptyList)
        );
    }

    #[test]
    fn test_list_construction_rejects_mixed_axis() {
        let err =
            ColumnOrRowComparatorNamesList::new(vec![names("A=text"), names("2=text")]).unwrap_err();
        assert_eq!(
            err,
            SortError::MixedAxis {
                text: "2".to_string()
            }
        );
    }

    #[test]
    fn test_list_construction_rejects_duplicates() {
        let err = ColumnOrRowComparatorNamesList::new(vec![names("A=text"), names("$A=number")])
            .unwrap_err();
        assert_eq!(
            err,
            SortError::DuplicateColumn {
                text: "$A".to_string()
            }
        );
    }

    #[test]
    fn test_display_omits_up() {
        let entry = names("B=text UP,number DOWN");
        assert_eq!(entry.to_string(), "B=text,number DOWN");
        assert_eq!(entry.comparators()[0].direction, Direction::Up);
        assert_eq!(entry.comparators()[1].name, ComparatorName::new("number").unwrap());
    }

    #[test]
    fn test_parse_one_resolved_applies_directions() {
        let provider = BuiltinComparatorProvider::new();
        let context = ProviderContext::default();
        let resolved = parse_one_resolved("A=text,number DOWN", &provider, &context).unwrap();
        assert_eq!(resolved.reference.to_string(), "A");
        assert_eq!(
            resolved.comparators,
            vec![
                Comparator::of(ComparatorKind::Text),
                Comparator::of(ComparatorKind::Number).reversed(),
            ]
        );
    }

    #[test]
    fn test_parse_one_resolved_unknown_name_fails() {
        let provider = BuiltinComparatorProvider::new();
        let context = ProviderContext::default();
        let err = parse_one_resolved("A=no-such", &provider, &context).unwrap_err();
        assert_eq!(
            err,
            SortError::UnknownComparator {
                name: ComparatorName::new("no-such").unwrap()
            }
        );
    }

    #[test]
    fn test_json_is_the_text_form() {
        let list: ColumnOrRowComparatorNamesList = "AB=text DOWN".parse().unwrap();
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, "\"AB=text DOWN\"");
        let back: ColumnOrRowComparatorNamesList = serde_json::from_str(&json).unwrap();
        assert_eq!(back, list);
    }
}
