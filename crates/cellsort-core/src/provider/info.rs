//! Provider discoverability metadata.
//!
//! An [`Info`] ties a comparator name to the absolute URL identifying where
//! it is served from. An [`InfoSet`] is the name-unique, url-unique ordered
//! set a provider advertises; it serializes to a JSON array of
//! `{"url": ..., "name": ...}` objects.

use cellsort_engine::ComparatorName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SortError};

/// An absolute http(s) URL.
#[derive(Clone, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Url(String);

impl Url {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Url {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Url> {
        let scheme_ok = s.strip_prefix("https://").or_else(|| s.strip_prefix("http://"));
        match scheme_ok {
            Some(rest) if !rest.is_empty() && !s.contains(char::is_whitespace) => {
                Ok(Url(s.to_string()))
            }
            _ => Err(SortError::InvalidUrl {
                text: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Url {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Url {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Url, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// The unit of plugin discoverability: where a named comparator lives.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct Info {
    pub url: Url,
    pub name: ComparatorName,
}

impl Info {
    pub fn new(url: Url, name: ComparatorName) -> Info {
        Info { url, name }
    }
}

// Ordered by name first so listings read alphabetically.
impl Ord for Info {
    fn cmp(&self, other: &Info) -> std::cmp::Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.url.cmp(&other.url))
    }
}

impl PartialOrd for Info {
    fn partial_cmp(&self, other: &Info) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Info {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.url, self.name)
    }
}

/// A name-unique, url-unique ordered set of [`Info`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct InfoSet(BTreeSet<Info>);

impl InfoSet {
    pub fn new(infos: impl IntoIterator<Item = Info>) -> Result<InfoSet> {
        let mut names = BTreeSet::new();
        let mut urls = BTreeSet::new();
        let mut set = BTreeSet::new();
        for info in infos {
            if !names.insert(info.name.clone()) {
                return Err(SortError::DuplicateInfoName { name: info.name });
            }
            if !urls.insert(info.url.clone()) {
                return Err(SortError::DuplicateInfoUrl {
                    url: info.url.to_string(),
                });
            }
            set.insert(info);
        }
        Ok(InfoSet(set))
    }

    /// Union keeping the first occurrence of any repeated name or URL.
    /// Identical `(url, name)` pairs collapse.
    pub fn union(&self, other: &InfoSet) -> InfoSet {
        let mut merged = self.clone();
        for info in other.iter() {
            if merged.get(&info.name).is_none() && merged.name_for_url(&info.url).is_none() {
                merged.0.insert(info.clone());
            }
        }
        merged
    }

    pub fn iter(&self) -> impl Iterator<Item = &Info> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, name: &ComparatorName) -> Option<&Info> {
        self.0.iter().find(|info| &info.name == name)
    }

    pub fn contains_name(&self, name: &ComparatorName) -> bool {
        self.get(name).is_some()
    }

    pub fn url_for(&self, name: &ComparatorName) -> Option<&Url> {
        self.get(name).map(|info| &info.url)
    }

    pub fn name_for_url(&self, url: &Url) -> Option<&ComparatorName> {
        self.0
            .iter()
            .find(|info| &info.url == url)
            .map(|info| &info.name)
    }

    /// Indented listing under a heading, for `--list-comparators` style
    /// output.
    pub fn tree_print(&self, label: &str) -> String {
        let mut out = String::from(label);
        out.push('\n');
        for info in self.iter() {
            out.push_str("  ");
            out.push_str(&info.to_string());
            out.push('\n');
        }
        out
    }
}

impl Serialize for InfoSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

impl<'de> Deserialize<'de> for InfoSet {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<InfoSet, D::Error> {
        let infos = Vec::<Info>::deserialize(deserializer)?;
        InfoSet::new(infos).map_err(serde::de::Error::custom)
    }
}
