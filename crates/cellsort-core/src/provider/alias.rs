//! Comparator aliases and selectors.
//!
//! A [`Selector`] picks a comparator by name with optional instantiation
//! parameters (`custom(1)`). An [`Alias`] either exposes a name unchanged or
//! redefines it as a selector, optionally pinned to a provider URL. An
//! [`AliasSet`] is parsed from a comma-separated grammar:
//!
//! ```text
//! abs, min, max, custom-alias custom(1) https://example.com/custom, sum-alias sum
//! ```

use cellsort_engine::{ComparatorName, EngineError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SortError};
use crate::provider::info::Url;

/// A comparator name plus optional parameter text.
#[derive(Clone, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Selector {
    pub name: ComparatorName,
    pub params: Option<String>,
}

impl Selector {
    pub fn new(name: ComparatorName, params: Option<String>) -> Selector {
        Selector { name, params }
    }

    pub fn name_only(name: ComparatorName) -> Selector {
        Selector { name, params: None }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.params {
            None => write!(f, "{}", self.name),
            Some(p) => write!(f, "{}({})", self.name, p),
        }
    }
}

impl FromStr for Selector {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Selector> {
        let mut cursor = AliasCursor::new(s);
        let selector = cursor.parse_selector()?;
        cursor.skip_spaces();
        if let Some(ch) = cursor.peek() {
            return Err(SortError::invalid_character(ch, cursor.pos));
        }
        Ok(selector)
    }
}

/// One alias entry: a passthrough name or a full redefinition.
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub enum Alias {
    /// Expose this name unchanged.
    Name(ComparatorName),
    /// Expose `alias` as `selector`, optionally from a specific provider.
    Rename {
        alias: ComparatorName,
        selector: Selector,
        url: Option<Url>,
    },
}

impl Alias {
    /// The name this alias is looked up by.
    pub fn name(&self) -> &ComparatorName {
        match self {
            Alias::Name(name) => name,
            Alias::Rename { alias, .. } => alias,
        }
    }

    /// The name the backing provider is asked for.
    pub fn target_name(&self) -> &ComparatorName {
        match self {
            Alias::Name(name) => name,
            Alias::Rename { selector, .. } => &selector.name,
        }
    }
}

impl fmt::Display for Alias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alias::Name(name) => write!(f, "{}", name),
            Alias::Rename {
                alias,
                selector,
                url,
            } => {
                write!(f, "{} {}", alias, selector)?;
                if let Some(url) = url {
                    write!(f, " {}", url)?;
                }
                Ok(())
            }
        }
    }
}

/// A name-unique collection of aliases, ordered by alias name.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AliasSet(BTreeMap<ComparatorName, Alias>);

impl AliasSet {
    pub fn new(aliases: impl IntoIterator<Item = Alias>) -> Result<AliasSet> {
        let mut map = BTreeMap::new();
        for alias in aliases {
            let name = alias.name().clone();
            if map.insert(name.clone(), alias).is_some() {
                return Err(SortError::DuplicateAlias { name });
            }
        }
        Ok(AliasSet(map))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Alias> {
        self.0.values()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, name: &ComparatorName) -> Option<&Alias> {
        self.0.get(name)
    }

    /// The canonical name `name` maps to, if `name` is known at all.
    pub fn alias_or_name(&self, name: &ComparatorName) -> Option<&ComparatorName> {
        self.get(name).map(Alias::target_name)
    }

    /// The full selector, present only for redefinitions.
    pub fn alias_selector(&self, name: &ComparatorName) -> Option<&Selector> {
        match self.get(name) {
            Some(Alias::Rename { selector, .. }) => Some(selector),
            _ => None,
        }
    }
}

impl fmt::Display for AliasSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, alias) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", alias)?;
        }
        Ok(())
    }
}

impl FromStr for AliasSet {
    type Err = SortError;

    fn from_str(s: &str) -> Result<AliasSet> {
        let mut cursor = AliasCursor::new(s);
        let mut aliases = Vec::new();

        loop {
            cursor.skip_spaces();
            aliases.push(cursor.parse_alias()?);
            cursor.skip_spaces();
            match cursor.peek() {
                None => break,
                Some(',') => {
                    cursor.bump();
                }
                Some(ch) => return Err(SortError::invalid_character(ch, cursor.pos)),
            }
        }

        AliasSet::new(aliases)
    }
}

impl Serialize for AliasSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AliasSet {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<AliasSet, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

struct AliasCursor {
    chars: Vec<char>,
    pos: usize,
}

impl AliasCursor {
    fn new(text: &str) -> AliasCursor {
        AliasCursor {
            chars: text.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek();
        if ch.is_some() {
            self.pos += 1;
        }
        ch
    }

    fn skip_spaces(&mut self) {
        while self.peek() == Some(' ') {
            self.bump();
        }
    }

    fn parse_name(&mut self) -> Result<ComparatorName> {
        match self.peek() {
            None | Some(',') => return Err(SortError::Engine(EngineError::MissingComparatorName)),
            Some(c) if !c.is_ascii_alphabetic() => {
                return Err(SortError::invalid_character(c, self.pos));
            }
            Some(_) => {}
        }
        let mut token = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '-' {
                token.push(c);
                self.bump();
            } else {
                break;
            }
        }
        Ok(ComparatorName::new(&token)?)
    }

    /// `name` optionally followed by a parenthesised parameter text whose
    /// parentheses must balance.
    fn parse_selector(&mut self) -> Result<Selector> {
        let name = self.parse_name()?;
        if self.peek() != Some('(') {
            return Ok(Selector::name_only(name));
        }
        let open_pos = self.pos;
        self.bump();
        let mut depth = 1usize;
        let mut params = String::new();
        loop {
            match self.bump() {
                None => {
                    return Err(SortError::Engine(EngineError::InvalidCharacter {
                        ch: '(',
                        pos: open_pos,
                    }));
                }
                Some('(') => {
                    depth += 1;
                    params.push('(');
                }
                Some(')') => {
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                    params.push(')');
                }
                Some(c) => params.push(c),
            }
        }
        Ok(Selector::new(name, Some(params)))
    }

    /// One alias entry: `name`, or `alias selector [url]`.
    fn parse_alias(&mut self) -> Result<Alias> {
        let name = self.parse_name()?;

        // Only a space can introduce a selector; otherwise this entry is a
        // bare passthrough name.
        if self.peek() != Some(' ') {
            return Ok(Alias::Name(name));
        }
        self.skip_spaces();
        if matches!(self.peek(), None | Some(',')) {
            return Ok(Alias::Name(name));
        }

        let selector = self.parse_selector()?;

        let url = match self.peek() {
            Some(' ') => {
                self.skip_spaces();
                match self.peek() {
                    None | Some(',') => None,
                    Some(_) => {
                        let start = self.pos;
                        let mut token = String::new();
                        while let Some(c) = self.peek() {
                            if c == ' ' || c == ',' {
                                break;
                            }
                            token.push(c);
                            self.bump();
                        }
                        Some(token.parse::<Url>().map_err(|_| SortError::InvalidUrl {
                            text: self.chars[start..self.pos].iter().collect(),
                        })?)
                    }
                }
            }
            _ => None,
        };

        Ok(Alias::Rename {
            alias: name,
            selector,
            url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(text: &str) -> ComparatorName {
        ComparatorName::new(text).unwrap()
    }

    #[test]
    fn test_parse_bare_names() {
        let set: AliasSet = "abs, min, max".parse().unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.alias_or_name(&name("min")), Some(&name("min")));
        assert_eq!(set.alias_selector(&name("min")), None);
    }

    #[test]
    fn test_parse_full_redefinition() {
        let set: AliasSet =
            "abs, custom-alias custom(1) https://example.com/custom , sum-alias sum"
                .parse()
                .unwrap();
        assert_eq!(
            set.alias_or_name(&name("custom-alias")),
            Some(&name("custom"))
        );
        let selector = set.alias_selector(&name("custom-alias")).unwrap();
        assert_eq!(selector.params.as_deref(), Some("1"));
        assert_eq!(set.alias_or_name(&name("sum-alias")), Some(&name("sum")));
        assert_eq!(
            set.alias_selector(&name("sum-alias")),
            Some(&Selector::name_only(name("sum")))
        );
        assert_eq!(set.alias_or_name(&name("missing")), None);
    }

    #[test]
    fn test_display_sorted_by_name_and_round_trips() {
        let set: AliasSet = "min, abs, custom-alias custom(1) https://example.com/custom"
            .parse()
            .unwrap();
        let text = set.to_string();
        assert_eq!(
            text,
            "abs, custom-alias custom(1) https://example.com/custom, min"
        );
        let again: AliasSet = text.parse().unwrap();
        assert_eq!(again, set);
    }

    #[test]
    fn test_duplicate_alias_rejected() {
        let err = "abs, abs".parse::<AliasSet>().unwrap_err();
        assert_eq!(err, SortError::DuplicateAlias { name: name("abs") });
    }

    #[test]
    fn test_bad_url_rejected() {
        assert!(
            "custom-alias custom ftp://example.com"
                .parse::<AliasSet>()
                .is_err()
        );
    }

    #[test]
    fn test_selector_round_trip() {
        for text in ["text", "custom(1)", "custom(a(b))"] {
            let selector: Selector = text.parse().unwrap();
            assert_eq!(selector.to_string(), text);
        }
    }

    #[test]
    fn test_unterminated_params_reports_opening_paren() {
        for text in ["custom(1", "custom(a(b)", "custom(a(b"] {
            let err = text.parse::<Selector>().unwrap_err();
            assert_eq!(
                err,
                SortError::invalid_character('(', 6),
                "selector {text:?}"
            );
        }
    }

    #[test]
    fn test_json_is_the_text_form() {
        let set: AliasSet = "abs, sum-alias sum".parse().unwrap();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, "\"abs, sum-alias sum\"");
        let back: AliasSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
