//! Comparator names and sort directions.
//!
//! A [`ComparatorName`] is a validated kebab-case identifier ("day-of-month").
//! A [`NameAndDirection`] pairs a name with a [`Direction`]; its text form is
//! `name` (UP is the default and never printed) or `name DOWN`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::comparator::Comparator;
use crate::error::{EngineError, Result};

/// An immutable, validated comparator name.
///
/// Non-empty, ASCII letters/digits/`-`, must start with a letter.
/// Case-sensitive; equality and ordering are by the underlying string.
#[derive(Clone, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct ComparatorName(String);

impl ComparatorName {
    pub fn new(text: &str) -> Result<ComparatorName> {
        if text.is_empty() {
            return Err(EngineError::MissingComparatorName);
        }
        for (pos, ch) in text.chars().enumerate() {
            let ok = if pos == 0 {
                ch.is_ascii_alphabetic()
            } else {
                ch.is_ascii_alphanumeric() || ch == '-'
            };
            if !ok {
                return Err(EngineError::InvalidCharacter { ch, pos });
            }
        }
        Ok(ComparatorName(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ComparatorName {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<ComparatorName> {
        ComparatorName::new(s)
    }
}

impl fmt::Display for ComparatorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for ComparatorName {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ComparatorName {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<ComparatorName, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Sort direction. UP is ascending and the default.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum Direction {
    #[default]
    Up,
    Down,
}

impl Direction {
    pub const DEFAULT: Direction = Direction::Up;

    pub fn flip(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Apply this direction to a comparator: UP returns it unchanged, DOWN
    /// reverses it. Applying DOWN twice collapses back to the original.
    pub fn apply(self, comparator: Comparator) -> Comparator {
        match self {
            Direction::Up => comparator,
            Direction::Down => comparator.reversed(),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Direction::Up => "UP",
                Direction::Down => "DOWN",
            }
        )
    }
}

impl FromStr for Direction {
    type Err = EngineError;

    /// Exactly "UP" or "DOWN", case-sensitive.
    fn from_str(s: &str) -> Result<Direction> {
        match s {
            "UP" => Ok(Direction::Up),
            "DOWN" => Ok(Direction::Down),
            "" => Err(EngineError::MissingUpDown),
            _ => Err(EngineError::InvalidDirection {
                token: s.to_string(),
            }),
        }
    }
}

/// A comparator name with its sort direction.
#[derive(Clone, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct NameAndDirection {
    pub name: ComparatorName,
    pub direction: Direction,
}

impl NameAndDirection {
    pub fn new(name: ComparatorName, direction: Direction) -> NameAndDirection {
        NameAndDirection { name, direction }
    }
}

impl fmt::Display for NameAndDirection {
    /// The default direction (UP) is omitted from the printed form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            Direction::Up => write!(f, "{}", self.name),
            Direction::Down => write!(f, "{} {}", self.name, self.direction),
        }
    }
}

impl FromStr for NameAndDirection {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<NameAndDirection> {
        match s.split_once(' ') {
            None => Ok(NameAndDirection::new(
                ComparatorName::new(s)?,
                Direction::DEFAULT,
            )),
            Some((name, token)) => {
                let name = ComparatorName::new(name)?;
                if token.starts_with(' ') {
                    // Two spaces in a row; the second is the offending one.
                    return Err(EngineError::InvalidCharacter {
                        ch: ' ',
                        pos: name.as_str().len() + 1,
                    });
                }
                Ok(NameAndDirection::new(name, token.parse()?))
            }
        }
    }
}

impl Serialize for NameAndDirection {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NameAndDirection {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<NameAndDirection, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_validation() {
        assert!(ComparatorName::new("day-of-month").is_ok());
        assert_eq!(
            ComparatorName::new(""),
            Err(EngineError::MissingComparatorName)
        );
        assert_eq!(
            ComparatorName::new("1abc"),
            Err(EngineError::InvalidCharacter { ch: '1', pos: 0 })
        );
        assert_eq!(
            ComparatorName::new("ab!c"),
            Err(EngineError::InvalidCharacter { ch: '!', pos: 2 })
        );
    }

    #[test]
    fn test_name_is_case_sensitive() {
        let a = ComparatorName::new("text").unwrap();
        let b = ComparatorName::new("TEXT").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_direction_parse_is_case_sensitive() {
        assert_eq!("UP".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!("DOWN".parse::<Direction>(), Ok(Direction::Down));
        assert!("up".parse::<Direction>().is_err());
        assert_eq!(
            "".parse::<Direction>(),
            Err(EngineError::MissingUpDown)
        );
    }

    #[test]
    fn test_name_and_direction_round_trip() {
        for text in ["text", "text DOWN", "day-of-month DOWN"] {
            let parsed: NameAndDirection = text.parse().unwrap();
            assert_eq!(parsed.to_string(), text);
        }
    }

    #[test]
    fn test_up_never_printed() {
        let parsed: NameAndDirection = "text UP".parse().unwrap();
        assert_eq!(parsed.to_string(), "text");
    }

    #[test]
    fn test_missing_direction_after_space() {
        let err = "text ".parse::<NameAndDirection>().unwrap_err();
        assert_eq!(err, EngineError::MissingUpDown);
    }

    #[test]
    fn test_bad_direction_token() {
        let err = "text SIDEWAYS".parse::<NameAndDirection>().unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidDirection {
                token: "SIDEWAYS".to_string()
            }
        );
    }

    #[test]
    fn test_json_form_is_the_text_form() {
        let v: NameAndDirection = "month-of-year DOWN".parse().unwrap();
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "\"month-of-year DOWN\"");
        let back: NameAndDirection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }
}
