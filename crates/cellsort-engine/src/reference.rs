//! Column and row references.
//!
//! Provides bidirectional conversion between spreadsheet-style column/row
//! references (e.g., "A", "$BC", "12", "$3") and zero-indexed coordinates,
//! with an absolute (`$`) marker. Two references with the same coordinate
//! are the same sort key whether or not either is absolute.

use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a reference names a column or a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Column,
    Row,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Axis::Column => "column",
                Axis::Row => "row",
            }
        )
    }
}

/// A column reference ("A", "$BC"), 0-indexed.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct ColumnReference {
    pub index: usize,
    pub absolute: bool,
}

/// A row reference ("1", "$3"), 0-indexed.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct RowReference {
    pub index: usize,
    pub absolute: bool,
}

/// Either a column or a row reference.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum ColumnOrRowReference {
    Column(ColumnReference),
    Row(RowReference),
}

impl ColumnReference {
    pub fn new(index: usize) -> ColumnReference {
        ColumnReference {
            index,
            absolute: false,
        }
    }
}

impl RowReference {
    pub fn new(index: usize) -> RowReference {
        RowReference {
            index,
            absolute: false,
        }
    }
}

impl ColumnOrRowReference {
    pub fn axis(&self) -> Axis {
        match self {
            ColumnOrRowReference::Column(_) => Axis::Column,
            ColumnOrRowReference::Row(_) => Axis::Row,
        }
    }

    /// 0-indexed coordinate along this reference's axis.
    pub fn index(&self) -> usize {
        match self {
            ColumnOrRowReference::Column(c) => c.index,
            ColumnOrRowReference::Row(r) => r.index,
        }
    }

    /// Sort-key identity: axis plus coordinate, ignoring the `$` marker.
    /// `A` and `$A` are the same key.
    pub fn key(&self) -> (Axis, usize) {
        (self.axis(), self.index())
    }
}

/// Convert column letters to a 0-indexed column ("A" -> 0, "Z" -> 25, "AA" -> 26).
pub fn letters_to_index(letters: &str) -> Option<usize> {
    if letters.is_empty() {
        return None;
    }
    let mut acc = 0usize;
    for c in letters.bytes() {
        if !c.is_ascii_uppercase() {
            return None;
        }
        let digit = (c - b'A') as usize + 1;
        acc = acc.checked_mul(26)?.checked_add(digit)?;
    }
    acc.checked_sub(1)
}

/// Convert a 0-indexed column to spreadsheet-style letters (0 -> A, 25 -> Z, 26 -> AA).
pub fn index_to_letters(col: usize) -> String {
    let mut result = String::new();
    let mut n = col as u128 + 1;
    while n > 0 {
        n -= 1;
        result.insert(0, (b'A' + (n % 26) as u8) as char);
        n /= 26;
    }
    result
}

fn split_absolute(text: &str) -> (bool, &str) {
    match text.strip_prefix('$') {
        Some(rest) => (true, rest),
        None => (false, text),
    }
}

impl FromStr for ColumnReference {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<ColumnReference> {
        let (absolute, body) = split_absolute(s);
        let index = letters_to_index(body).ok_or_else(|| EngineError::InvalidReference {
            text: s.to_string(),
        })?;
        Ok(ColumnReference { index, absolute })
    }
}

impl FromStr for RowReference {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<RowReference> {
        let (absolute, body) = split_absolute(s);
        let invalid = || EngineError::InvalidReference {
            text: s.to_string(),
        };
        if body.is_empty() || !body.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let one_based: usize = body.parse().map_err(|_| invalid())?;
        let index = one_based.checked_sub(1).ok_or_else(invalid)?;
        Ok(RowReference { index, absolute })
    }
}

impl FromStr for ColumnOrRowReference {
    type Err = EngineError;

    /// Parse either kind, discriminating on the first non-`$` character.
    fn from_str(s: &str) -> Result<ColumnOrRowReference> {
        let (_, body) = split_absolute(s);
        match body.bytes().next() {
            Some(b) if b.is_ascii_uppercase() => {
                ColumnReference::from_str(s).map(ColumnOrRowReference::Column)
            }
            Some(b) if b.is_ascii_digit() => {
                RowReference::from_str(s).map(ColumnOrRowReference::Row)
            }
            _ => Err(EngineError::InvalidReference {
                text: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ColumnReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.absolute {
            write!(f, "$")?;
        }
        write!(f, "{}", index_to_letters(self.index))
    }
}

impl fmt::Display for RowReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.absolute {
            write!(f, "$")?;
        }
        write!(f, "{}", self.index + 1)
    }
}

impl fmt::Display for ColumnOrRowReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnOrRowReference::Column(c) => c.fmt(f),
            ColumnOrRowReference::Row(r) => r.fmt(f),
        }
    }
}

impl Serialize for ColumnOrRowReference {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ColumnOrRowReference {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<ColumnOrRowReference, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
