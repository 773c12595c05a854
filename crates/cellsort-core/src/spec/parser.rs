//! Parser for the textual sort-spec grammar.
//!
//! ```text
//! list  := entry (";" entry)*
//! entry := columnOrRow "=" nameAndDirection ("," nameAndDirection)*
//! nameAndDirection := name (" " ("UP"|"DOWN"))?
//! ```
//!
//! Errors carry exact character positions in the original text; the message
//! strings are part of the public surface.

use cellsort_engine::{Axis, ColumnOrRowReference, ComparatorName, Direction, NameAndDirection};
use std::collections::HashSet;

use crate::error::{Result, SortError};

use super::{ColumnOrRowComparatorNames, ColumnOrRowComparatorNamesList};

struct Cursor {
    chars: Vec<char>,
    pos: usize,
}

impl Cursor {
    fn new(text: &str) -> Cursor {
        Cursor {
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

    fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// Is `target` ahead of the cursor before `stop` (or end of text)?
    fn contains_ahead(&self, target: char, stop: char) -> bool {
        for &ch in &self.chars[self.pos..] {
            if ch == target {
                return true;
            }
            if ch == stop {
                return false;
            }
        }
        false
    }
}

/// Parse a single `columnOrRow "=" names` entry. A trailing `;` terminates
/// the entry without being consumed.
pub fn parse_one(text: &str) -> Result<ColumnOrRowComparatorNames> {
    let mut cursor = Cursor::new(text);
    let entry = parse_entry(&mut cursor)?;
    if let Some(ch) = cursor.peek() {
        return Err(SortError::invalid_character(ch, cursor.pos));
    }
    ColumnOrRowComparatorNames::new(entry.reference, entry.comparators)
}

/// Parse a `;`-separated list of entries, enforcing axis uniformity and
/// duplicate-key detection across the whole list.
pub fn parse_list(text: &str) -> Result<ColumnOrRowComparatorNamesList> {
    let mut cursor = Cursor::new(text);
    let mut entries = Vec::new();
    let mut axis: Option<Axis> = None;
    let mut seen: HashSet<(Axis, usize)> = HashSet::new();

    loop {
        let entry = parse_entry(&mut cursor)?;
        let entry_axis = entry.reference.axis();

        // The first entry establishes the axis for the whole list.
        match axis {
            None => axis = Some(entry_axis),
            Some(expected) if expected != entry_axis => {
                return Err(SortError::invalid_character(entry.first_char, entry.text_pos));
            }
            Some(_) => {}
        }

        // `A` and `$A` are the same key; the message uses the reference as
        // written the second time.
        if !seen.insert(entry.reference.key()) {
            return Err(match entry_axis {
                Axis::Column => SortError::DuplicateColumn {
                    text: entry.text.clone(),
                },
                Axis::Row => SortError::DuplicateRow {
                    text: entry.text.clone(),
                },
            });
        }

        entries.push(ColumnOrRowComparatorNames::new(
            entry.reference,
            entry.comparators,
        )?);

        match cursor.peek() {
            None => break,
            Some(';') => {
                cursor.bump();
            }
            // parse_entry only stops at ';' or end of text.
            Some(ch) => return Err(SortError::invalid_character(ch, cursor.pos)),
        }
    }

    ColumnOrRowComparatorNamesList::new(entries)
}

struct Entry {
    reference: ColumnOrRowReference,
    /// The reference as written, for duplicate-key messages.
    text: String,
    /// Position of the reference's first character in the source text.
    text_pos: usize,
    first_char: char,
    comparators: Vec<NameAndDirection>,
}

fn parse_entry(cursor: &mut Cursor) -> Result<Entry> {
    // Without an "=" there is no entry to speak of.
    if !cursor.contains_ahead('=', ';') {
        return Err(SortError::ExpectedColumnOrRow);
    }

    let (reference, text, text_pos, first_char) = parse_reference(cursor)?;

    // parse_reference stops at the "=" it validated.
    cursor.bump();

    let mut comparators = Vec::new();
    loop {
        comparators.push(parse_name_and_direction(cursor)?);
        match cursor.peek() {
            None | Some(';') => break,
            Some(',') => {
                cursor.bump();
            }
            Some(ch) => return Err(SortError::invalid_character(ch, cursor.pos)),
        }
    }

    Ok(Entry {
        reference,
        text,
        text_pos,
        first_char,
        comparators,
    })
}

/// Parse the column/row token and leave the cursor on the following "=".
fn parse_reference(cursor: &mut Cursor) -> Result<(ColumnOrRowReference, String, usize, char)> {
    let start = cursor.pos;
    let mut token = String::new();

    let Some(first) = cursor.peek() else {
        return Err(SortError::ExpectedColumnOrRow);
    };
    if first == '$' {
        token.push(first);
        cursor.bump();
    }

    let axis = match cursor.peek() {
        Some(c) if c.is_ascii_alphabetic() => Axis::Column,
        Some(c) if c.is_ascii_digit() => Axis::Row,
        Some(c) => return Err(SortError::invalid_character(c, cursor.pos)),
        None => return Err(SortError::ExpectedColumnOrRow),
    };

    while let Some(c) = cursor.peek() {
        let more = match axis {
            Axis::Column => c.is_ascii_alphabetic(),
            Axis::Row => c.is_ascii_digit(),
        };
        if !more {
            break;
        }
        token.push(c);
        cursor.bump();
    }

    match cursor.peek() {
        Some('=') => {}
        Some(c) => return Err(SortError::invalid_character(c, cursor.pos)),
        None => return Err(SortError::ExpectedColumnOrRow),
    }

    let reference: ColumnOrRowReference = token.to_ascii_uppercase().parse()?;
    Ok((reference, token, start, first))
}

fn parse_name_and_direction(cursor: &mut Cursor) -> Result<NameAndDirection> {
    let name = parse_name(cursor)?;

    let direction = match cursor.peek() {
        Some(' ') => {
            cursor.bump();
            parse_direction(cursor)?
        }
        _ => Direction::DEFAULT,
    };

    Ok(NameAndDirection::new(name, direction))
}

fn parse_name(cursor: &mut Cursor) -> Result<ComparatorName> {
    match cursor.peek() {
        None | Some(',') | Some(';') => return Err(SortError::Engine(
            cellsort_engine::EngineError::MissingComparatorName,
        )),
        Some(c) if !c.is_ascii_alphabetic() => {
            return Err(SortError::invalid_character(c, cursor.pos));
        }
        Some(_) => {}
    }

    let mut token = String::new();
    while let Some(c) = cursor.peek() {
        if c.is_ascii_alphanumeric() || c == '-' {
            token.push(c);
            cursor.bump();
        } else {
            break;
        }
    }

    Ok(ComparatorName::new(&token)?)
}

fn parse_direction(cursor: &mut Cursor) -> Result<Direction> {
    match cursor.peek() {
        None | Some(',') | Some(';') => {
            return Err(SortError::Engine(cellsort_engine::EngineError::MissingUpDown));
        }
        // A second space is an offending character, not a bad token.
        Some(' ') => return Err(SortError::invalid_character(' ', cursor.pos)),
        Some(_) => {}
    }

    let mut token = String::new();
    while let Some(c) = cursor.peek() {
        if c == ',' || c == ';' {
            break;
        }
        token.push(c);
        cursor.bump();
    }

    Ok(token.parse::<Direction>()?)
}
