//! Typed cell values.
//!
//! A [`CellValue`] is the evaluated content of a cell as seen by the sorting
//! engine: plain text, a number, a boolean, or one of the chrono temporal
//! types. [`ValueKind`] names the runtime type a comparator expects its
//! inputs converted to.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;

/// The evaluated value of a cell.
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    Boolean(bool),
    Date(NaiveDate),
    Time(NaiveTime),
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// The kind of this value, or `None` for an empty cell.
    pub fn kind(&self) -> Option<ValueKind> {
        match self {
            CellValue::Empty => None,
            CellValue::Text(_) => Some(ValueKind::Text),
            CellValue::Number(_) => Some(ValueKind::Number),
            CellValue::Boolean(_) => Some(ValueKind::Boolean),
            CellValue::Date(_) => Some(ValueKind::Date),
            CellValue::Time(_) => Some(ValueKind::Time),
            CellValue::DateTime(_) => Some(ValueKind::DateTime),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Boolean(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            CellValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            CellValue::Time(t) => write!(f, "{}", t.format("%H:%M:%S")),
            CellValue::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S")),
        }
    }
}

/// The runtime type a comparator expects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Text,
    Number,
    Boolean,
    Date,
    Time,
    DateTime,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Text => "text",
            ValueKind::Number => "number",
            ValueKind::Boolean => "boolean",
            ValueKind::Date => "date",
            ValueKind::Time => "time",
            ValueKind::DateTime => "date-time",
        };
        write!(f, "{}", name)
    }
}
