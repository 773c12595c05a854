//! Built-in comparator kinds and the reversible comparator value.
//!
//! Comparator dispatch is a closed enum: every built-in kind carries its
//! expected [`ValueKind`] and a three-way ordering over values of that kind.
//! A [`Comparator`] is a kind plus an orientation; reversal is a pure flip
//! between the `Direct` and `Reversed` variants, so applying DOWN twice
//! always yields the original value.

use chrono::{Datelike, Timelike};
use std::cmp::Ordering;
use std::fmt;

use crate::name::{ComparatorName, Direction};
use crate::value::{CellValue, ValueKind};

/// The closed set of built-in comparator kinds.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ComparatorKind {
    Text,
    TextCaseInsensitive,
    Number,
    Boolean,
    Date,
    DateTime,
    Time,
    DayOfMonth,
    MonthOfYear,
    Year,
    HourOfDay,
    MinuteOfHour,
    SecondsOfMinute,
}

impl ComparatorKind {
    pub const ALL: [ComparatorKind; 13] = [
        ComparatorKind::Text,
        ComparatorKind::TextCaseInsensitive,
        ComparatorKind::Number,
        ComparatorKind::Boolean,
        ComparatorKind::Date,
        ComparatorKind::DateTime,
        ComparatorKind::Time,
        ComparatorKind::DayOfMonth,
        ComparatorKind::MonthOfYear,
        ComparatorKind::Year,
        ComparatorKind::HourOfDay,
        ComparatorKind::MinuteOfHour,
        ComparatorKind::SecondsOfMinute,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ComparatorKind::Text => "text",
            ComparatorKind::TextCaseInsensitive => "text-case-insensitive",
            ComparatorKind::Number => "number",
            ComparatorKind::Boolean => "boolean",
            ComparatorKind::Date => "date",
            ComparatorKind::DateTime => "date-time",
            ComparatorKind::Time => "time",
            ComparatorKind::DayOfMonth => "day-of-month",
            ComparatorKind::MonthOfYear => "month-of-year",
            ComparatorKind::Year => "year",
            ComparatorKind::HourOfDay => "hour-of-day",
            ComparatorKind::MinuteOfHour => "minute-of-hour",
            ComparatorKind::SecondsOfMinute => "seconds-of-minute",
        }
    }

    pub fn from_name(name: &str) -> Option<ComparatorKind> {
        ComparatorKind::ALL.into_iter().find(|k| k.name() == name)
    }

    /// The value kind inputs must be converted to before comparison.
    pub fn value_kind(self) -> ValueKind {
        match self {
            ComparatorKind::Text | ComparatorKind::TextCaseInsensitive => ValueKind::Text,
            ComparatorKind::Number => ValueKind::Number,
            ComparatorKind::Boolean => ValueKind::Boolean,
            ComparatorKind::Date
            | ComparatorKind::DayOfMonth
            | ComparatorKind::MonthOfYear
            | ComparatorKind::Year => ValueKind::Date,
            ComparatorKind::DateTime => ValueKind::DateTime,
            ComparatorKind::Time
            | ComparatorKind::HourOfDay
            | ComparatorKind::MinuteOfHour
            | ComparatorKind::SecondsOfMinute => ValueKind::Time,
        }
    }

    /// Three-way comparison of two values already converted to
    /// [`Self::value_kind`]. Values of any other kind compare equal.
    pub fn compare(self, a: &CellValue, b: &CellValue) -> Ordering {
        use CellValue::*;
        match (self, a, b) {
            (ComparatorKind::Text, Text(a), Text(b)) => a.cmp(b),
            (ComparatorKind::TextCaseInsensitive, Text(a), Text(b)) => {
                a.to_lowercase().cmp(&b.to_lowercase())
            }
            (ComparatorKind::Number, Number(a), Number(b)) => a.total_cmp(b),
            (ComparatorKind::Boolean, Boolean(a), Boolean(b)) => a.cmp(b),
            (ComparatorKind::Date, Date(a), Date(b)) => a.cmp(b),
            (ComparatorKind::DateTime, DateTime(a), DateTime(b)) => a.cmp(b),
            (ComparatorKind::Time, Time(a), Time(b)) => a.cmp(b),
            (ComparatorKind::DayOfMonth, Date(a), Date(b)) => a.day().cmp(&b.day()),
            (ComparatorKind::MonthOfYear, Date(a), Date(b)) => a.month().cmp(&b.month()),
            (ComparatorKind::Year, Date(a), Date(b)) => a.year().cmp(&b.year()),
            (ComparatorKind::HourOfDay, Time(a), Time(b)) => a.hour().cmp(&b.hour()),
            (ComparatorKind::MinuteOfHour, Time(a), Time(b)) => a.minute().cmp(&b.minute()),
            (ComparatorKind::SecondsOfMinute, Time(a), Time(b)) => a.second().cmp(&b.second()),
            _ => Ordering::Equal,
        }
    }
}

/// A named, typed, reversible three-way comparator.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Comparator {
    Direct(ComparatorKind),
    Reversed(ComparatorKind),
}

impl Comparator {
    pub fn of(kind: ComparatorKind) -> Comparator {
        Comparator::Direct(kind)
    }

    pub fn kind(self) -> ComparatorKind {
        match self {
            Comparator::Direct(k) | Comparator::Reversed(k) => k,
        }
    }

    pub fn name(self) -> &'static str {
        self.kind().name()
    }

    pub fn value_kind(self) -> ValueKind {
        self.kind().value_kind()
    }

    pub fn direction(self) -> Direction {
        match self {
            Comparator::Direct(_) => Direction::Up,
            Comparator::Reversed(_) => Direction::Down,
        }
    }

    /// Flip orientation. `Reversed(k).reversed()` is `Direct(k)`, never a
    /// doubly-negating wrapper.
    pub fn reversed(self) -> Comparator {
        match self {
            Comparator::Direct(k) => Comparator::Reversed(k),
            Comparator::Reversed(k) => Comparator::Direct(k),
        }
    }

    pub fn compare(self, a: &CellValue, b: &CellValue) -> Ordering {
        match self {
            Comparator::Direct(k) => k.compare(a, b),
            Comparator::Reversed(k) => k.compare(a, b).reverse(),
        }
    }

    /// The comparator's name as a validated [`ComparatorName`].
    pub fn comparator_name(self) -> ComparatorName {
        // Built-in kind names always satisfy name validation.
        ComparatorName::new(self.name()).unwrap_or_else(|_| unreachable!())
    }
}

impl fmt::Display for Comparator {
    /// Prints like a [`NameAndDirection`]: the default UP orientation is
    /// omitted, a reversed comparator prints as `name DOWN`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparator::Direct(k) => write!(f, "{}", k.name()),
            Comparator::Reversed(k) => write!(f, "{} DOWN", k.name()),
        }
    }
}
