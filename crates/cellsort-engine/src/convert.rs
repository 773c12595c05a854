//! Value conversion for the missing-value policy.
//!
//! Comparators declare the [`ValueKind`] they order; before a cell can take
//! part in a comparison its value is converted to that kind. Failure to
//! convert is not an error: it is a documented outcome (`None`) consumed by
//! the cell comparator's missing-value policy.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::value::{CellValue, ValueKind};

/// Converts a cell value to the kind a comparator expects.
///
/// `None` means the value cannot be represented as `target`; the caller
/// decides where unconvertible cells sort.
pub trait ValueConverter {
    fn convert(&self, value: &CellValue, target: ValueKind) -> Option<CellValue>;
}

/// Default conversions: identity on matching kinds, text parsed into the
/// typed kinds, and date-time projected onto its date/time halves. Typed
/// values never convert back to text, so a text comparator sees dates and
/// numbers as unconvertible and leaves their placement to the
/// missing-value policy.
#[derive(Clone, Copy, Debug, Default)]
pub struct BasicConverter;

impl ValueConverter for BasicConverter {
    fn convert(&self, value: &CellValue, target: ValueKind) -> Option<CellValue> {
        if value.kind() == Some(target) {
            return Some(value.clone());
        }

        match (value, target) {
            (CellValue::Empty, _) => None,

            (CellValue::Text(s), ValueKind::Number) => {
                s.trim().parse::<f64>().ok().map(CellValue::Number)
            }
            (CellValue::Text(s), ValueKind::Boolean) => match s.trim() {
                "TRUE" | "true" => Some(CellValue::Boolean(true)),
                "FALSE" | "false" => Some(CellValue::Boolean(false)),
                _ => None,
            },
            (CellValue::Text(s), ValueKind::Date) => parse_date(s.trim()).map(CellValue::Date),
            (CellValue::Text(s), ValueKind::Time) => parse_time(s.trim()).map(CellValue::Time),
            (CellValue::Text(s), ValueKind::DateTime) => {
                parse_date_time(s.trim()).map(CellValue::DateTime)
            }

            (CellValue::DateTime(dt), ValueKind::Date) => Some(CellValue::Date(dt.date())),
            (CellValue::DateTime(dt), ValueKind::Time) => Some(CellValue::Time(dt.time())),
            (CellValue::Date(d), ValueKind::DateTime) => {
                d.and_hms_opt(0, 0, 0).map(CellValue::DateTime)
            }

            _ => None,
        }
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

fn parse_time(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .ok()
}

fn parse_date_time(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_on_matching_kind() {
        let v = CellValue::Number(3.5);
        assert_eq!(BasicConverter.convert(&v, ValueKind::Number), Some(v));
    }

    #[test]
    fn test_text_to_date() {
        let got = BasicConverter.convert(&CellValue::Text("1999-12-31".into()), ValueKind::Date);
        let want = CellValue::Date(NaiveDate::from_ymd_opt(1999, 12, 31).unwrap());
        assert_eq!(got, Some(want));
    }

    #[test]
    fn test_unparseable_text_fails() {
        let got = BasicConverter.convert(&CellValue::Text("1a".into()), ValueKind::Date);
        assert_eq!(got, None);
    }

    #[test]
    fn test_typed_values_never_convert_to_text() {
        let date = CellValue::Date(NaiveDate::from_ymd_opt(1999, 12, 31).unwrap());
        assert_eq!(BasicConverter.convert(&date, ValueKind::Text), None);
        assert_eq!(
            BasicConverter.convert(&CellValue::Number(1.0), ValueKind::Text),
            None
        );
    }

    #[test]
    fn test_empty_never_converts() {
        assert_eq!(BasicConverter.convert(&CellValue::Empty, ValueKind::Text), None);
    }

    #[test]
    fn test_date_time_projects_to_date() {
        let dt = NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        let got = BasicConverter.convert(&CellValue::DateTime(dt), ValueKind::Date);
        assert_eq!(
            got,
            Some(CellValue::Date(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()))
        );
    }
}
