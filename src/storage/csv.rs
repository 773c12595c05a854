//! CSV import/export with typed field inference.
//!
//! Unquoted fields are inferred as numbers, booleans or ISO dates/times so
//! they sort as typed values; quoted fields always stay text.

use anyhow::Result;
use cellsort_engine::{Cell, CellRef, CellValue, Grid, new_grid};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::path::Path;

/// Parse a CSV file into a grid.
pub fn parse_csv(path: &Path) -> Result<Grid> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_csv_content(&content))
}

/// Parse CSV content from a string.
pub fn parse_csv_content(content: &str) -> Grid {
    let grid = new_grid();
    for (row, line) in content.lines().enumerate() {
        for (col, field) in parse_csv_line(line).into_iter().enumerate() {
            let value = match field {
                CsvField::Empty => continue,
                CsvField::Quoted(text) => CellValue::Text(text),
                CsvField::Plain(text) => infer_value(&text),
            };
            let cell_ref = CellRef::new(col, row);
            grid.insert(cell_ref, Cell::new(cell_ref, value));
        }
    }
    grid
}

enum CsvField {
    Empty,
    Plain(String),
    Quoted(String),
}

/// Parse a single CSV line, handling quoted fields and doubled quotes.
fn parse_csv_line(line: &str) -> Vec<CsvField> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut field_was_quoted = false;
    let mut chars = line.chars().peekable();

    let mut finish = |current: &mut String, quoted: &mut bool| {
        let field = if *quoted {
            CsvField::Quoted(std::mem::take(current))
        } else {
            let trimmed = current.trim().to_string();
            current.clear();
            if trimmed.is_empty() {
                CsvField::Empty
            } else {
                CsvField::Plain(trimmed)
            }
        };
        *quoted = false;
        field
    };

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                // Doubled quote is an escaped quote.
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(c);
            }
        } else {
            match c {
                '"' => {
                    in_quotes = true;
                    field_was_quoted = true;
                }
                ',' => fields.push(finish(&mut current, &mut field_was_quoted)),
                _ => current.push(c),
            }
        }
    }
    fields.push(finish(&mut current, &mut field_was_quoted));
    fields
}

/// Type an unquoted field: number, boolean, ISO date/time, else text.
fn infer_value(text: &str) -> CellValue {
    if let Ok(n) = text.parse::<f64>() {
        return CellValue::Number(n);
    }
    match text {
        "TRUE" => return CellValue::Boolean(true),
        "FALSE" => return CellValue::Boolean(false),
        _ => {}
    }
    if let Ok(d) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return CellValue::Date(d);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S") {
        return CellValue::DateTime(dt);
    }
    if let Ok(t) = NaiveTime::parse_from_str(text, "%H:%M:%S") {
        return CellValue::Time(t);
    }
    CellValue::Text(text.to_string())
}

/// Render the grid back to CSV, densely up to the last occupied cell.
pub fn write_csv_content(grid: &Grid) -> String {
    let (mut max_col, mut max_row) = (0usize, 0usize);
    let mut empty = true;
    for entry in grid.iter() {
        empty = false;
        max_col = max_col.max(entry.key().col);
        max_row = max_row.max(entry.key().row);
    }
    if empty {
        return String::new();
    }

    let mut out = String::new();
    for row in 0..=max_row {
        for col in 0..=max_col {
            if col > 0 {
                out.push(',');
            }
            if let Some(cell) = grid.get(&CellRef::new(col, row)) {
                out.push_str(&escape_csv_field(&cell.value));
            }
        }
        out.push('\n');
    }
    out
}

fn escape_csv_field(value: &CellValue) -> String {
    let text = value.to_string();
    let needs_quotes = match value {
        // Text that would be re-inferred as another type round-trips quoted.
        CellValue::Text(s) => {
            s.contains(',')
                || s.contains('"')
                || !matches!(infer_value(s), CellValue::Text(_))
                || s.trim() != s
        }
        _ => false,
    };
    if needs_quotes {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_inference() {
        let grid = parse_csv_content("1.5,hello,2000-01-01,TRUE\n");
        assert_eq!(
            grid.get(&CellRef::new(0, 0)).unwrap().value,
            CellValue::Number(1.5)
        );
        assert_eq!(
            grid.get(&CellRef::new(1, 0)).unwrap().value,
            CellValue::Text("hello".to_string())
        );
        assert!(matches!(
            grid.get(&CellRef::new(2, 0)).unwrap().value,
            CellValue::Date(_)
        ));
        assert_eq!(
            grid.get(&CellRef::new(3, 0)).unwrap().value,
            CellValue::Boolean(true)
        );
    }

    #[test]
    fn test_quoted_fields_stay_text() {
        let grid = parse_csv_content("\"42\",\"a,b\",\"say \"\"hi\"\"\"\n");
        assert_eq!(
            grid.get(&CellRef::new(0, 0)).unwrap().value,
            CellValue::Text("42".to_string())
        );
        assert_eq!(
            grid.get(&CellRef::new(1, 0)).unwrap().value,
            CellValue::Text("a,b".to_string())
        );
        assert_eq!(
            grid.get(&CellRef::new(2, 0)).unwrap().value,
            CellValue::Text("say \"hi\"".to_string())
        );
    }

    #[test]
    fn test_empty_fields_skipped() {
        let grid = parse_csv_content("a,,c\n");
        assert!(grid.get(&CellRef::new(1, 0)).is_none());
        assert_eq!(grid.len(), 2);
    }

    #[test]
    fn test_round_trip() {
        let content = "apple,1.5\n\"42\",2000-01-01\n";
        let grid = parse_csv_content(content);
        assert_eq!(write_csv_content(&grid), content);
    }
}
