//! Raw Table - Untyped view of a loaded input file.

use serde::{Deserialize, Serialize};

/// A single cell as it came out of the input file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawCell {
    Number(f64),
    Text(String),
    Empty,
}

impl RawCell {
    /// Returns the numeric value of the cell, if it has one.
    ///
    /// Text counts as numeric when it parses as a finite real after trimming.
    /// Non-finite numbers are never numeric.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            RawCell::Number(value) => Some(*value),
            RawCell::Text(text) => text.trim().parse::<f64>().ok(),
            RawCell::Empty => None,
        }
        .filter(|value| value.is_finite())
    }

    /// Renders the cell the way it is written back to output files.
    pub fn render(&self) -> String {
        match self {
            RawCell::Number(value) => format_number(*value),
            RawCell::Text(text) => text.clone(),
            RawCell::Empty => String::new(),
        }
    }
}

/// Formats a number using the shortest representation that round-trips.
///
/// Integral values print without a fractional part; NaN prints as `NaN`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    format!("{}", value)
}

/// Header names plus rows of untyped cells.
///
/// Rows may be shorter than the header; missing cells read as [`RawCell::Empty`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<RawCell>>,
}

impl RawTable {
    /// Creates a raw table from headers and rows.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<RawCell>>) -> Self {
        Self { headers, rows }
    }

    /// Column names, label column first.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows in file order.
    pub fn rows(&self) -> &[Vec<RawCell>] {
        &self.rows
    }

    /// Number of columns, as declared by the header.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Gets a cell, treating cells past the end of a short row as empty.
    pub fn cell(&self, row: usize, column: usize) -> &RawCell {
        static EMPTY: RawCell = RawCell::Empty;
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .unwrap_or(&EMPTY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_numeric() {
        assert_eq!(RawCell::Number(4.5).as_number(), Some(4.5));
        assert_eq!(RawCell::Number(-2.0).as_number(), Some(-2.0));
    }

    #[test]
    fn numeric_text_is_numeric() {
        assert_eq!(RawCell::Text(" 7 ".to_string()).as_number(), Some(7.0));
        assert_eq!(RawCell::Text("1e3".to_string()).as_number(), Some(1000.0));
    }

    #[test]
    fn non_numeric_cells_are_rejected() {
        assert_eq!(RawCell::Text("cheap".to_string()).as_number(), None);
        assert_eq!(RawCell::Text(String::new()).as_number(), None);
        assert_eq!(RawCell::Empty.as_number(), None);
    }

    #[test]
    fn non_finite_values_are_not_numeric() {
        assert_eq!(RawCell::Number(f64::NAN).as_number(), None);
        assert_eq!(RawCell::Number(f64::INFINITY).as_number(), None);
        assert_eq!(RawCell::Text("NaN".to_string()).as_number(), None);
        assert_eq!(RawCell::Text("inf".to_string()).as_number(), None);
    }

    #[test]
    fn render_formats_numbers_compactly() {
        assert_eq!(RawCell::Number(3.0).render(), "3");
        assert_eq!(RawCell::Number(0.25).render(), "0.25");
        assert_eq!(RawCell::Text("M1".to_string()).render(), "M1");
        assert_eq!(RawCell::Empty.render(), "");
    }

    #[test]
    fn format_number_writes_nan() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(1.5), "1.5");
    }

    #[test]
    fn short_rows_read_as_empty() {
        let table = RawTable::new(
            vec!["Name".into(), "C1".into(), "C2".into()],
            vec![vec![RawCell::Text("A".into()), RawCell::Number(1.0)]],
        );
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.cell(0, 1), &RawCell::Number(1.0));
        assert_eq!(table.cell(0, 2), &RawCell::Empty);
        assert_eq!(table.cell(5, 0), &RawCell::Empty);
    }
}
