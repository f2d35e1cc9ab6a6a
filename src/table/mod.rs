// In-memory table model — the input to both engines.
//
// A Table is an ordered list of column names plus rows of RawValue cells.
// Cell values are typed at ingestion into a closed enum (text / number /
// missing) so the rest of the pipeline never sees untyped scalars.

pub mod reader;
pub mod selection;

pub use selection::{parse_source_indices, ColumnSelection};

/// One raw cell value as it came out of the source file.
///
/// CSV has no types, so the reader applies a small inference rule: an empty
/// field is `Missing`, a field that parses as a float is `Number`, anything
/// else is `Text`. Normalization (normalize module) collapses all three into
/// the two-state present/missing domain before computation.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Text(String),
    Number(f64),
    Missing,
}

impl RawValue {
    /// Render the value to text without normalization.
    ///
    /// Used for id columns, which are carried through to output unchanged.
    /// `Missing` renders as the empty string.
    pub fn display_text(&self) -> String {
        match self {
            RawValue::Text(s) => s.clone(),
            RawValue::Number(n) => format_number(*n),
            RawValue::Missing => String::new(),
        }
    }
}

/// Format a numeric cell the way it would appear in the CSV.
///
/// Integral floats print without a trailing ".0" so an id column of
/// record numbers reads as "42", not "42.0".
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

/// An immutable, fully-loaded table: named columns, rows of typed cells.
///
/// Column order follows the source file and matters only for display and
/// for the default column selection (first column = id, rest = sources).
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<RawValue>>,
}

impl Table {
    /// Build a table from column names and rows.
    ///
    /// Short rows are padded with `Missing` so every row has one cell per
    /// column; extra cells beyond the header width are dropped.
    pub fn new(columns: Vec<String>, mut rows: Vec<Vec<RawValue>>) -> Self {
        let width = columns.len();
        for row in &mut rows {
            row.resize(width, RawValue::Missing);
        }
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Index of a column by exact name, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// The cell at (row, column index). Panics if out of bounds — callers
    /// index only through a validated ColumnSelection.
    pub fn cell(&self, row: usize, col: usize) -> &RawValue {
        &self.rows[row][col]
    }

    /// Iterate over rows in input order.
    pub fn rows(&self) -> impl Iterator<Item = &[RawValue]> {
        self.rows.iter().map(|r| r.as_slice())
    }
}
