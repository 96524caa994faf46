//! In-memory table model.
//!
//! A [`DataTable`] is immutable after load: every operation that "changes" a
//! table (column drop, row filter, slice, sample) produces a new derived
//! table and leaves the source untouched.

use std::fmt;

use rand::Rng;
use rand::seq::index;

/// A single typed cell.
///
/// Cells are typed individually at parse time; the column-level dtype
/// reported by the inspector is derived from the cells (see [`DType`]).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
    Null,
}

impl Value {
    /// Parses a raw CSV field into a typed cell.
    ///
    /// Empty fields (after trimming) and NaN floats become [`Value::Null`];
    /// integer-looking fields become [`Value::Int`]; other numeric fields
    /// become [`Value::Float`]; everything else is kept as text.
    pub fn parse(raw: &str) -> Value {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Value::Null;
        }
        if let Ok(i) = trimmed.parse::<i64>() {
            return Value::Int(i);
        }
        if let Ok(f) = trimmed.parse::<f64>() {
            if f.is_nan() {
                return Value::Null;
            }
            return Value::Float(f);
        }
        Value::Str(trimmed.to_string())
    }

    /// Numeric view of the cell, if it has one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Text view of the cell, if it is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Str(s) => write!(f, "{}", s),
            Value::Null => Ok(()),
        }
    }
}

/// Column-level data type, derived from the cells of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DType {
    Int,
    Float,
    Text,
    /// All cells are null (or the table has no rows).
    Empty,
}

impl DType {
    pub fn name(&self) -> &'static str {
        match self {
            DType::Int => "int",
            DType::Float => "float",
            DType::Text => "text",
            DType::Empty => "empty",
        }
    }
}

/// Per-column summary used by the dataset inspector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSummary {
    pub name: String,
    pub dtype: DType,
    /// Number of non-null cells in the column.
    pub non_null: usize,
}

/// Error for operations that reference a column absent from the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingColumn {
    pub table: String,
    pub column: String,
}

impl fmt::Display for MissingColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "table '{}' has no column '{}'", self.table, self.column)
    }
}

impl std::error::Error for MissingColumn {}

/// An immutable, named, rectangular table of typed cells.
#[derive(Debug, Clone, PartialEq)]
pub struct DataTable {
    name: String,
    headers: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl DataTable {
    /// Creates a table. Rows must be rectangular; the loader guarantees this
    /// for file input, and derived tables preserve it.
    pub fn new(name: impl Into<String>, headers: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        let name = name.into();
        debug_assert!(rows.iter().all(|r| r.len() == headers.len()));
        Self {
            name,
            headers,
            rows,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// (rows, columns).
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.headers.len())
    }

    /// Total cell count = rows × columns.
    pub fn cell_count(&self) -> usize {
        self.rows.len() * self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a column by exact header name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Like [`column_index`](Self::column_index), but reports the table and
    /// column names on failure.
    pub fn require_column(&self, name: &str) -> Result<usize, MissingColumn> {
        self.column_index(name).ok_or_else(|| MissingColumn {
            table: self.name.clone(),
            column: name.to_string(),
        })
    }

    /// First `n` rows in load order. For `n` past the end, returns all rows.
    pub fn head(&self, n: usize) -> DataTable {
        let take = n.min(self.rows.len());
        DataTable {
            name: self.name.clone(),
            headers: self.headers.clone(),
            rows: self.rows[..take].to_vec(),
        }
    }

    /// Random sample of up to `n` distinct rows, in nondeterministic order.
    pub fn sample<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> DataTable {
        let amount = n.min(self.rows.len());
        let picked = index::sample(rng, self.rows.len(), amount);
        DataTable {
            name: self.name.clone(),
            headers: self.headers.clone(),
            rows: picked.iter().map(|i| self.rows[i].clone()).collect(),
        }
    }

    /// New table without the named columns. Every named column must exist.
    pub fn drop_columns(&self, names: &[&str]) -> Result<DataTable, MissingColumn> {
        let mut dropped = Vec::with_capacity(names.len());
        for name in names {
            dropped.push(self.require_column(name)?);
        }

        let keep: Vec<usize> = (0..self.headers.len())
            .filter(|i| !dropped.contains(i))
            .collect();

        Ok(DataTable {
            name: self.name.clone(),
            headers: keep.iter().map(|&i| self.headers[i].clone()).collect(),
            rows: self
                .rows
                .iter()
                .map(|row| keep.iter().map(|&i| row[i].clone()).collect())
                .collect(),
        })
    }

    /// Rows whose cell in `column` equals the literal string `value`.
    pub fn filter_eq(&self, column: &str, value: &str) -> Result<DataTable, MissingColumn> {
        let idx = self.require_column(column)?;
        Ok(DataTable {
            name: format!("{} [{} = {}]", self.name, column, value),
            headers: self.headers.clone(),
            rows: self
                .rows
                .iter()
                .filter(|row| row[idx].as_str() == Some(value))
                .cloned()
                .collect(),
        })
    }

    /// Distinct display values of a column, in first-seen row order.
    pub fn distinct(&self, column: &str) -> Result<Vec<String>, MissingColumn> {
        let idx = self.require_column(column)?;
        let mut seen = Vec::new();
        for row in &self.rows {
            let text = row[idx].to_string();
            if !seen.contains(&text) {
                seen.push(text);
            }
        }
        Ok(seen)
    }

    /// Per-column dtype and non-null counts.
    pub fn column_summaries(&self) -> Vec<ColumnSummary> {
        (0..self.headers.len())
            .map(|col| {
                let mut non_null = 0;
                let mut saw_int = false;
                let mut saw_float = false;
                let mut saw_text = false;
                for row in &self.rows {
                    match &row[col] {
                        Value::Int(_) => {
                            saw_int = true;
                            non_null += 1;
                        }
                        Value::Float(_) => {
                            saw_float = true;
                            non_null += 1;
                        }
                        Value::Str(_) => {
                            saw_text = true;
                            non_null += 1;
                        }
                        Value::Null => {}
                    }
                }
                let dtype = if saw_text {
                    DType::Text
                } else if saw_float {
                    DType::Float
                } else if saw_int {
                    DType::Int
                } else {
                    DType::Empty
                };
                ColumnSummary {
                    name: self.headers[col].clone(),
                    dtype,
                    non_null,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn countries() -> DataTable {
        let headers = vec![
            "Country/Region".to_string(),
            "TotalCases".to_string(),
            "TotalDeaths".to_string(),
            "NewCases".to_string(),
        ];
        let rows = vec![
            vec![
                Value::Str("USA".into()),
                Value::Int(100),
                Value::Int(5),
                Value::Int(1),
            ],
            vec![
                Value::Str("India".into()),
                Value::Int(80),
                Value::Int(3),
                Value::Null,
            ],
            vec![
                Value::Str("US".into()),
                Value::Int(60),
                Value::Float(2.5),
                Value::Int(2),
            ],
        ];
        DataTable::new("overall", headers, rows)
    }

    #[test]
    fn parse_types_cells() {
        assert_eq!(Value::parse("42"), Value::Int(42));
        assert_eq!(Value::parse(" -7 "), Value::Int(-7));
        assert_eq!(Value::parse("3.5"), Value::Float(3.5));
        assert_eq!(Value::parse("1e3"), Value::Float(1000.0));
        assert_eq!(Value::parse("US"), Value::Str("US".into()));
        assert_eq!(Value::parse(""), Value::Null);
        assert_eq!(Value::parse("   "), Value::Null);
        assert_eq!(Value::parse("NaN"), Value::Null);
    }

    #[test]
    fn shape_and_cell_count() {
        let t = countries();
        assert_eq!(t.shape(), (3, 4));
        assert_eq!(t.cell_count(), 12);

        let empty = DataTable::new("empty", vec!["A".into(), "B".into()], vec![]);
        assert_eq!(empty.shape(), (0, 2));
        assert_eq!(empty.cell_count(), 0);
    }

    #[test]
    fn head_is_positional_and_clamped() {
        let t = countries();
        let two = t.head(2);
        assert_eq!(two.row_count(), 2);
        assert_eq!(two.rows()[0][0], Value::Str("USA".into()));
        assert_eq!(two.rows()[1][0], Value::Str("India".into()));

        // Past-the-end slice returns everything, no error.
        assert_eq!(t.head(50).row_count(), 3);
        assert_eq!(t.head(0).row_count(), 0);
    }

    #[test]
    fn sample_returns_distinct_rows() {
        let t = countries();
        let mut rng = StdRng::seed_from_u64(7);
        let s = t.sample(2, &mut rng);
        assert_eq!(s.row_count(), 2);
        assert_ne!(s.rows()[0], s.rows()[1]);

        // Asking for more rows than exist returns all of them.
        let all = t.sample(10, &mut rng);
        assert_eq!(all.row_count(), 3);
    }

    #[test]
    fn drop_columns_removes_exactly_those() {
        let t = countries();
        let cleaned = t.drop_columns(&["NewCases"]).unwrap();
        assert_eq!(cleaned.column_count(), t.column_count() - 1);
        assert_eq!(cleaned.row_count(), t.row_count());
        assert!(cleaned.column_index("NewCases").is_none());
        assert!(cleaned.column_index("TotalCases").is_some());
    }

    #[test]
    fn drop_columns_reports_missing() {
        let t = countries();
        let err = t.drop_columns(&["NoSuch"]).unwrap_err();
        assert_eq!(err.column, "NoSuch");
        assert_eq!(err.table, "overall");
        assert!(err.to_string().contains("NoSuch"));
    }

    #[test]
    fn filter_eq_keeps_only_matching_rows() {
        let t = countries();
        let us = t.filter_eq("Country/Region", "US").unwrap();
        assert_eq!(us.row_count(), 1);
        assert_eq!(us.rows()[0][0], Value::Str("US".into()));
        // "USA" must not match the literal "US".
        assert!(us.rows().iter().all(|r| r[0].as_str() == Some("US")));
    }

    #[test]
    fn distinct_preserves_first_seen_order() {
        let headers = vec!["Date".to_string()];
        let rows = vec![
            vec![Value::Str("2020-01-23".into())],
            vec![Value::Str("2020-01-22".into())],
            vec![Value::Str("2020-01-23".into())],
        ];
        let t = DataTable::new("ts", headers, rows);
        assert_eq!(t.distinct("Date").unwrap(), vec!["2020-01-23", "2020-01-22"]);
    }

    #[test]
    fn column_summaries_report_dtype_and_non_null() {
        let t = countries();
        let summaries = t.column_summaries();
        assert_eq!(summaries.len(), 4);

        assert_eq!(summaries[0].dtype, DType::Text);
        assert_eq!(summaries[0].non_null, 3);
        assert_eq!(summaries[1].dtype, DType::Int);
        // Mixed int/float column reads as float.
        assert_eq!(summaries[2].dtype, DType::Float);
        // Null cells are not counted.
        assert_eq!(summaries[3].non_null, 2);
    }

    #[test]
    fn summaries_of_empty_table() {
        let t = DataTable::new("empty", vec!["A".into()], vec![]);
        let summaries = t.column_summaries();
        assert_eq!(summaries[0].dtype, DType::Empty);
        assert_eq!(summaries[0].non_null, 0);
    }
}
