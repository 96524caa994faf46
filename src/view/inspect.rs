//! Dataset inspection view models.

use crate::data::{ColumnSummary, DataTable};

/// Rows shown in a head preview.
pub const HEAD_ROWS: usize = 5;
/// Rows drawn by the random sample view.
pub const SAMPLE_ROWS: usize = 5;

/// Everything the information tab shows about one table: dimensions, a
/// short head preview, and per-column types with non-null counts.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSummary {
    pub name: String,
    pub shape: (usize, usize),
    pub cell_count: usize,
    pub headers: Vec<String>,
    pub columns: Vec<ColumnSummary>,
    /// First [`HEAD_ROWS`] rows as display strings; nulls render empty.
    pub head: Vec<Vec<String>>,
}

impl DatasetSummary {
    pub fn of(table: &DataTable) -> DatasetSummary {
        let head = table
            .head(HEAD_ROWS)
            .rows()
            .iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect();
        DatasetSummary {
            name: table.name().to_string(),
            shape: table.shape(),
            cell_count: table.cell_count(),
            headers: table.headers().to_vec(),
            columns: table.column_summaries(),
            head,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DType, Value};

    fn table() -> DataTable {
        let headers = vec!["Country/Region".to_string(), "TotalCases".to_string()];
        let rows = vec![
            vec![Value::parse("USA"), Value::parse("100")],
            vec![Value::parse("India"), Value::parse("")],
            vec![Value::parse("Brazil"), Value::parse("70")],
        ];
        DataTable::new("covid.csv", headers, rows)
    }

    #[test]
    fn summary_reports_shape_and_size() {
        let summary = DatasetSummary::of(&table());
        assert_eq!(summary.name, "covid.csv");
        assert_eq!(summary.shape, (3, 2));
        assert_eq!(summary.cell_count, 6);
    }

    #[test]
    fn head_is_clamped_and_stringly() {
        let summary = DatasetSummary::of(&table());
        assert_eq!(summary.head.len(), 3);
        assert_eq!(summary.head[0], ["USA", "100"]);
        // Nulls render as empty strings.
        assert_eq!(summary.head[1], ["India", ""]);
    }

    #[test]
    fn columns_carry_dtype_and_non_null_counts() {
        let summary = DatasetSummary::of(&table());
        assert_eq!(summary.columns.len(), 2);
        assert_eq!(summary.columns[0].dtype, DType::Text);
        assert_eq!(summary.columns[0].non_null, 3);
        assert_eq!(summary.columns[1].dtype, DType::Int);
        assert_eq!(summary.columns[1].non_null, 2);
    }

    #[test]
    fn empty_table_summarizes_without_panicking() {
        let table = DataTable::new("empty.csv", Vec::new(), Vec::new());
        let summary = DatasetSummary::of(&table);
        assert_eq!(summary.shape, (0, 0));
        assert!(summary.head.is_empty());
        assert!(summary.columns.is_empty());
    }
}
