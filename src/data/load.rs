//! Dataset loading.
//!
//! The three CSV files are read from one data directory under their fixed
//! names. `Datasets::load` runs once in `main`; everything downstream
//! borrows the loaded tables.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::info;

use super::table::{DataTable, Value};

/// Per-country summary table.
pub const OVERALL_FILE: &str = "covid.csv";
/// Per-(country, date) time-series table.
pub const TIME_SERIES_FILE: &str = "covid_grouped.csv";
/// Condition entries for the word clouds.
pub const CONDITION_FILE: &str = "coviddeath.csv";

/// Columns of the overall table that are dropped right after load and never
/// used again.
pub const VOLATILE_COLUMNS: [&str; 3] = ["NewCases", "NewDeaths", "NewRecovered"];

/// Error raised while loading a dataset file. Fatal: the binary prints the
/// diagnostic and exits before any rendering starts.
#[derive(Debug, Clone)]
pub enum LoadError {
    /// File missing or unreadable.
    Io { path: PathBuf, message: String },
    /// Malformed CSV content (ragged rows, broken quoting).
    Parse { path: PathBuf, message: String },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, message } => {
                write!(f, "cannot read '{}': {}", path.display(), message)
            }
            LoadError::Parse { path, message } => {
                write!(f, "cannot parse '{}': {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for LoadError {}

impl LoadError {
    fn from_csv(path: &Path, err: csv::Error) -> LoadError {
        let path = path.to_path_buf();
        match err.kind() {
            csv::ErrorKind::Io(io) => LoadError::Io {
                path,
                message: io.to_string(),
            },
            _ => LoadError::Parse {
                path,
                message: err.to_string(),
            },
        }
    }
}

/// The three datasets, loaded once per process.
#[derive(Debug, Clone, PartialEq)]
pub struct Datasets {
    /// One row per country/region (`covid.csv`).
    pub overall: DataTable,
    /// One row per (country, date) pair (`covid_grouped.csv`).
    pub time_series: DataTable,
    /// One row per recorded condition entry (`coviddeath.csv`).
    pub conditions: DataTable,
}

impl Datasets {
    /// Reads all three tables from `dir`. Loading is deterministic: calling
    /// this twice over unchanged files yields identical tables.
    pub fn load(dir: &Path) -> Result<Datasets, LoadError> {
        let overall = read_table(&dir.join(OVERALL_FILE))?;
        let time_series = read_table(&dir.join(TIME_SERIES_FILE))?;
        let conditions = read_table(&dir.join(CONDITION_FILE))?;
        Ok(Datasets {
            overall,
            time_series,
            conditions,
        })
    }
}

/// Reads one CSV file into a [`DataTable`] named after the file.
pub fn read_table(path: &Path) -> Result<DataTable, LoadError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| LoadError::from_csv(path, e))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| LoadError::from_csv(path, e))?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| LoadError::from_csv(path, e))?;
        rows.push(record.iter().map(Value::parse).collect());
    }

    let table = DataTable::new(name, headers, rows);
    info!(
        "loaded {}: {} rows x {} columns",
        table.name(),
        table.row_count(),
        table.column_count()
    );
    Ok(table)
}
