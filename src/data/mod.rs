//! Data layer: CSV loading and the immutable in-memory table model.

pub mod geo;
pub mod load;
pub mod table;

pub use load::{Datasets, LoadError};
pub use table::{ColumnSummary, DType, DataTable, MissingColumn, Value};
