//! Error types for loading typed matrices.

use thiserror::Error;

/// Runtime failures at the data boundary.
///
/// Typed operations never fail at runtime; these only come from loading
/// values whose count is not known at compile time.
#[derive(Debug, Error)]
pub enum MatrixError {
    /// Reading or writing the underlying file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV layer rejected a record.
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Wrong number of rows.
    #[error("expected {expected} rows, found {found}")]
    RowCount {
        /// Rows of the matrix type.
        expected: usize,
        /// Rows supplied.
        found: usize,
    },

    /// Wrong number of values in one row.
    #[error("row {row}: expected {expected} columns, found {found}")]
    ColumnCount {
        /// Zero-based row position.
        row: usize,
        /// Columns of the matrix type.
        expected: usize,
        /// Values supplied in that row.
        found: usize,
    },

    /// The source holds no records at all.
    #[error("source contains no data records")]
    Empty,
}

/// Result alias for data-boundary operations.
pub type Result<T> = std::result::Result<T, MatrixError>;
