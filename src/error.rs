use thiserror::Error;

/// Convenience result type for ingestion operations.
pub type IngestionResult<T> = Result<T, IngestionError>;

/// Convenience result type for report generation.
pub type ReportResult<T> = Result<T, ReportError>;

/// Error type returned by ingestion functions.
///
/// This is a single error enum shared across CSV and (optional) Excel ingestion.
#[derive(Debug, Error)]
pub enum IngestionError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "excel")]
    /// Excel ingestion error (corrupt or non-spreadsheet content).
    #[error("excel error: {0}")]
    Excel(#[from] calamine::Error),

    /// CSV ingestion error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The path does not name a format we can read.
    #[error("unsupported format: {message}")]
    UnsupportedFormat { message: String },

    /// The input has no usable table (no sheets, no header row, ...).
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },
}

/// Error type returned while rendering a report over a loaded [`crate::types::DataSet`].
#[derive(Debug, Error)]
pub enum ReportError {
    /// Loading one of the report's input files failed.
    #[error("failed to load '{path}': {source}")]
    Load {
        path: String,
        #[source]
        source: IngestionError,
    },

    /// Writing the report to its sink failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A column the report requires is not present in the table.
    #[error("missing column '{column}'. columns={available:?}")]
    MissingColumn {
        column: String,
        available: Vec<String>,
    },

    /// An aggregated column holds non-numeric data.
    #[error("column '{column}' is not numeric (type {data_type:?})")]
    NonNumeric {
        column: String,
        data_type: crate::types::DataType,
    },
}
