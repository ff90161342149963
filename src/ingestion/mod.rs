//! Ingestion entrypoints and implementations.
//!
//! Most callers should use [`ingest_from_path`] (from [`unified`]) which:
//!
//! - auto-detects format by file extension (or you can override via [`IngestionOptions`])
//! - loads the file into an in-memory [`crate::types::DataSet`], inferring column types
//! - optionally reports success/failure/alerts to an [`IngestionObserver`]
//!
//! Format-specific functions are also available under [`csv`] and (with the `excel` feature)
//! `excel`.

pub mod csv;
#[cfg(feature = "excel")]
pub mod excel;
pub mod infer;
pub mod observability;
pub mod unified;

pub use observability::{IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats, TracingObserver};
pub use unified::{ingest_from_path, ExcelSheetSelection, IngestionFormat, IngestionOptions};
