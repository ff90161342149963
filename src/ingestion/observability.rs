//! Load outcome reporting.
//!
//! [`super::ingest_from_path`] tells an optional [`IngestionObserver`] how each table load went.
//! The report binary plugs in [`TracingObserver`] so every workbook load leaves a structured
//! log line on stderr; tests plug in recorders.

use std::error::Error as StdError;
use std::path::PathBuf;

use tracing::{error, info, warn};

use crate::error::IngestionError;

use super::unified::IngestionFormat;

/// How bad a failed load is. Ordered, so it can serve as an alert threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IngestionSeverity {
    /// The file was reachable but its content could not be turned into a table.
    Error,
    /// The file could not be read at all.
    Critical,
}

impl IngestionSeverity {
    /// Classify a load error: anything rooted in I/O is critical.
    pub fn of(err: &IngestionError) -> Self {
        match err {
            IngestionError::Io(_) => Self::Critical,
            IngestionError::Csv(e) if matches!(e.kind(), ::csv::ErrorKind::Io(_)) => Self::Critical,
            // calamine wraps I/O failures inside per-format errors.
            #[cfg(feature = "excel")]
            IngestionError::Excel(e) if chain_has_io(e) => Self::Critical,
            _ => Self::Error,
        }
    }
}

#[cfg_attr(not(feature = "excel"), allow(dead_code))]
fn chain_has_io(e: &(dyn StdError + 'static)) -> bool {
    let mut cur = Some(e);
    while let Some(err) = cur {
        if err.is::<std::io::Error>() {
            return true;
        }
        cur = err.source();
    }
    false
}

/// Which file was loaded, and how.
#[derive(Debug, Clone)]
pub struct IngestionContext {
    pub path: PathBuf,
    pub format: IngestionFormat,
    /// Sheet requested by name; `None` means the first sheet (or a CSV file).
    pub sheet: Option<String>,
}

/// Table dimensions after a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestionStats {
    pub rows: usize,
    pub columns: usize,
}

/// Receives load outcomes. All methods default to no-ops.
pub trait IngestionObserver: Send + Sync {
    fn on_success(&self, _ctx: &IngestionContext, _stats: IngestionStats) {}

    fn on_failure(&self, _ctx: &IngestionContext, _severity: IngestionSeverity, _error: &IngestionError) {}

    /// Called after [`Self::on_failure`] when the severity reaches the configured threshold.
    fn on_alert(&self, _ctx: &IngestionContext, _severity: IngestionSeverity, _error: &IngestionError) {}
}

/// Logs load outcomes through `tracing`: success at `info`, failure at `warn`, alerts at `error`.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl IngestionObserver for TracingObserver {
    fn on_success(&self, ctx: &IngestionContext, stats: IngestionStats) {
        info!(
            path = %ctx.path.display(),
            format = ?ctx.format,
            sheet = ctx.sheet.as_deref().unwrap_or("<first>"),
            rows = stats.rows,
            columns = stats.columns,
            "loaded table"
        );
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &IngestionError) {
        warn!(path = %ctx.path.display(), format = ?ctx.format, ?severity, %error, "load failed");
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &IngestionError) {
        error!(path = %ctx.path.display(), ?severity, %error, "input file unreadable");
    }
}
