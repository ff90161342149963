//! `resource-planning-report` prints an exploratory console report over resource-planning
//! workbooks: table shape, column inventory, the first rows, unique-value listings and cost
//! aggregates.
//!
//! The pipeline has two stages:
//!
//! 1. **Load**: [`ingestion::ingest_from_path`] reads the first sheet of a workbook (or a CSV
//!    file) into an in-memory [`types::DataSet`], inferring one [`types::DataType`] per column.
//! 2. **Report**: [`report::generate`] walks each loaded table according to a
//!    [`report::ReportPlan`] and writes plain text to any `std::io::Write` sink.
//!
//! **File formats (auto-detected by extension):**
//!
//! - **Excel/workbooks** (Cargo feature `excel`, on by default): `.xlsx`, `.xls`, `.xlsm`,
//!   `.xlsb`, `.ods`
//! - **CSV**: `.csv`
//!
//! Empty cells and empty strings load as [`types::Value::Null`].
//!
//! ## Example: report over an in-memory table
//!
//! ```rust
//! use resource_planning_report::report::{write_file_report, ReportPlan};
//! use resource_planning_report::types::{DataSet, DataType, Field, Schema, Value};
//!
//! let schema = Schema::new(vec![
//!     Field::new("Resource Name", DataType::Utf8),
//!     Field::new("Project", DataType::Utf8),
//!     Field::new("Vendor", DataType::Utf8),
//!     Field::new("Role", DataType::Utf8),
//!     Field::new("Functional team", DataType::Utf8),
//!     Field::new("Location", DataType::Utf8),
//!     Field::new("Cost", DataType::Int64),
//!     Field::new("Total Cost", DataType::Int64),
//! ]);
//! let row = |cost: i64, total: i64| {
//!     let mut r: Vec<Value> = ["Ana", "Atlas", "Acme", "QA", "CRM", "Pune"]
//!         .iter()
//!         .map(|s| Value::Utf8(s.to_string()))
//!         .collect();
//!     r.push(Value::Int64(cost));
//!     r.push(Value::Int64(total));
//!     r
//! };
//! let ds = DataSet::new(schema, vec![row(100, 150), row(200, 250), row(300, 350)]);
//!
//! let plan = ReportPlan::resource_planning();
//! let mut out = Vec::new();
//! write_file_report(&ds, &plan.files[1], &mut out).unwrap();
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.contains("Total Cost: $750.00"));
//! assert!(text.contains("Cost Range: $100.00 - $300.00"));
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: unified loading entrypoint and format-specific loaders
//! - [`types`]: schema + in-memory dataset types
//! - [`processing`]: column aggregates (reduce, unique)
//! - [`report`]: report plans and text rendering
//! - [`error`]: error types

pub mod error;
pub mod ingestion;
pub mod processing;
pub mod report;
pub mod types;

pub use error::{IngestionError, IngestionResult, ReportError, ReportResult};
