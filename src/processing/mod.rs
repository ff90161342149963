//! In-memory column aggregates.
//!
//! The processing layer operates on [`crate::types::DataSet`] values produced by ingestion.
//!
//! - [`reduce()`]: count/sum/mean/min/max over one column
//! - [`unique()`]: distinct non-null values of one column, first-seen or sorted
//!
//! ## Example
//!
//! ```rust
//! use resource_planning_report::processing::{reduce, unique, ReduceOp, UniqueOrder};
//! use resource_planning_report::types::{DataSet, DataType, Field, Schema, Value};
//!
//! let schema = Schema::new(vec![
//!     Field::new("Vendor", DataType::Utf8),
//!     Field::new("Cost", DataType::Float64),
//! ]);
//! let ds = DataSet::new(
//!     schema,
//!     vec![
//!         vec![Value::Utf8("Initech".into()), Value::Float64(100.0)],
//!         vec![Value::Utf8("Acme".into()), Value::Float64(300.0)],
//!         vec![Value::Utf8("Initech".into()), Value::Null],
//!     ],
//! );
//!
//! let vendors = unique(&ds, "Vendor", UniqueOrder::Sorted).unwrap();
//! assert_eq!(vendors, vec![Value::Utf8("Acme".into()), Value::Utf8("Initech".into())]);
//!
//! // Nulls are ignored.
//! assert_eq!(reduce(&ds, "Cost", ReduceOp::Mean), Some(Value::Float64(200.0)));
//! ```

pub mod reduce;
pub mod unique;

pub use reduce::{reduce, ReduceOp};
pub use unique::{compare_values, unique, UniqueOrder};
