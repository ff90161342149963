//! Console report over loaded tables.
//!
//! [`generate`] runs a whole [`ReportPlan`]: for each file it loads the table with
//! [`crate::ingestion::ingest_from_path`] and hands it to [`write_file_report`], which prints
//! the shape, the column inventory, the first rows, unique-value listings and (optionally) a
//! cost summary. Output goes to any [`Write`] sink so the binary can pass stdout and tests can
//! pass a `Vec<u8>`.
//!
//! Any failure stops the run; nothing after the failing section is written.

pub mod format;
pub mod plan;

use std::io::Write;

use tracing::{debug, info, info_span, warn};

use crate::error::{ReportError, ReportResult};
use crate::ingestion::{ingest_from_path, IngestionOptions};
use crate::processing::{reduce, unique, ReduceOp};
use crate::types::DataSet;

pub use format::{format_currency, render_cell, render_inline_list};
pub use plan::{CostSummary, FileReport, ListStyle, MissingColumnPolicy, ReportPlan, UniqueSection};

/// Number of sample rows printed per file.
pub const PREVIEW_ROWS: usize = 5;

const RULE_WIDTH: usize = 100;

fn rule(ch: char) -> String {
    ch.to_string().repeat(RULE_WIDTH)
}

/// Load every file of `plan` and write its report to `out`, in plan order.
pub fn generate<W: Write>(plan: &ReportPlan, options: &IngestionOptions, out: &mut W) -> ReportResult<()> {
    writeln!(out, "{}", rule('='))?;
    writeln!(out, "{}", plan.title)?;
    writeln!(out, "{}", rule('='))?;

    for (idx, file) in plan.files.iter().enumerate() {
        let _span = info_span!("file_report", path = %file.path.display()).entered();

        // Banner before loading: a load failure is reported right under its file's heading.
        let gap = if idx == 0 { "\n" } else { "\n\n" };
        writeln!(out, "{gap}{}", rule('='))?;
        writeln!(out, "{}", file.heading)?;
        writeln!(out, "{}", rule('='))?;
        out.flush()?;

        let dataset = ingest_from_path(&file.path, options).map_err(|source| ReportError::Load {
            path: file.path.display().to_string(),
            source,
        })?;
        info!(rows = dataset.row_count(), columns = dataset.column_count(), "loaded");

        write_file_report(&dataset, file, out)?;
    }

    out.flush()?;
    Ok(())
}

/// Write the body of one file's report (everything below its banner).
pub fn write_file_report<W: Write>(dataset: &DataSet, file: &FileReport, out: &mut W) -> ReportResult<()> {
    write_inventory(dataset, file, out)?;
    write_preview(dataset, file, out)?;
    write_unique_summary(dataset, file, out)?;
    if let Some(cost) = &file.cost_summary {
        write_cost_summary(dataset, cost, out)?;
    }
    Ok(())
}

fn write_inventory<W: Write>(dataset: &DataSet, file: &FileReport, out: &mut W) -> ReportResult<()> {
    let (rows, cols) = dataset.shape();
    writeln!(out)?;
    writeln!(out, "Shape: {rows} rows x {cols} columns")?;

    writeln!(out)?;
    writeln!(out, "Column Names ({cols} total):")?;
    for (i, name) in dataset.schema.field_names().enumerate() {
        writeln!(out, "  {}. {name}", i + 1)?;
    }

    if file.list_key_columns {
        writeln!(out)?;
        writeln!(out, "Key Column Names:")?;
        for col in file.preview_columns.iter().filter(|c| dataset.has_column(c)) {
            writeln!(out, "  - {col}")?;
        }
    }
    Ok(())
}

fn write_preview<W: Write>(dataset: &DataSet, file: &FileReport, out: &mut W) -> ReportResult<()> {
    let present: Vec<(&str, usize)> = file
        .preview_columns
        .iter()
        .filter_map(|c| match dataset.schema.index_of(c) {
            Some(idx) => Some((c.as_str(), idx)),
            None => {
                warn!(column = %c, "preview column not in table; skipped");
                None
            }
        })
        .collect();

    writeln!(out)?;
    writeln!(out)?;
    writeln!(out, "{}", file.preview_title)?;
    writeln!(out, "{}", rule('-'))?;

    for (row_idx, row) in dataset.head(PREVIEW_ROWS).iter().enumerate() {
        writeln!(out)?;
        writeln!(out, "Row {row_idx}:")?;
        for &(name, col_idx) in &present {
            let cell = row.get(col_idx).map(|v| render_cell(v, &file.null_label));
            writeln!(out, "  {name}: {}", cell.as_deref().unwrap_or(&file.null_label))?;
        }
    }
    Ok(())
}

fn write_unique_summary<W: Write>(dataset: &DataSet, file: &FileReport, out: &mut W) -> ReportResult<()> {
    writeln!(out)?;
    writeln!(out)?;
    writeln!(out, "Unique Values Summary:")?;
    writeln!(out, "{}", rule('-'))?;

    let mut first = true;
    for section in &file.unique_sections {
        let values = match unique(dataset, &section.column, section.order) {
            Some(values) => values,
            None if file.missing_columns == MissingColumnPolicy::Skip => {
                warn!(column = %section.column, "unique listing column not in table; skipped");
                continue;
            }
            None => return Err(missing_column(dataset, &section.column)),
        };
        debug!(column = %section.column, distinct = values.len(), "unique listing");

        if !first {
            writeln!(out)?;
        }
        first = false;

        match section.style {
            ListStyle::Inline => writeln!(
                out,
                "Unique {} ({}): {}",
                section.label,
                values.len(),
                render_inline_list(&values)
            )?,
            ListStyle::Bulleted => {
                writeln!(out, "Unique {} ({}):", section.label, values.len())?;
                for v in &values {
                    writeln!(out, "  - {v}")?;
                }
            }
        }
    }
    Ok(())
}

fn write_cost_summary<W: Write>(dataset: &DataSet, cost: &CostSummary, out: &mut W) -> ReportResult<()> {
    // An empty sum is zero; an empty mean/min/max is NaN.
    let total = numeric_aggregate(dataset, &cost.total_column, ReduceOp::Sum)?.unwrap_or(0.0);
    let mean = numeric_aggregate(dataset, &cost.cost_column, ReduceOp::Mean)?.unwrap_or(f64::NAN);
    let min = numeric_aggregate(dataset, &cost.cost_column, ReduceOp::Min)?.unwrap_or(f64::NAN);
    let max = numeric_aggregate(dataset, &cost.cost_column, ReduceOp::Max)?.unwrap_or(f64::NAN);

    writeln!(out)?;
    writeln!(out)?;
    writeln!(out, "{}", cost.title)?;
    writeln!(out, "Total Cost: {}", format_currency(total))?;
    writeln!(out, "Average Cost per Resource: {}", format_currency(mean))?;
    writeln!(out, "Cost Range: {} - {}", format_currency(min), format_currency(max))?;
    Ok(())
}

/// `Ok(None)` when the column has no non-null values.
fn numeric_aggregate(dataset: &DataSet, column: &str, op: ReduceOp) -> ReportResult<Option<f64>> {
    let field = dataset
        .schema
        .field(column)
        .ok_or_else(|| missing_column(dataset, column))?;
    if !field.data_type.is_numeric() {
        return Err(ReportError::NonNumeric {
            column: column.to_string(),
            data_type: field.data_type,
        });
    }
    Ok(reduce(dataset, column, op).and_then(|v| v.as_f64()))
}

fn missing_column(dataset: &DataSet, column: &str) -> ReportError {
    ReportError::MissingColumn {
        column: column.to_string(),
        available: dataset.schema.field_names().map(str::to_owned).collect(),
    }
}
