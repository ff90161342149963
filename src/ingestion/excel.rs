#![cfg(feature = "excel")]

use std::fs::File;
use std::path::Path;

use calamine::{open_workbook_auto, Data, DataType as _, Range, Reader};
use chrono::{Datelike, Timelike};

use crate::error::{IngestionError, IngestionResult};
use crate::types::DataSet;

use super::infer::{build_dataset, Cell};

/// Ingest one sheet of an Excel document (`.xlsx`, `.xls`, `.ods`, etc.) into a `DataSet`.
///
/// Behavior:
/// - Picks `sheet_name` if provided; otherwise uses the first sheet in the workbook
/// - Detects the first non-empty row as the header row
/// - Reads remaining rows and infers one type per column
pub fn ingest_excel_from_path(path: impl AsRef<Path>, sheet_name: Option<&str>) -> IngestionResult<DataSet> {
    let path = path.as_ref();

    // Surface missing/unreadable files as plain I/O errors before the format sniffing runs.
    File::open(path)?;
    let mut workbook = open_workbook_auto(path)?;

    let sheet = match sheet_name {
        Some(name) => name.to_string(),
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| IngestionError::SchemaMismatch {
                message: "workbook has no sheets".to_string(),
            })?,
    };

    let range = workbook.worksheet_range(&sheet)?;
    ingest_sheet_range(&range).map_err(|e| wrap_schema_err_with_sheet(&sheet, e))
}

fn ingest_sheet_range(range: &Range<Data>) -> IngestionResult<DataSet> {
    let mut rows = range.rows();

    let header: Vec<String> = rows
        .by_ref()
        .find(|row| row.iter().any(|c| !matches!(c, Data::Empty)))
        .map(|row| row.iter().map(cell_to_header_string).collect())
        .ok_or_else(|| IngestionError::SchemaMismatch {
            message: "sheet has no non-empty rows (no header row found)".to_string(),
        })?;

    let body: Vec<Vec<Cell>> = rows.map(|row| row.iter().map(convert_cell).collect()).collect();

    Ok(build_dataset(&header, body))
}

fn wrap_schema_err_with_sheet(sheet: &str, err: IngestionError) -> IngestionError {
    match err {
        IngestionError::SchemaMismatch { message } => IngestionError::SchemaMismatch {
            message: format!("sheet '{sheet}': {message}"),
        },
        other => other,
    }
}

fn cell_to_header_string(c: &Data) -> String {
    match c {
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Data::Bool(true) => "True".to_string(),
        Data::Bool(false) => "False".to_string(),
        Data::DateTime(_) => format_datetime(c),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(e) => format!("{e:?}"),
        Data::Empty => "".to_string(),
    }
}

fn convert_cell(c: &Data) -> Cell {
    match c {
        Data::Empty => Cell::Empty,
        Data::Int(i) => Cell::Int(*i),
        Data::Float(f) => Cell::Float(*f),
        Data::Bool(b) => Cell::Bool(*b),
        Data::String(s) => Cell::text(s.as_str()),
        Data::DateTime(_) => Cell::Text(format_datetime(c)),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::text(s.as_str()),
        // Formula errors (#N/A, #DIV/0!, ...) read as missing values.
        Data::Error(_) => Cell::Empty,
    }
}

fn format_datetime(c: &Data) -> String {
    match c.as_datetime() {
        Some(dt) => {
            let (d, t) = (dt.date(), dt.time());
            format!(
                "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
                d.year(),
                d.month(),
                d.day(),
                t.hour(),
                t.minute(),
                t.second()
            )
        }
        None => c.to_string(),
    }
}
