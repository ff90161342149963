//! Column type inference shared by the CSV and Excel loaders.
//!
//! Loaders turn their native cells into [`Cell`]s and hand the header row plus body rows to
//! [`build_dataset`], which normalizes header names and picks one [`DataType`] per column.
//!
//! Rules, applied per column over its non-null cells:
//!
//! - all integral numbers and no nulls → [`DataType::Int64`]
//! - all numbers → [`DataType::Float64`] (integers widened; nulls stay null)
//! - all booleans → [`DataType::Bool`]
//! - no non-null cells at all → [`DataType::Float64`]
//! - anything else → [`DataType::Utf8`], each cell rendered as text
//!
//! Text cells are kept exactly as written. A text cell equal to one of [`NULL_MARKERS`] is null.

use std::collections::HashMap;

use crate::types::{DataSet, DataType, Field, Schema, Value};

/// Text values read as null wherever they appear in a body cell.
pub const NULL_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Largest magnitude (2^63, exclusive) an integral float may have and still load as `Int64`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Loader-neutral cell representation.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl Cell {
    /// Wrap a text value, mapping null markers to [`Cell::Empty`].
    pub fn text(s: impl Into<String>) -> Self {
        let s = s.into();
        if is_null_marker(&s) {
            Self::Empty
        } else {
            Self::Text(s)
        }
    }

    /// Parse a raw text field (CSV) into the narrowest cell kind.
    ///
    /// Numbers and booleans may carry surrounding whitespace; text is kept verbatim.
    pub fn parse(raw: &str) -> Self {
        if is_null_marker(raw) {
            return Self::Empty;
        }
        let trimmed = raw.trim();
        if let Ok(i) = trimmed.parse::<i64>() {
            return Self::Int(i);
        }
        if let Ok(f) = trimmed.parse::<f64>() {
            return Self::Float(f);
        }
        match trimmed {
            "True" | "true" | "TRUE" => Self::Bool(true),
            "False" | "false" | "FALSE" => Self::Bool(false),
            _ => Self::Text(raw.to_owned()),
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(s) => is_null_marker(s),
            _ => false,
        }
    }

    fn to_text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Int(i) => i.to_string(),
            Self::Float(f) => Value::Float64(*f).to_string(),
            Self::Bool(b) => Value::Bool(*b).to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

fn is_null_marker(s: &str) -> bool {
    NULL_MARKERS.contains(&s)
}

/// Normalize raw header cells into unique column names.
///
/// Blank headers become `Unnamed: <index>`; repeated names get `.1`, `.2`, ... suffixes.
pub fn normalize_headers(raw: &[String]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut out = Vec::with_capacity(raw.len());
    for (idx, h) in raw.iter().enumerate() {
        let base = match h.trim() {
            "" => format!("Unnamed: {idx}"),
            name => name.to_string(),
        };
        let mut name = base.clone();
        while let Some(count) = seen.get_mut(&name) {
            *count += 1;
            name = format!("{base}.{count}");
        }
        seen.insert(name.clone(), 0);
        out.push(name);
    }
    out
}

/// Infer the type of one column and convert its cells.
pub fn infer_column(cells: &[Cell]) -> (DataType, Vec<Value>) {
    let mut has_null = false;
    let mut all_int = true;
    let mut all_numeric = true;
    let mut all_bool = true;
    let mut any_value = false;

    for c in cells {
        if c.is_empty() {
            has_null = true;
            continue;
        }
        any_value = true;
        match c {
            Cell::Int(_) => all_bool = false,
            Cell::Float(f) => {
                all_bool = false;
                if f.fract() != 0.0 || !f.is_finite() || f.abs() >= I64_BOUND {
                    all_int = false;
                }
            }
            Cell::Bool(_) => {
                all_int = false;
                all_numeric = false;
            }
            Cell::Text(_) | Cell::Empty => {
                all_int = false;
                all_numeric = false;
                all_bool = false;
            }
        }
    }

    let data_type = if !any_value {
        DataType::Float64
    } else if all_numeric && all_int && !has_null {
        DataType::Int64
    } else if all_numeric {
        DataType::Float64
    } else if all_bool {
        DataType::Bool
    } else {
        DataType::Utf8
    };

    let values = cells.iter().map(|c| convert(c, data_type)).collect();
    (data_type, values)
}

fn convert(c: &Cell, data_type: DataType) -> Value {
    if c.is_empty() {
        return Value::Null;
    }
    match (data_type, c) {
        (DataType::Int64, Cell::Int(i)) => Value::Int64(*i),
        (DataType::Int64, Cell::Float(f)) => Value::Int64(*f as i64),
        (DataType::Float64, Cell::Int(i)) => Value::Float64(*i as f64),
        (DataType::Float64, Cell::Float(f)) => Value::Float64(*f),
        (DataType::Bool, Cell::Bool(b)) => Value::Bool(*b),
        _ => Value::Utf8(c.to_text()),
    }
}

/// Build a [`DataSet`] from a raw header row and body rows.
///
/// The table is as wide as the widest of the header and body rows; missing cells are null.
pub fn build_dataset(raw_headers: &[String], body: Vec<Vec<Cell>>) -> DataSet {
    let width = body
        .iter()
        .map(Vec::len)
        .max()
        .unwrap_or(0)
        .max(raw_headers.len());

    let mut padded_headers = raw_headers.to_vec();
    padded_headers.resize(width, String::new());
    let names = normalize_headers(&padded_headers);

    let mut fields = Vec::with_capacity(width);
    let mut columns: Vec<Vec<Value>> = Vec::with_capacity(width);
    for (col_idx, name) in names.into_iter().enumerate() {
        let cells: Vec<Cell> = body
            .iter()
            .map(|row| row.get(col_idx).cloned().unwrap_or(Cell::Empty))
            .collect();
        let (data_type, values) = infer_column(&cells);
        fields.push(Field::new(name, data_type));
        columns.push(values);
    }

    let rows = (0..body.len())
        .map(|r| columns.iter().map(|col| col[r].clone()).collect())
        .collect();

    DataSet::new(Schema::new(fields), rows)
}
