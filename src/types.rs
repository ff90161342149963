//! Core data model types.
//!
//! Loaders materialize a workbook (or CSV file) into an in-memory [`DataSet`]: an ordered list
//! of rows whose cells line up with the [`Schema`] fields. Column types are inferred at load
//! time; see [`crate::ingestion::infer`].

use std::fmt;

/// Logical data type for a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    /// 64-bit signed integer.
    Int64,
    /// 64-bit floating point number.
    Float64,
    /// Boolean.
    Bool,
    /// UTF-8 string.
    Utf8,
}

impl DataType {
    /// Whether values of this type can be summed/averaged.
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Int64 | Self::Float64)
    }
}

/// A single named, typed field in a [`Schema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field/column name.
    pub name: String,
    /// Field data type.
    pub data_type: DataType,
}

impl Field {
    /// Create a new field.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

/// Ordered list of fields describing the columns of a [`DataSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Ordered list of fields.
    pub fields: Vec<Field>,
}

impl Schema {
    /// Create a new schema from fields.
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Iterate field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Returns the index of a field by name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Returns a field by name, if present.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A single typed value in a [`DataSet`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing/empty value.
    Null,
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// Boolean.
    Bool(bool),
    /// UTF-8 string.
    Utf8(String),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Numeric view of the value; `None` for nulls, booleans and strings.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int64(v) => Some(*v as f64),
            Self::Float64(v) => Some(*v),
            _ => None,
        }
    }
}

/// Renders the value the way a dataframe prints a scalar: whole floats keep a trailing `.0`,
/// NaN prints as `nan` and null prints as `null`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Int64(v) => write!(f, "{v}"),
            Self::Float64(v) => fmt_float(f, *v),
            Self::Bool(true) => f.write_str("True"),
            Self::Bool(false) => f.write_str("False"),
            Self::Utf8(s) => f.write_str(s),
        }
    }
}

fn fmt_float(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    if v.is_nan() {
        f.write_str("nan")
    } else if v.is_infinite() {
        f.write_str(if v > 0.0 { "inf" } else { "-inf" })
    } else if v.fract() == 0.0 && v.abs() < 1e16 {
        write!(f, "{v:.1}")
    } else {
        write!(f, "{v}")
    }
}

/// In-memory tabular dataset.
///
/// Rows are stored as `Vec<Vec<Value>>` in the same order as the [`Schema`] fields.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSet {
    /// Schema describing row shape.
    pub schema: Schema,
    /// Row-major value storage.
    pub rows: Vec<Vec<Value>>,
}

impl DataSet {
    /// Create a dataset from schema and rows.
    pub fn new(schema: Schema, rows: Vec<Vec<Value>>) -> Self {
        Self { schema, rows }
    }

    /// Number of rows in the dataset.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns in the dataset.
    pub fn column_count(&self) -> usize {
        self.schema.fields.len()
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.row_count(), self.column_count())
    }

    /// Whether a column with this name exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.schema.index_of(name).is_some()
    }

    /// Iterate the cells of one column, top to bottom.
    ///
    /// Returns `None` if the column does not exist. Short rows yield [`Value::Null`].
    pub fn column_values<'a>(&'a self, name: &str) -> Option<impl Iterator<Item = &'a Value> + use<'a>> {
        let idx = self.schema.index_of(name)?;
        Some(
            self.rows
                .iter()
                .map(move |row| row.get(idx).unwrap_or(&Value::Null)),
        )
    }

    /// The first `n` rows (fewer if the dataset is shorter).
    pub fn head(&self, n: usize) -> &[Vec<Value>] {
        &self.rows[..n.min(self.rows.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DataSet {
        let schema = Schema::new(vec![
            Field::new("Name", DataType::Utf8),
            Field::new("Cost", DataType::Float64),
        ]);
        DataSet::new(
            schema,
            vec![
                vec![Value::Utf8("Ada".to_string()), Value::Float64(100.0)],
                vec![Value::Utf8("Grace".to_string()), Value::Null],
                vec![Value::Utf8("Linus".to_string())],
            ],
        )
    }

    #[test]
    fn shape_reports_rows_and_columns() {
        assert_eq!(sample().shape(), (3, 2));
    }

    #[test]
    fn column_values_pads_short_rows_with_null() {
        let ds = sample();
        let costs: Vec<&Value> = ds.column_values("Cost").unwrap().collect();
        assert_eq!(costs, vec![&Value::Float64(100.0), &Value::Null, &Value::Null]);
        assert!(ds.column_values("Missing").is_none());
    }

    #[test]
    fn head_is_clamped_to_row_count() {
        let ds = sample();
        assert_eq!(ds.head(5).len(), 3);
        assert_eq!(ds.head(2).len(), 2);
    }

    #[test]
    fn display_matches_dataframe_scalars() {
        assert_eq!(Value::Float64(1500.0).to_string(), "1500.0");
        assert_eq!(Value::Float64(12.5).to_string(), "12.5");
        assert_eq!(Value::Float64(f64::NAN).to_string(), "nan");
        assert_eq!(Value::Int64(42).to_string(), "42");
        assert_eq!(Value::Bool(true).to_string(), "True");
        assert_eq!(Value::Null.to_string(), "null");
    }
}
