//! Reduction operations for [`crate::types::DataSet`].

use crate::types::{DataSet, DataType, Value};

/// Built-in reduction operations over a single column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReduceOp {
    /// Count all rows (including nulls).
    Count,
    /// Sum numeric values, ignoring nulls.
    Sum,
    /// Arithmetic mean of numeric values, ignoring nulls.
    Mean,
    /// Minimum numeric value, ignoring nulls.
    Min,
    /// Maximum numeric value, ignoring nulls.
    Max,
}

/// Reduce a column using a built-in [`ReduceOp`].
///
/// - Returns `None` if `column` does not exist in the schema.
/// - For `Sum`/`Min`/`Max`, the result keeps the column type (`Int64` or `Float64`), except an
///   `Int64` sum that overflows, which is returned as a `Float64` total.
/// - `Mean` always yields `Float64`.
/// - Returns `Some(Value::Null)` if there are no non-null values, or the column is not numeric.
/// - For `Count`, always returns `Some(Value::Int64(row_count))`.
pub fn reduce(dataset: &DataSet, column: &str, op: ReduceOp) -> Option<Value> {
    let field = dataset.schema.field(column)?;
    let values = dataset.column_values(column)?;

    if op == ReduceOp::Count {
        return Some(Value::Int64(dataset.row_count() as i64));
    }

    Some(match field.data_type {
        DataType::Int64 => reduce_int(values.filter_map(|v| match v {
            Value::Int64(i) => Some(*i),
            _ => None,
        }), op),
        DataType::Float64 => reduce_float(values.filter_map(|v| match v {
            Value::Float64(f) => Some(*f),
            _ => None,
        }), op),
        DataType::Bool | DataType::Utf8 => Value::Null,
    })
}

fn reduce_int(values: impl Iterator<Item = i64>, op: ReduceOp) -> Value {
    let mut acc: Option<i64> = None;
    let mut overflowed = false;
    let mut n: usize = 0;
    let mut total: f64 = 0.0;
    for v in values {
        n += 1;
        total += v as f64;
        acc = match (op, acc) {
            (ReduceOp::Sum, Some(a)) => match a.checked_add(v) {
                Some(sum) => Some(sum),
                None => {
                    overflowed = true;
                    Some(a)
                }
            },
            (ReduceOp::Min, Some(a)) => Some(a.min(v)),
            (ReduceOp::Max, Some(a)) => Some(a.max(v)),
            (_, _) => Some(acc.unwrap_or(v)),
        };
    }
    match op {
        ReduceOp::Mean if n > 0 => Value::Float64(total / n as f64),
        ReduceOp::Mean => Value::Null,
        ReduceOp::Sum if overflowed => Value::Float64(total),
        _ => acc.map(Value::Int64).unwrap_or(Value::Null),
    }
}

fn reduce_float(values: impl Iterator<Item = f64>, op: ReduceOp) -> Value {
    let mut acc: Option<f64> = None;
    let mut n: usize = 0;
    for v in values {
        n += 1;
        acc = Some(match (op, acc) {
            (ReduceOp::Sum | ReduceOp::Mean, Some(a)) => a + v,
            (ReduceOp::Min, Some(a)) => a.min(v),
            (ReduceOp::Max, Some(a)) => a.max(v),
            (_, _) => acc.unwrap_or(v),
        });
    }
    match (op, acc) {
        (ReduceOp::Mean, Some(total)) => Value::Float64(total / n as f64),
        (_, Some(v)) => Value::Float64(v),
        (_, None) => Value::Null,
    }
}
