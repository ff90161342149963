//! Distinct-value listings for a single column.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::types::{DataSet, Value};

/// Order of the values returned by [`unique`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UniqueOrder {
    /// Order of first appearance, top to bottom.
    #[default]
    FirstSeen,
    /// Ascending: booleans, then numbers, then text (text compares lexically).
    Sorted,
}

/// Hashable identity of a non-null value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum ValueKey {
    Int(i64),
    Float(u64),
    Bool(bool),
    Text(String),
}

fn key_of(v: &Value) -> Option<ValueKey> {
    match v {
        Value::Null => None,
        Value::Int64(i) => Some(ValueKey::Int(*i)),
        // -0.0 and 0.0 are the same value.
        Value::Float64(f) if *f == 0.0 => Some(ValueKey::Float(0.0f64.to_bits())),
        Value::Float64(f) => Some(ValueKey::Float(f.to_bits())),
        Value::Bool(b) => Some(ValueKey::Bool(*b)),
        Value::Utf8(s) => Some(ValueKey::Text(s.clone())),
    }
}

/// Distinct non-null values of `column`.
///
/// Returns `None` if the column does not exist.
pub fn unique(dataset: &DataSet, column: &str, order: UniqueOrder) -> Option<Vec<Value>> {
    let mut seen: HashSet<ValueKey> = HashSet::new();
    let mut out: Vec<Value> = dataset
        .column_values(column)?
        .filter(|v| key_of(v).is_some_and(|k| seen.insert(k)))
        .cloned()
        .collect();

    if order == UniqueOrder::Sorted {
        out.sort_by(compare_values);
    }
    Some(out)
}

/// Total order used for sorted listings.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    fn rank(v: &Value) -> u8 {
        match v {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Int64(_) | Value::Float64(_) => 2,
            Value::Utf8(_) => 3,
        }
    }

    match (a, b) {
        (Value::Utf8(x), Value::Utf8(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Int64(x), Value::Int64(y)) => x.cmp(y),
        _ => match (a.as_f64(), b.as_f64()) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            _ => rank(a).cmp(&rank(b)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DataType, Field, Schema};

    fn text(s: &str) -> Value {
        Value::Utf8(s.to_string())
    }

    fn vendors() -> DataSet {
        let schema = Schema::new(vec![
            Field::new("Vendor", DataType::Utf8),
            Field::new("Cost", DataType::Float64),
        ]);
        DataSet::new(
            schema,
            vec![
                vec![text("Initech"), Value::Float64(300.0)],
                vec![text("Acme"), Value::Null],
                vec![Value::Null, Value::Float64(100.0)],
                vec![text("Initech"), Value::Float64(300.0)],
                vec![text("Globex"), Value::Float64(-0.0)],
                vec![text("Acme"), Value::Float64(0.0)],
            ],
        )
    }

    #[test]
    fn first_seen_order_drops_nulls_and_duplicates() {
        let got = unique(&vendors(), "Vendor", UniqueOrder::FirstSeen).unwrap();
        assert_eq!(got, vec![text("Initech"), text("Acme"), text("Globex")]);
    }

    #[test]
    fn sorted_order_is_ascending_lexical() {
        let got = unique(&vendors(), "Vendor", UniqueOrder::Sorted).unwrap();
        assert_eq!(got, vec![text("Acme"), text("Globex"), text("Initech")]);
    }

    #[test]
    fn numeric_values_dedupe_and_sort_numerically() {
        let got = unique(&vendors(), "Cost", UniqueOrder::Sorted).unwrap();
        assert_eq!(
            got,
            vec![Value::Float64(-0.0), Value::Float64(100.0), Value::Float64(300.0)]
        );
    }

    #[test]
    fn missing_column_is_none() {
        assert!(unique(&vendors(), "Role", UniqueOrder::Sorted).is_none());
    }

    #[test]
    fn uppercase_sorts_before_lowercase() {
        let mut values = vec![text("bravo"), text("Charlie"), text("alpha")];
        values.sort_by(compare_values);
        assert_eq!(values, vec![text("Charlie"), text("alpha"), text("bravo")]);
    }
}
