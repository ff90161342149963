//! Text formatting helpers for report lines.

use crate::types::Value;

/// `$1,234,567.89`. Negative amounts keep the sign after the dollar: `$-12.00`.
///
/// NaN renders as `$nan` (the mean of an all-null column).
pub fn format_currency(amount: f64) -> String {
    format!("${}", group_thousands(amount))
}

/// Two decimals with `,` between thousands groups.
pub fn group_thousands(amount: f64) -> String {
    if amount.is_nan() {
        return "nan".to_string();
    }
    if amount.is_infinite() {
        return if amount > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 4);
    if amount.is_sign_negative() {
        grouped.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped.push('.');
    grouped.push_str(frac_part);
    grouped
}

/// Render one cell for a row preview, substituting `null_label` for missing values.
pub fn render_cell(value: &Value, null_label: &str) -> String {
    match value {
        Value::Null => null_label.to_string(),
        Value::Float64(f) if f.is_nan() => null_label.to_string(),
        other => other.to_string(),
    }
}

/// Render values as a bracketed list: `['Acme', 'Globex', 42]`.
pub fn render_inline_list(values: &[Value]) -> String {
    let items: Vec<String> = values
        .iter()
        .map(|v| match v {
            Value::Utf8(s) => quote(s),
            other => other.to_string(),
        })
        .collect();
    format!("[{}]", items.join(", "))
}

/// Quote text the way a Python list repr does: single quotes unless the text holds `'` and no
/// `"`, with backslashes, the active quote and control characters escaped.
fn quote(s: &str) -> String {
    let delim = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(delim);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == delim => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() && (c as u32) <= 0xff => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push(delim);
    out
}
