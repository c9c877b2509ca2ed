use serde_json::Value;
use tracing::warn;

use crate::data::Record;
use crate::infer::ResolvedColumns;

/// The normalized unit: a category label paired with a finite value.
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
}

/// Map records to (label, value) pairs and drop rows whose Y value does not
/// normalize to a finite number. Row order is preserved; labels are never
/// deduplicated.
pub fn normalize_points(records: &[Record], columns: &ResolvedColumns) -> Vec<DataPoint> {
    let points: Vec<DataPoint> = records
        .iter()
        .filter_map(|row| {
            let value = row
                .get(&columns.y_field)
                .map(coerce_number)
                .unwrap_or(f64::NAN);
            if !value.is_finite() {
                return None;
            }
            let label = row.get(&columns.x_field).map(label_of).unwrap_or_default();
            Some(DataPoint { label, value })
        })
        .collect();

    let dropped = records.len() - points.len();
    if dropped > 0 {
        warn!(
            column = %columns.y_field,
            dropped,
            kept = points.len(),
            "dropped rows with non-numeric values"
        );
    }

    points
}

/// Coerce a raw Y value to a number, yielding NaN for anything that has no
/// usable numeric reading.
pub fn coerce_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => {
            // Strip currency symbols, thousands separators, and whitespace
            // before parsing ("$1,234.56" -> 1234.56).
            let clean: String = s
                .chars()
                .filter(|c| *c != '$' && *c != ',' && !c.is_whitespace())
                .collect();
            parse_leading_float(&clean)
        }
        _ => f64::NAN,
    }
}

/// Parse the longest valid leading decimal prefix of `s`: optional sign,
/// digits with an optional fractional part, optional exponent. Trailing
/// garbage is tolerated ("3.5kg" -> 3.5); no valid prefix yields NaN.
fn parse_leading_float(s: &str) -> f64 {
    let bytes = s.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        pos += 1;
    }

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        frac_digits = count_digits(&bytes[pos + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            pos += 1 + frac_digits;
        }
    }

    // The mantissa needs at least one digit on either side of the dot.
    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    // An exponent only counts if at least one digit follows it.
    if matches!(bytes.get(pos), Some(b'e') | Some(b'E')) {
        let mut exp_pos = pos + 1;
        if matches!(bytes.get(exp_pos), Some(b'+') | Some(b'-')) {
            exp_pos += 1;
        }
        let exp_digits = count_digits(&bytes[exp_pos..]);
        if exp_digits > 0 {
            pos = exp_pos + exp_digits;
        }
    }

    s[..pos].parse::<f64>().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Stringify a raw X value for use as a category label.
fn label_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}
