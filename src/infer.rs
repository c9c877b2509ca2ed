use crate::data::Record;
use crate::normalize;

/// The resolved axis columns for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumns {
    pub x_field: String,
    pub y_field: String,
}

/// Decide which field feeds each axis, from the first row's value types.
///
/// Overrides win when they name a field that actually exists; an override
/// naming an unknown field falls through to the defaults. The X default is
/// the first string-typed field (else the first field overall). The Y
/// default is the first numeric field, then the first field whose sample
/// coerces to a number, then the first field not already taken by X.
/// `None` means no plausible Y column exists.
pub fn resolve_columns(
    fields: &[String],
    sample: &Record,
    x_override: Option<&str>,
    y_override: Option<&str>,
) -> Option<ResolvedColumns> {
    let x_field = x_override
        .filter(|name| fields.iter().any(|f| f == name))
        .map(str::to_owned)
        .or_else(|| {
            fields
                .iter()
                .find(|f| matches!(sample.get(*f), Some(v) if v.is_string()))
                .cloned()
        })
        .or_else(|| fields.first().cloned())?;

    let y_field = y_override
        .filter(|name| fields.iter().any(|f| f == name))
        .map(str::to_owned)
        .or_else(|| {
            fields
                .iter()
                .find(|f| matches!(sample.get(*f), Some(v) if v.is_number()))
                .cloned()
        })
        .or_else(|| {
            fields
                .iter()
                .find(|f| {
                    sample
                        .get(*f)
                        .map(|v| normalize::coerce_number(v).is_finite())
                        .unwrap_or(false)
                })
                .cloned()
        })
        // Last resort: charting a second column and letting normalization
        // report it still beats refusing a two-column dataset outright.
        .or_else(|| fields.iter().find(|f| **f != x_field).cloned())?;

    Some(ResolvedColumns { x_field, y_field })
}
