use thiserror::Error;
use tracing::debug;

use crate::data::Dataset;
use crate::geometry::{self, ChartSpec, Geometry};
use crate::infer;
use crate::normalize;
use crate::{Canvas, ChartType};

/// Why a render produced no chart. These are normal outcomes of partially
/// chartable data, carried as values rather than raised as errors; each maps
/// to a user-visible message, never a crash.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmptyReason {
    #[error("No data")]
    EmptyDataset,
    #[error("No numeric column found for Y-axis")]
    NoNumericColumn,
    #[error("No valid numeric data found for column \"{0}\"")]
    AllRowsInvalid(String),
}

/// Outcome of one render pass.
#[derive(Debug, Clone)]
pub enum ChartResult {
    Chart(Geometry),
    Empty(EmptyReason),
}

/// Run the full pipeline: infer axis columns, normalize rows to (label,
/// value) pairs, then derive geometry. Pure and deterministic; callers
/// re-invoke it wholesale whenever data, chart type, or axis selection
/// change.
pub fn build_chart(
    dataset: &Dataset,
    chart_type: ChartType,
    x_override: Option<&str>,
    y_override: Option<&str>,
    canvas: &Canvas,
) -> ChartResult {
    let Some(sample) = dataset.sample() else {
        return ChartResult::Empty(EmptyReason::EmptyDataset);
    };

    let Some(columns) = infer::resolve_columns(&dataset.fields, sample, x_override, y_override)
    else {
        return ChartResult::Empty(EmptyReason::NoNumericColumn);
    };
    debug!(x = %columns.x_field, y = %columns.y_field, ?chart_type, "resolved axis columns");

    let points = normalize::normalize_points(&dataset.records, &columns);
    if points.is_empty() {
        return ChartResult::Empty(EmptyReason::AllRowsInvalid(columns.y_field));
    }
    debug!(points = points.len(), "normalized dataset");

    let spec = ChartSpec { points, chart_type };
    ChartResult::Chart(geometry::build_geometry(&spec, canvas))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dataset(value: serde_json::Value) -> Dataset {
        Dataset::from_json(&value).unwrap()
    }

    fn run(value: serde_json::Value, chart_type: ChartType) -> ChartResult {
        build_chart(&dataset(value), chart_type, None, None, &Canvas::default())
    }

    #[test]
    fn test_empty_dataset() {
        match run(json!([]), ChartType::Bar) {
            ChartResult::Empty(reason) => assert_eq!(reason, EmptyReason::EmptyDataset),
            _ => panic!("expected empty state"),
        }
    }

    #[test]
    fn test_no_numeric_column() {
        match run(json!([{"a": "x"}]), ChartType::Bar) {
            ChartResult::Empty(reason) => assert_eq!(reason, EmptyReason::NoNumericColumn),
            _ => panic!("expected empty state"),
        }
    }

    #[test]
    fn test_all_rows_invalid_names_column() {
        match run(json!([{"a": "x", "b": "n/a"}]), ChartType::Bar) {
            ChartResult::Empty(reason) => {
                assert_eq!(reason, EmptyReason::AllRowsInvalid("b".to_string()));
            }
            _ => panic!("expected empty state"),
        }
    }

    #[test]
    fn test_override_to_bad_column_is_all_rows_invalid() {
        let value = json!([{"month": "Jan", "sales": 10, "note": "hi"}]);
        let result = build_chart(
            &dataset(value),
            ChartType::Line,
            None,
            Some("note"),
            &Canvas::default(),
        );
        match result {
            ChartResult::Empty(reason) => {
                assert_eq!(reason, EmptyReason::AllRowsInvalid("note".to_string()));
            }
            _ => panic!("expected empty state"),
        }
    }

    #[test]
    fn test_happy_path_produces_geometry() {
        match run(json!([{"month": "Jan", "sales": "$1,000"}]), ChartType::Bar) {
            ChartResult::Chart(Geometry::Bar(bar)) => {
                assert_eq!(bar.bars.len(), 1);
            }
            _ => panic!("expected bar geometry"),
        }
    }
}
