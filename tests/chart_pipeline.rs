use serde_json::json;
use std::f64::consts::TAU;

use tabchart::data::Dataset;
use tabchart::geometry::Geometry;
use tabchart::pipeline::{build_chart, ChartResult, EmptyReason};
use tabchart::{Canvas, ChartType};

fn run(value: serde_json::Value, chart_type: ChartType) -> ChartResult {
    let dataset = Dataset::from_json(&value).expect("dataset should decode");
    build_chart(&dataset, chart_type, None, None, &Canvas::default())
}

fn expect_geometry(result: ChartResult) -> Geometry {
    match result {
        ChartResult::Chart(geometry) => geometry,
        ChartResult::Empty(reason) => panic!("expected a chart, got empty state: {reason}"),
    }
}

#[test]
fn test_currency_sales_bar_chart() {
    let result = run(
        json!([
            {"month": "Jan", "sales": "$1,000"},
            {"month": "Feb", "sales": "$2,500"}
        ]),
        ChartType::Bar,
    );

    let Geometry::Bar(bar) = expect_geometry(result) else {
        panic!("expected bar geometry");
    };

    assert_eq!(bar.bars.len(), 2);
    assert_eq!(bar.x.domain(), ["Jan", "Feb"]);

    // Domain spans zero and is niced to a round boundary above the max.
    let (lo, hi) = bar.y.domain();
    assert_eq!(lo, 0.0);
    assert!(hi >= 2500.0 && hi <= 3000.0);

    // Feb's bar is taller and both heights are well-formed.
    assert!(bar.bars[1].height > bar.bars[0].height);
    for rect in &bar.bars {
        assert!(rect.height.is_finite());
        assert!(rect.height >= 0.0);
    }
}

#[test]
fn test_line_preserves_row_order() {
    let result = run(
        json!([
            {"day": "Wed", "temp": 19.5},
            {"day": "Mon", "temp": 21.0},
            {"day": "Mon", "temp": 18.0}
        ]),
        ChartType::Line,
    );

    let Geometry::Line(line) = expect_geometry(result) else {
        panic!("expected line geometry");
    };

    // Duplicate labels stay distinct positions, in source order.
    assert_eq!(line.x.domain(), ["Wed", "Mon", "Mon"]);
    assert_eq!(line.path.len(), 3);
    assert!(line.path[0].0 < line.path[1].0);
    assert!(line.path[1].0 < line.path[2].0);
}

#[test]
fn test_pie_wedges_cover_full_turn() {
    let result = run(
        json!([
            {"kind": "a", "n": 10},
            {"kind": "b", "n": 30},
            {"kind": "c", "n": 60}
        ]),
        ChartType::Pie,
    );

    let Geometry::Pie(pie) = expect_geometry(result) else {
        panic!("expected pie geometry");
    };

    let sum: f64 = pie.wedges.iter().map(|w| w.end_angle - w.start_angle).sum();
    assert!((sum - TAU).abs() < 1e-9);

    // 60% wedge spans 60% of the circle.
    let last = pie.wedges.last().unwrap();
    assert!(((last.end_angle - last.start_angle) - 0.6 * TAU).abs() < 1e-9);
}

#[test]
fn test_negative_values_keep_zero_baseline() {
    let result = run(
        json!([
            {"label": "loss", "delta": -40},
            {"label": "gain", "delta": 25}
        ]),
        ChartType::Bar,
    );

    let Geometry::Bar(bar) = expect_geometry(result) else {
        panic!("expected bar geometry");
    };

    let (lo, hi) = bar.y.domain();
    assert!(lo <= -40.0);
    assert!(hi >= 0.0);
}

#[test]
fn test_degenerate_identical_values() {
    let result = run(
        json!([
            {"label": "a", "v": 0},
            {"label": "b", "v": 0}
        ]),
        ChartType::Bar,
    );

    let Geometry::Bar(bar) = expect_geometry(result) else {
        panic!("expected bar geometry");
    };

    for rect in &bar.bars {
        assert_eq!(rect.height, 0.0);
        assert!(rect.y.is_finite());
    }
}

#[test]
fn test_empty_dataset_state() {
    match run(json!([]), ChartType::Bar) {
        ChartResult::Empty(reason) => assert_eq!(reason, EmptyReason::EmptyDataset),
        ChartResult::Chart(_) => panic!("expected empty state"),
    }
}

#[test]
fn test_no_numeric_column_state() {
    match run(json!([{"a": "x"}]), ChartType::Line) {
        ChartResult::Empty(reason) => assert_eq!(reason, EmptyReason::NoNumericColumn),
        ChartResult::Chart(_) => panic!("expected empty state"),
    }
}

#[test]
fn test_all_rows_invalid_state_names_column() {
    match run(json!([{"a": "x", "b": "n/a"}]), ChartType::Bar) {
        ChartResult::Empty(reason) => {
            assert_eq!(reason, EmptyReason::AllRowsInvalid("b".to_string()));
            assert_eq!(
                reason.to_string(),
                "No valid numeric data found for column \"b\""
            );
        }
        ChartResult::Chart(_) => panic!("expected empty state"),
    }
}

#[test]
fn test_axis_overrides_win() {
    let dataset = Dataset::from_json(&json!([
        {"region": "EU", "q1": 10, "q2": 20},
        {"region": "US", "q1": 30, "q2": 40}
    ]))
    .unwrap();

    let result = build_chart(
        &dataset,
        ChartType::Bar,
        Some("region"),
        Some("q2"),
        &Canvas::default(),
    );

    let Geometry::Bar(bar) = expect_geometry(result) else {
        panic!("expected bar geometry");
    };
    assert_eq!(bar.x.domain(), ["EU", "US"]);
    assert!(bar.y.domain().1 >= 40.0);
}

#[test]
fn test_render_produces_png() {
    let result = run(
        json!([
            {"month": "Jan", "sales": "$1,000"},
            {"month": "Feb", "sales": "$2,500"}
        ]),
        ChartType::Bar,
    );
    let geometry = expect_geometry(result);
    let png_bytes = tabchart::render::render_png(&geometry, &Canvas::default()).unwrap();
    assert_eq!(&png_bytes[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
}
