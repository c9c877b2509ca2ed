use std::f64::consts::TAU;

use crate::normalize::DataPoint;
use crate::palette::OrdinalPalette;
use crate::scale::{BandScale, LinearScale, PointScale};
use crate::{Canvas, ChartType};

/// The immutable input to the geometry builder. `points` must be non-empty;
/// the pipeline rejects empty or all-invalid datasets before this stage.
#[derive(Debug, Clone)]
pub struct ChartSpec {
    pub points: Vec<DataPoint>,
    pub chart_type: ChartType,
}

/// One bar rectangle in canvas coordinates (top-left anchored).
#[derive(Debug, Clone, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One pie wedge. Angles are radians from twelve o'clock, clockwise.
#[derive(Debug, Clone, PartialEq)]
pub struct Wedge {
    pub label: String,
    pub start_angle: f64,
    pub end_angle: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone)]
pub struct BarGeometry {
    pub bars: Vec<BarRect>,
    pub x: BandScale,
    pub y: LinearScale,
    pub y_ticks: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct LineGeometry {
    /// Polyline vertices in source order, straight segments between them.
    pub path: Vec<(f64, f64)>,
    pub x: PointScale,
    pub y: LinearScale,
    pub y_ticks: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct PieGeometry {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub wedges: Vec<Wedge>,
}

/// Chart-type-specific shapes plus the scales needed to draw axes.
#[derive(Debug, Clone)]
pub enum Geometry {
    Bar(BarGeometry),
    Line(LineGeometry),
    Pie(PieGeometry),
}

const BAND_PADDING: f64 = 0.1;
const TICK_COUNT: usize = 10;

/// Build drawable geometry for a non-empty chart spec. Pure function of the
/// spec and canvas; re-invoked wholesale on every data or selection change.
pub fn build_geometry(spec: &ChartSpec, canvas: &Canvas) -> Geometry {
    match spec.chart_type {
        ChartType::Bar => Geometry::Bar(build_bars(&spec.points, canvas)),
        ChartType::Line => Geometry::Line(build_line(&spec.points, canvas)),
        ChartType::Pie => Geometry::Pie(build_pie(&spec.points, canvas)),
    }
}

/// Y domain always spans zero so bars and lines never float off a baseline.
fn y_scale(points: &[DataPoint], canvas: &Canvas) -> LinearScale {
    let min = points.iter().map(|p| p.value).fold(f64::INFINITY, f64::min);
    let max = points.iter().map(|p| p.value).fold(f64::NEG_INFINITY, f64::max);
    LinearScale::new((min.min(0.0), max.max(0.0)), canvas.y_extent()).nice(TICK_COUNT)
}

fn x_domain(points: &[DataPoint]) -> Vec<String> {
    points.iter().map(|p| p.label.clone()).collect()
}

fn build_bars(points: &[DataPoint], canvas: &Canvas) -> BarGeometry {
    let x = BandScale::new(x_domain(points), canvas.x_extent(), BAND_PADDING);
    let y = y_scale(points, canvas);
    // A degenerate all-zero domain makes the scale non-finite everywhere;
    // anchor such bars at the plot bottom with zero height.
    let baseline = y.scale(0.0);
    let floor = canvas.y_extent().0;
    let baseline = if baseline.is_finite() { baseline } else { floor };

    let bars = points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let scaled = y.scale(point.value);
            let top = if point.value > 0.0 { scaled } else { baseline };
            let height = (scaled - baseline).abs();
            BarRect {
                x: x.position(i),
                y: if top.is_finite() { top } else { baseline },
                width: x.bandwidth(),
                height: if height.is_finite() { height } else { 0.0 },
            }
        })
        .collect();

    let y_ticks = y.ticks(TICK_COUNT);
    BarGeometry { bars, x, y, y_ticks }
}

fn build_line(points: &[DataPoint], canvas: &Canvas) -> LineGeometry {
    let x = PointScale::new(x_domain(points), canvas.x_extent());
    let y = y_scale(points, canvas);

    let path = points
        .iter()
        .enumerate()
        .map(|(i, point)| (x.position(i), y.scale(point.value)))
        .collect();

    let y_ticks = y.ticks(TICK_COUNT);
    LineGeometry { path, x, y, y_ticks }
}

fn build_pie(points: &[DataPoint], canvas: &Canvas) -> PieGeometry {
    let radius = canvas.width.min(canvas.height) / 2.0 - 20.0;
    let palette = OrdinalPalette::tableau10();

    // Proportional allocation over the value sum, in source order. Negative
    // values flow through the proportion unmodified.
    let total: f64 = points.iter().map(|p| p.value).sum();

    let mut angle = 0.0;
    let wedges = points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let span = point.value / total * TAU;
            let wedge = Wedge {
                label: point.label.clone(),
                start_angle: angle,
                end_angle: angle + span,
                color: palette.color(i),
            };
            angle += span;
            wedge
        })
        .collect();

    PieGeometry {
        cx: canvas.width / 2.0,
        cy: canvas.height / 2.0,
        radius,
        wedges,
    }
}
