// Library exports for tabchart

pub mod data;
pub mod export;
pub mod geometry;
pub mod infer;
pub mod normalize;
pub mod palette;
pub mod pipeline;
pub mod render;
pub mod scale;

use serde::Deserialize;

/// The chart form to derive geometry for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default, clap::ValueEnum)]
pub enum ChartType {
    #[serde(rename = "bar")]
    #[default]
    Bar,
    #[serde(rename = "line")]
    Line,
    #[serde(rename = "pie")]
    Pie,
}

impl std::fmt::Display for ChartType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartType::Bar => write!(f, "bar"),
            ChartType::Line => write!(f, "line"),
            ChartType::Pie => write!(f, "pie"),
        }
    }
}

/// Margins around the plotting area, in logical pixels.
#[derive(Debug, Clone, Deserialize)]
pub struct Margin {
    #[serde(default = "default_margin_top")]
    pub top: f64,
    #[serde(default = "default_margin_right")]
    pub right: f64,
    #[serde(default = "default_margin_bottom")]
    pub bottom: f64,
    #[serde(default = "default_margin_left")]
    pub left: f64,
}

fn default_margin_top() -> f64 { 20.0 }
fn default_margin_right() -> f64 { 20.0 }
// Bottom margin is enlarged to leave room for rotated category labels.
fn default_margin_bottom() -> f64 { 80.0 }
fn default_margin_left() -> f64 { 60.0 }

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: default_margin_top(),
            right: default_margin_right(),
            bottom: default_margin_bottom(),
            left: default_margin_left(),
        }
    }
}

/// Fixed logical canvas the geometry is computed against.
#[derive(Debug, Clone, Deserialize)]
pub struct Canvas {
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default)]
    pub margin: Margin,
}

fn default_width() -> f64 { 800.0 }
fn default_height() -> f64 { 400.0 }

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            margin: Margin::default(),
        }
    }
}

impl Canvas {
    /// Horizontal plotting extent: `[left, width - right]`.
    pub fn x_extent(&self) -> (f64, f64) {
        (self.margin.left, self.width - self.margin.right)
    }

    /// Vertical plotting extent, inverted so larger values map to smaller
    /// pixel-Y: `[height - bottom, top]`.
    pub fn y_extent(&self) -> (f64, f64) {
        (self.height - self.margin.bottom, self.margin.top)
    }
}
