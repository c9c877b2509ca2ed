use anyhow::{Context, Result};
use image::ImageEncoder;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::geometry::{BarGeometry, Geometry, LineGeometry, PieGeometry};
use crate::palette::hex_to_rgb;
use crate::Canvas;

const BAR_FILL: &str = "#4c78a8";
const LINE_STROKE: &str = "#ff7f0e";

/// Draw a computed geometry onto a bitmap and encode it as PNG bytes.
///
/// Everything here is dumb pixel pushing: scales, shapes, and tick values
/// all come precomputed from the geometry builder.
pub fn render_png(geometry: &Geometry, canvas: &Canvas) -> Result<Vec<u8>> {
    let width = canvas.width as u32;
    let height = canvas.height as u32;
    let mut buffer = vec![0u8; (width * height * 3) as usize];

    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE).context("Failed to fill background")?;

        match geometry {
            Geometry::Bar(bar) => draw_bars(&root, bar, canvas)?,
            Geometry::Line(line) => draw_line(&root, line, canvas)?,
            Geometry::Pie(pie) => draw_pie(&root, pie)?,
        }

        root.present().context("Failed to present drawing")?;
    }

    let mut png_bytes = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new(&mut png_bytes);
    encoder
        .write_image(&buffer, width, height, image::ColorType::Rgb8)
        .context("Failed to encode PNG")?;

    Ok(png_bytes)
}

type Root<'a> = DrawingArea<BitMapBackend<'a>, plotters::coord::Shift>;

fn draw_bars(root: &Root, geometry: &BarGeometry, canvas: &Canvas) -> Result<()> {
    let fill = rgb(BAR_FILL);

    for bar in &geometry.bars {
        root.draw(&Rectangle::new(
            [
                (bar.x as i32, bar.y as i32),
                ((bar.x + bar.width) as i32, (bar.y + bar.height) as i32),
            ],
            fill.filled(),
        ))
        .context("Failed to draw bar")?;
    }

    let centers: Vec<f64> = (0..geometry.x.domain().len())
        .map(|i| geometry.x.position(i) + geometry.x.bandwidth() / 2.0)
        .collect();
    draw_x_axis(root, canvas, geometry.x.domain(), &centers)?;
    draw_y_axis(root, canvas, &geometry.y_ticks, &geometry.y)?;
    Ok(())
}

fn draw_line(root: &Root, geometry: &LineGeometry, canvas: &Canvas) -> Result<()> {
    let stroke = rgb(LINE_STROKE);
    let path: Vec<(i32, i32)> = geometry
        .path
        .iter()
        .map(|&(x, y)| (x as i32, y as i32))
        .collect();

    root.draw(&PathElement::new(path, stroke.stroke_width(2)))
        .context("Failed to draw line series")?;

    let positions: Vec<f64> = (0..geometry.x.domain().len())
        .map(|i| geometry.x.position(i))
        .collect();
    draw_x_axis(root, canvas, geometry.x.domain(), &positions)?;
    draw_y_axis(root, canvas, &geometry.y_ticks, &geometry.y)?;
    Ok(())
}

fn draw_pie(root: &Root, geometry: &PieGeometry) -> Result<()> {
    for wedge in &geometry.wedges {
        let fill = rgb(wedge.color);

        // Approximate the arc with a polygon fan; angle zero is twelve
        // o'clock, increasing clockwise.
        let span = wedge.end_angle - wedge.start_angle;
        let segments = ((span.abs() / 0.02).ceil() as usize).max(2);
        let mut points = Vec::with_capacity(segments + 2);
        points.push((geometry.cx as i32, geometry.cy as i32));
        for i in 0..=segments {
            let angle = wedge.start_angle + span * i as f64 / segments as f64;
            let x = geometry.cx + geometry.radius * angle.sin();
            let y = geometry.cy - geometry.radius * angle.cos();
            points.push((x as i32, y as i32));
        }

        root.draw(&Polygon::new(points.clone(), fill.filled()))
            .context("Failed to draw pie wedge")?;
        points.push(points[0]);
        root.draw(&PathElement::new(points, WHITE.stroke_width(1)))
            .context("Failed to draw wedge border")?;
    }
    Ok(())
}

/// Axis line along the plot bottom plus one label per category position.
fn draw_x_axis(root: &Root, canvas: &Canvas, labels: &[String], positions: &[f64]) -> Result<()> {
    let (left, right) = canvas.x_extent();
    let baseline = canvas.y_extent().0;

    root.draw(&PathElement::new(
        vec![(left as i32, baseline as i32), (right as i32, baseline as i32)],
        BLACK.stroke_width(1),
    ))
    .context("Failed to draw x axis")?;

    let style = ("sans-serif", 12)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Top));
    for (label, &x) in labels.iter().zip(positions) {
        root.draw(&Text::new(
            label.clone(),
            (x as i32, (baseline + 6.0) as i32),
            style.clone(),
        ))
        .context("Failed to draw x label")?;
    }
    Ok(())
}

/// Axis line along the plot left plus tick marks and value labels.
fn draw_y_axis(
    root: &Root,
    canvas: &Canvas,
    ticks: &[f64],
    scale: &crate::scale::LinearScale,
) -> Result<()> {
    let left = canvas.x_extent().0;
    let (bottom, top) = canvas.y_extent();

    root.draw(&PathElement::new(
        vec![(left as i32, top as i32), (left as i32, bottom as i32)],
        BLACK.stroke_width(1),
    ))
    .context("Failed to draw y axis")?;

    let style = ("sans-serif", 12)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Right, VPos::Center));
    for &tick in ticks {
        let y = scale.scale(tick);
        if !y.is_finite() {
            continue;
        }
        root.draw(&PathElement::new(
            vec![((left - 4.0) as i32, y as i32), (left as i32, y as i32)],
            BLACK.stroke_width(1),
        ))
        .context("Failed to draw y tick")?;
        root.draw(&Text::new(
            format_tick(tick),
            ((left - 7.0) as i32, y as i32),
            style.clone(),
        ))
        .context("Failed to draw y label")?;
    }
    Ok(())
}

fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

fn rgb(hex: &str) -> RGBColor {
    let (r, g, b) = hex_to_rgb(hex);
    RGBColor(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(2600.0), "2600");
        assert_eq!(format_tick(-5.0), "-5");
        assert_eq!(format_tick(0.5), "0.5");
    }
}
