// src/report/chart.rs

//! SVG line charts of sensitivity sweeps.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use plotters::prelude::*;

use crate::sensitivity::SensitivityResult;

/// Size and styling of a rendered chart.
#[derive(Debug, Clone)]
pub struct ChartStyle {
    pub width: u32,
    pub height: u32,
    /// Radius of the marker drawn at each sample, 0 for a bare line
    pub marker_radius: u32,
    /// Fraction of the price range added above and below the curve
    pub y_padding: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 640,
            marker_radius: 3,
            y_padding: 0.05,
        }
    }
}

/// Chart caption for a sweep, e.g. `Sensitivity to Strike Price`.
pub fn chart_title(result: &SensitivityResult) -> String {
    format!("Sensitivity to {}", result.varied.display_name())
}

/// Pads `(lo, hi)` by `padding` of its width; a flat range is widened by one unit.
fn padded(lo: f64, hi: f64, padding: f64) -> (f64, f64) {
    let width = hi - lo;
    if width > 0.0 {
        (lo - width * padding, hi + width * padding)
    } else {
        (lo - 1.0, hi + 1.0)
    }
}

/// Renders the sweep as an SVG document: a line through every sample with a
/// marker at each point.
pub fn render_svg(result: &SensitivityResult, style: &ChartStyle) -> Result<String> {
    let (x_min, x_max) = match (result.samples.first(), result.samples.last()) {
        (Some(first), Some(last)) => padded(first.value, last.value, 0.0),
        _ => return Err(anyhow!("cannot chart an empty sweep")),
    };
    let (p_min, p_max) = result
        .price_range()
        .ok_or_else(|| anyhow!("cannot chart an empty sweep"))?;
    let (y_min, y_max) = padded(p_min, p_max, style.y_padding);

    let points: Vec<(f64, f64)> = result.samples.iter().map(|s| (s.value, s.price)).collect();

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (style.width, style.height))
            .into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .caption(chart_title(result), ("sans-serif", 28))
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

        chart
            .configure_mesh()
            .x_desc(result.varied.axis_label())
            .y_desc("Option Price")
            .draw()?;

        chart.draw_series(std::iter::once(PathElement::new(
            points.clone(),
            BLUE.stroke_width(2),
        )))?;

        if style.marker_radius > 0 {
            chart.draw_series(
                points
                    .iter()
                    .map(|pt| Circle::new(*pt, style.marker_radius, BLUE.filled())),
            )?;
        }

        root.present()?;
    }
    Ok(svg)
}

/// Renders the sweep and writes the SVG to `path`.
pub fn write_svg(
    path: impl AsRef<Path>,
    result: &SensitivityResult,
    style: &ChartStyle,
) -> Result<()> {
    let path = path.as_ref();
    let svg = render_svg(result, style)?;
    fs::write(path, svg).with_context(|| format!("failed to write chart to {}", path.display()))
}
