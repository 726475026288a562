//! PNG figures.
//!
//! Each renderer is split in two: a plain data struct describing what will
//! be drawn (series, ranges, annotation text), which is what the tests
//! exercise, and a `plot_*` function that hands it to the `plotters`
//! bitmap backend.
//!
//! - [`paths`]: output layout under the results directory
//! - [`slln`]: running-mean charts
//! - [`clt`]: z-score histograms and normal Q-Q plots
//! - [`pi`]: running π estimate

pub mod clt;
pub mod paths;
pub mod pi;
pub mod slln;

use std::ops::Range;
use std::path::Path;
use std::sync::OnceLock;

use plotters::prelude::*;

use crate::error::ReportError;

pub use paths::{ensure_dir, sanitize_filename, FigurePaths};

/// DejaVu Sans, registered as the `sans-serif` family for every chart.
static SANS_SERIF: &[u8] = include_bytes!("../../assets/DejaVuSans.ttf");

/// Caption font size in pixels.
pub const CAPTION_SIZE: u32 = 22;

/// Annotation font size in pixels.
pub const ANNOTATION_SIZE: u32 = 15;

/// Background of annotation boxes for a defined mean.
pub const WHEAT: RGBColor = RGBColor(245, 222, 179);

/// Background of annotation boxes for an undefined mean.
pub const LIGHT_CORAL: RGBColor = RGBColor(240, 128, 128);

/// Value range covering every finite value of `values`, padded by `pad`
/// of its width on both sides.
///
/// A degenerate range is widened by ±0.5. Returns `None` when nothing is
/// finite.
pub fn padded_range<I>(values: I, pad: f64) -> Option<Range<f64>>
where
    I: IntoIterator<Item = f64>,
{
    let (lo, hi) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })?;

    if hi - lo < f64::EPSILON {
        return Some((lo - 0.5)..(hi + 0.5));
    }
    let margin = (hi - lo) * pad;
    Some((lo - margin)..(hi + margin))
}

/// Dash segments along the horizontal line `y` over `x_range`.
pub(crate) fn dashed_hline(y: f64, x_range: Range<f64>, dashes: usize) -> Vec<[(f64, f64); 2]> {
    let step = (x_range.end - x_range.start) / (2 * dashes.max(1)) as f64;
    (0..dashes.max(1))
        .map(|i| {
            let x0 = x_range.start + 2.0 * step * i as f64;
            [(x0, y), (x0 + step, y)]
        })
        .collect()
}

/// Registers the bundled font once per process.
pub fn register_fonts() -> Result<(), ReportError> {
    static REGISTERED: OnceLock<Result<(), String>> = OnceLock::new();
    REGISTERED
        .get_or_init(|| {
            plotters::style::register_font(
                "sans-serif",
                plotters::style::FontStyle::Normal,
                SANS_SERIF,
            )
            .map_err(|_| "invalid font data".to_string())
        })
        .clone()
        .map_err(ReportError::Font)
}

/// Creates the parent directory of `path` and a white bitmap drawing area.
pub(crate) fn bitmap_root(
    path: &Path,
    size: (u32, u32),
) -> Result<DrawingArea<BitMapBackend<'_>, plotters::coord::Shift>, ReportError> {
    register_fonts()?;
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    tracing::debug!(path = %path.display(), "Rendering figure");
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;
    Ok(root)
}

/// Draws a filled annotation box with one text line per entry of `lines`,
/// anchored at the top-left of `area` (pixel coordinates).
pub(crate) fn draw_annotation<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    area: (Range<i32>, Range<i32>),
    lines: &[String],
    background: RGBColor,
) -> Result<(), ReportError> {
    let line_height = ANNOTATION_SIZE as i32 + 5;
    let widest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as i32;
    let x0 = area.0.start + 12;
    let y0 = area.1.start + 12;
    let x1 = x0 + widest * (ANNOTATION_SIZE as i32 * 6 / 10) + 16;
    let y1 = y0 + line_height * lines.len() as i32 + 10;

    root.draw(&Rectangle::new([(x0, y0), (x1, y1)], background.mix(0.8).filled()))?;
    root.draw(&Rectangle::new([(x0, y0), (x1, y1)], BLACK.mix(0.5)))?;
    for (i, line) in lines.iter().enumerate() {
        let y = y0 + 6 + line_height * i as i32;
        root.draw(&Text::new(
            line.as_str(),
            (x0 + 8, y),
            ("sans-serif", f64::from(ANNOTATION_SIZE)).into_font(),
        ))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_padded_range() {
        let range = padded_range([0.0, 1.0, f64::NAN, 0.5], 0.1).unwrap();
        assert_relative_eq!(range.start, -0.1);
        assert_relative_eq!(range.end, 1.1);
    }

    #[test]
    fn test_padded_range_degenerate() {
        let range = padded_range([2.0, 2.0], 0.1).unwrap();
        assert_relative_eq!(range.start, 1.5);
        assert_relative_eq!(range.end, 2.5);

        assert!(padded_range([f64::NAN, f64::INFINITY], 0.1).is_none());
        assert!(padded_range(Vec::new(), 0.1).is_none());
    }

    #[test]
    fn test_register_fonts_is_idempotent() {
        register_fonts().unwrap();
        register_fonts().unwrap();
    }

    #[test]
    fn test_dashed_hline_spans_half_the_range() {
        let dashes = dashed_hline(3.0, 0.0..100.0, 10);
        assert_eq!(dashes.len(), 10);
        assert!(dashes.iter().all(|seg| seg[0].1 == 3.0 && seg[1].1 == 3.0));
        let covered: f64 = dashes.iter().map(|seg| seg[1].0 - seg[0].0).sum();
        assert_relative_eq!(covered, 50.0);
        assert_relative_eq!(dashes[9][1].0, 95.0);
    }
}
