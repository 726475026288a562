//! Running π estimate chart.

use std::f64::consts::PI;
use std::ops::Range;
use std::path::Path;

use limit_sim::pi::PiEstimate;
use plotters::prelude::*;

use super::{bitmap_root, dashed_hline, padded_range, CAPTION_SIZE};
use crate::error::ReportError;

/// Chart size.
pub const PI_SIZE: (u32, u32) = (1000, 600);

/// Number of dashes in the π reference line.
const REFERENCE_DASHES: usize = 60;

/// What the π chart shows.
#[derive(Debug, Clone, PartialEq)]
pub struct PiFigure {
    /// `(n, 4 · inside / n)` points, `n` counted from 1.
    pub points: Vec<(f64, f64)>,
    /// Dash segments of the π reference line.
    pub reference: Vec<[(f64, f64); 2]>,
    /// X axis range.
    pub x_range: Range<f64>,
    /// Y axis range, always containing π.
    pub y_range: Range<f64>,
}

impl PiFigure {
    /// Chart data for `estimate`.
    pub fn from_estimate(estimate: &PiEstimate) -> Result<Self, ReportError> {
        let series = &estimate.result.cumulative;
        if series.is_empty() {
            return Err(ReportError::EmptySeries("π estimate"));
        }
        let points: Vec<(f64, f64)> = series
            .iter()
            .enumerate()
            .map(|(i, &v)| ((i + 1) as f64, v))
            .collect();
        let x_range = 0.0..points.len() as f64 + 1.0;
        let y_range = padded_range(series.iter().copied().chain([PI]), 0.05)
            .ok_or(ReportError::EmptySeries("π estimate"))?;

        Ok(Self {
            reference: dashed_hline(PI, x_range.clone(), REFERENCE_DASHES),
            points,
            x_range,
            y_range,
        })
    }

    /// Renders the chart as a PNG at `path`.
    pub fn render(&self, path: &Path) -> Result<(), ReportError> {
        let root = bitmap_root(path, PI_SIZE)?;
        let mut chart = ChartBuilder::on(&root)
            .caption("Monte Carlo Estimation of π", ("sans-serif", CAPTION_SIZE))
            .margin(10)
            .x_label_area_size(45)
            .y_label_area_size(60)
            .build_cartesian_2d(self.x_range.clone(), self.y_range.clone())?;

        chart
            .configure_mesh()
            .x_desc("Number of Points (n)")
            .y_desc("π Estimate")
            .draw()?;

        chart
            .draw_series(LineSeries::new(self.points.iter().copied(), BLUE))?
            .label("Monte Carlo π Estimate")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

        chart
            .draw_series(
                self.reference
                    .iter()
                    .map(|seg| PathElement::new(seg.to_vec(), RED)),
            )?
            .label("True π")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;

        root.present()?;
        Ok(())
    }
}

/// Writes the running estimate and the dashed π line to `path`.
pub fn plot_pi_estimate(estimate: &PiEstimate, path: &Path) -> Result<(), ReportError> {
    PiFigure::from_estimate(estimate)?.render(path)
}
