//! Histogram and normal Q-Q charts of standardised sums.

use std::ops::Range;
use std::path::Path;

use limit_core::math::normal::normal_density_curve;
use limit_sim::clt::CltTrial;
use plotters::prelude::*;

use super::{bitmap_root, padded_range, CAPTION_SIZE};
use crate::error::ReportError;

/// Histogram chart size.
pub const HISTOGRAM_SIZE: (u32, u32) = (800, 500);

/// Q-Q chart size.
pub const QQ_SIZE: (u32, u32) = (500, 500);

/// Abscissa span of the reference density.
pub const DENSITY_SPAN: (f64, f64) = (-4.0, 4.0);

/// Points on the reference density.
pub const DENSITY_POINTS: usize = 200;

/// Density bars with the standard normal curve.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramFigure {
    /// Chart title.
    pub title: String,
    /// `(left, right, density)` per bin.
    pub bars: Vec<(f64, f64, f64)>,
    /// Standard normal density over [`DENSITY_SPAN`].
    pub curve: Vec<(f64, f64)>,
    /// X axis range.
    pub x_range: Range<f64>,
    /// Y axis range.
    pub y_range: Range<f64>,
}

impl HistogramFigure {
    /// Figure for one sample size.
    pub fn from_trial(trial: &CltTrial) -> Self {
        let bars: Vec<_> = trial
            .histogram
            .bins()
            .iter()
            .map(|b| (b.left, b.right, b.density))
            .collect();
        let curve = normal_density_curve(DENSITY_SPAN.0, DENSITY_SPAN.1, DENSITY_POINTS);

        let x_lo = bars.first().map_or(DENSITY_SPAN.0, |b| b.0).min(DENSITY_SPAN.0);
        let x_hi = bars.last().map_or(DENSITY_SPAN.1, |b| b.1).max(DENSITY_SPAN.1);
        let y_hi = curve
            .iter()
            .map(|p| p.1)
            .fold(trial.histogram.max_density(), f64::max);

        Self {
            title: format!("CLT Histogram (n = {})", trial.sample_size),
            bars,
            curve,
            x_range: x_lo..x_hi,
            y_range: 0.0..y_hi * 1.1,
        }
    }

    /// Renders the chart as a PNG at `path`.
    pub fn render(&self, path: &Path) -> Result<(), ReportError> {
        let root = bitmap_root(path, HISTOGRAM_SIZE)?;
        let mut chart = ChartBuilder::on(&root)
            .caption(&self.title, ("sans-serif", CAPTION_SIZE))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(self.x_range.clone(), self.y_range.clone())?;

        chart.configure_mesh().x_desc("Z").y_desc("Density").draw()?;

        chart.draw_series(self.bars.iter().map(|&(left, right, density)| {
            Rectangle::new([(left, 0.0), (right, density)], BLUE.mix(0.6).filled())
        }))?;
        chart.draw_series(LineSeries::new(
            self.curve.iter().copied(),
            RED.stroke_width(2),
        ))?;

        root.present()?;
        Ok(())
    }
}

/// Ordered z-scores against normal quantiles with the least-squares line.
#[derive(Debug, Clone, PartialEq)]
pub struct QqFigure {
    /// Chart title.
    pub title: String,
    /// `(theoretical quantile, ordered value)` pairs.
    pub points: Vec<(f64, f64)>,
    /// Endpoints of the fitted line.
    pub fit: [(f64, f64); 2],
    /// Squared correlation of the fit.
    pub r_squared: f64,
    /// X axis range.
    pub x_range: Range<f64>,
    /// Y axis range.
    pub y_range: Range<f64>,
}

impl QqFigure {
    /// Figure for one sample size.
    pub fn from_trial(trial: &CltTrial) -> Result<Self, ReportError> {
        let qq = &trial.qq;
        let points: Vec<(f64, f64)> = qq
            .theoretical
            .iter()
            .copied()
            .zip(qq.ordered.iter().copied())
            .collect();
        let (first, last) = match (points.first(), points.last()) {
            (Some(first), Some(last)) => (first.0, last.0),
            _ => return Err(ReportError::EmptySeries("probability plot")),
        };
        let fit = [(first, qq.fitted(first)), (last, qq.fitted(last))];

        let x_range = padded_range(points.iter().map(|p| p.0), 0.05)
            .ok_or(ReportError::EmptySeries("probability plot"))?;
        let y_range = padded_range(
            points.iter().map(|p| p.1).chain(fit.iter().map(|p| p.1)),
            0.05,
        )
        .ok_or(ReportError::EmptySeries("probability plot"))?;

        Ok(Self {
            title: format!("Q-Q Plot (n = {})", trial.sample_size),
            points,
            fit,
            r_squared: qq.r_squared(),
            x_range,
            y_range,
        })
    }

    /// Renders the chart as a PNG at `path`.
    pub fn render(&self, path: &Path) -> Result<(), ReportError> {
        let root = bitmap_root(path, QQ_SIZE)?;
        let mut chart = ChartBuilder::on(&root)
            .caption(&self.title, ("sans-serif", CAPTION_SIZE))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(self.x_range.clone(), self.y_range.clone())?;

        chart
            .configure_mesh()
            .x_desc("Theoretical quantiles")
            .y_desc("Ordered Values")
            .draw()?;

        chart.draw_series(
            self.points
                .iter()
                .map(|&p| Circle::new(p, 2, BLUE.filled())),
        )?;
        chart
            .draw_series(LineSeries::new(self.fit, RED.stroke_width(2)))?
            .label(format!("R² = {:.4}", self.r_squared))
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::LowerRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;

        root.present()?;
        Ok(())
    }
}

/// Writes the histogram for `trial` to `path`.
pub fn plot_clt_histogram(trial: &CltTrial, path: &Path) -> Result<(), ReportError> {
    HistogramFigure::from_trial(trial).render(path)
}

/// Writes the Q-Q plot for `trial` to `path`.
pub fn plot_clt_qq(trial: &CltTrial, path: &Path) -> Result<(), ReportError> {
    QqFigure::from_trial(trial)?.render(path)
}
