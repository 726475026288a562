//! Running-mean charts.

use std::ops::Range;
use std::path::Path;

use limit_sim::slln::SllnAnalysis;
use limit_sim::ConvergenceResult;
use plotters::prelude::*;

use super::{bitmap_root, dashed_hline, draw_annotation, padded_range, CAPTION_SIZE, LIGHT_CORAL, WHEAT};
use crate::error::ReportError;

/// Per-distribution chart size.
pub const ANALYSIS_SIZE: (u32, u32) = (1400, 700);

/// Demonstration chart size.
pub const DEMO_SIZE: (u32, u32) = (1000, 600);

/// What a running-mean chart shows.
#[derive(Debug, Clone, PartialEq)]
pub struct SllnFigure {
    /// Chart title.
    pub title: String,
    /// `(n, running mean)` points, `n` counted from 1.
    pub points: Vec<(f64, f64)>,
    /// Reference line and its legend label.
    pub reference: Option<(f64, String)>,
    /// Annotation box lines.
    pub annotation: Vec<String>,
    /// Whether the annotation flags an undefined mean.
    pub warning: bool,
    /// X axis range.
    pub x_range: Range<f64>,
    /// Y axis range.
    pub y_range: Range<f64>,
}

impl SllnFigure {
    /// Chart of one registry analysis, with the statistics box.
    pub fn from_analysis(analysis: &SllnAnalysis) -> Result<Self, ReportError> {
        let result = &analysis.result;
        let (annotation, warning) = match result.true_value {
            Some(mu) => (
                vec![
                    format!("Final Mean: {:.6}", result.final_value),
                    format!("True Mean: {:.6}", mu),
                    format!("Final Error: {:.6}", result.absolute_error.unwrap_or(f64::NAN)),
                    format!(
                        "Converged (±{}) at n ≈ {}",
                        result.tolerance,
                        result.convergence_index.unwrap_or(result.len())
                    ),
                ],
                false,
            ),
            None => (
                vec![
                    format!("Mean: {}", analysis.spec.mean),
                    format!("Sample Mean at n={}: {:.6}", result.len(), result.final_value),
                    "SLLN does NOT apply!".to_string(),
                ],
                true,
            ),
        };
        let reference = result
            .true_value
            .map(|mu| (mu, format!("True Mean μ = {mu}")));

        Self::build(
            format!("SLLN Convergence Analysis - {}", analysis.spec.name),
            result,
            reference,
            annotation,
            warning,
        )
    }

    /// Plain chart of a running mean against its target.
    pub fn demonstration(result: &ConvergenceResult) -> Result<Self, ReportError> {
        let reference = result
            .true_value
            .map(|mu| (mu, format!("True Mean (μ = {mu})")));
        Self::build("SLLN Simulation".to_string(), result, reference, Vec::new(), false)
    }

    fn build(
        title: String,
        result: &ConvergenceResult,
        reference: Option<(f64, String)>,
        annotation: Vec<String>,
        warning: bool,
    ) -> Result<Self, ReportError> {
        if result.is_empty() {
            return Err(ReportError::EmptySeries("running mean"));
        }
        let points: Vec<(f64, f64)> = result
            .cumulative
            .iter()
            .enumerate()
            .map(|(i, &m)| ((i + 1) as f64, m))
            .collect();

        let y_values = points
            .iter()
            .map(|p| p.1)
            .chain(reference.as_ref().map(|r| r.0));
        let y_range = padded_range(y_values, 0.05).ok_or(ReportError::EmptySeries("running mean"))?;

        Ok(Self {
            title,
            x_range: 0.0..points.len() as f64 + 1.0,
            points,
            reference,
            annotation,
            warning,
            y_range,
        })
    }

    /// Renders the chart as a PNG of `size` pixels at `path`.
    pub fn render(&self, path: &Path, size: (u32, u32)) -> Result<(), ReportError> {
        let root = bitmap_root(path, size)?;
        let mut chart = ChartBuilder::on(&root)
            .caption(&self.title, ("sans-serif", CAPTION_SIZE))
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(70)
            .build_cartesian_2d(self.x_range.clone(), self.y_range.clone())?;

        chart
            .configure_mesh()
            .x_desc("Sample Size (n)")
            .y_desc("Cumulative Mean")
            .draw()?;

        chart
            .draw_series(LineSeries::new(self.points.iter().copied(), BLUE.mix(0.7)))?
            .label("Cumulative Mean")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

        if let Some((mu, label)) = &self.reference {
            chart
                .draw_series(
                    dashed_hline(*mu, self.x_range.clone(), 60)
                        .into_iter()
                        .map(|seg| PathElement::new(seg.to_vec(), RED.stroke_width(2))),
                )?
                .label(label.as_str())
                .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));

            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperRight)
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .draw()?;
        }

        if !self.annotation.is_empty() {
            let background = if self.warning { LIGHT_CORAL } else { WHEAT };
            draw_annotation(
                &root,
                chart.plotting_area().get_pixel_range(),
                &self.annotation,
                background,
            )?;
        }

        root.present()?;
        Ok(())
    }
}

/// Writes the per-distribution chart for `analysis` to `path`.
pub fn plot_slln_analysis(analysis: &SllnAnalysis, path: &Path) -> Result<(), ReportError> {
    SllnFigure::from_analysis(analysis)?.render(path, ANALYSIS_SIZE)
}

/// Writes the demonstration chart for `result` to `path`.
pub fn plot_slln_demo(result: &ConvergenceResult, path: &Path) -> Result<(), ReportError> {
    SllnFigure::demonstration(result)?.render(path, DEMO_SIZE)
}
