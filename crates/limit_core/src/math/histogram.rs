//! Density-normalised histograms.
//!
//! Bins are equal-width over `[min, max]` of the finite observations, the
//! last bin closed on the right. A bin's density is
//! `count / (total · width)`, so the bar areas sum to one.

use crate::types::StatisticsError;

/// One histogram bar.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistogramBin {
    /// Left edge.
    pub left: f64,
    /// Right edge.
    pub right: f64,
    /// Number of observations in the bin.
    pub count: usize,
    /// Normalised height.
    pub density: f64,
}

impl HistogramBin {
    /// Bin width.
    #[inline]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }
}

/// Equal-width histogram with density heights.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DensityHistogram {
    bins: Vec<HistogramBin>,
    total: usize,
}

impl DensityHistogram {
    /// The bars, left to right.
    #[inline]
    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    /// Number of observations binned.
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Tallest density.
    pub fn max_density(&self) -> f64 {
        self.bins.iter().map(|b| b.density).fold(0.0, f64::max)
    }

    /// Total bar area; one up to rounding.
    pub fn area(&self) -> f64 {
        self.bins.iter().map(|b| b.density * b.width()).sum()
    }
}

/// Builds a density histogram of the finite values in `values`.
///
/// When every value is equal the range is widened to `[v − 0.5, v + 0.5]`.
///
/// # Errors
///
/// - [`StatisticsError::ZeroBins`] when `bins` is zero
/// - [`StatisticsError::InsufficientData`] when there are no finite values
///
/// # Examples
/// ```
/// use limit_core::math::density_histogram;
///
/// let hist = density_histogram(&[0.0, 0.5, 1.0, 1.0], 2).unwrap();
/// assert_eq!(hist.bins()[0].count, 1);
/// assert_eq!(hist.bins()[1].count, 3);
/// assert!((hist.area() - 1.0).abs() < 1e-12);
/// ```
pub fn density_histogram(values: &[f64], bins: usize) -> Result<DensityHistogram, StatisticsError> {
    if bins == 0 {
        return Err(StatisticsError::ZeroBins);
    }

    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return Err(StatisticsError::InsufficientData { got: 0, need: 1 });
    }

    let (mut lo, mut hi) = finite
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bins as f64;
    let mut counts = vec![0usize; bins];
    for &v in &finite {
        let idx = (((v - lo) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    let total = finite.len();
    let norm = total as f64 * width;
    let bins = counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            left: lo + i as f64 * width,
            right: lo + (i + 1) as f64 * width,
            count,
            density: count as f64 / norm,
        })
        .collect();

    Ok(DensityHistogram { bins, total })
}
