//! Running statistics over a sample sequence.
//!
//! Element `i` of every running statistic summarises the first `i + 1`
//! observations. All routines are single forward passes.

use num_traits::Float;
use statrs::statistics::Statistics;

/// Number of trailing values used for the volatility indicator.
pub const VOLATILITY_WINDOW: usize = 1000;

/// Running arithmetic mean.
///
/// `result[i] = (x[0] + ... + x[i]) / (i + 1)`. An empty input yields an
/// empty output.
///
/// # Examples
/// ```
/// use limit_core::math::cumulative_mean;
///
/// let running = cumulative_mean(&[2.0_f64, 4.0, 6.0]);
/// assert_eq!(running, vec![2.0, 3.0, 4.0]);
/// ```
pub fn cumulative_mean<T: Float>(samples: &[T]) -> Vec<T> {
    let mut sum = T::zero();
    let mut count = T::zero();
    samples
        .iter()
        .map(|&x| {
            sum = sum + x;
            count = count + T::one();
            sum / count
        })
        .collect()
}

/// Running proportion of `true` values, scaled by `scale`.
///
/// `result[i] = scale * hits(0..=i) / (i + 1)`. With `scale = 4` and hits
/// marking points inside the unit quarter circle this is the running
/// Monte Carlo estimate of π.
///
/// # Examples
/// ```
/// use limit_core::math::running_proportion;
///
/// let running = running_proportion(&[true, false, true, true], 1.0);
/// assert_eq!(running, vec![1.0, 0.5, 2.0 / 3.0, 0.75]);
/// ```
pub fn running_proportion(hits: &[bool], scale: f64) -> Vec<f64> {
    let mut inside = 0usize;
    hits.iter()
        .enumerate()
        .map(|(i, &hit)| {
            if hit {
                inside += 1;
            }
            scale * inside as f64 / (i + 1) as f64
        })
        .collect()
}

/// First index whose value lies strictly within `tolerance` of `target`.
///
/// Returns `series.len()` when no element qualifies. This is the first
/// entry into the tolerance band; later excursions out of the band are not
/// checked.
///
/// # Examples
/// ```
/// use limit_core::math::convergence_index;
///
/// let series = [0.8_f64, 0.6, 0.505, 0.7];
/// assert_eq!(convergence_index(&series, 0.5, 0.01), 2);
/// assert_eq!(convergence_index(&series, 0.0, 0.01), 4);
/// ```
pub fn convergence_index<T: Float>(series: &[T], target: T, tolerance: T) -> usize {
    series
        .iter()
        .position(|&v| (v - target).abs() < tolerance)
        .unwrap_or(series.len())
}

/// Population standard deviation of the last `window` values.
///
/// Uses the whole series when it is shorter than `window`. Returns `NaN`
/// for an empty series.
///
/// # Examples
/// ```
/// use limit_core::math::tail_volatility;
///
/// let flat = vec![1.0; 5000];
/// assert_eq!(tail_volatility(&flat, 1000), 0.0);
/// ```
pub fn tail_volatility(series: &[f64], window: usize) -> f64 {
    let start = series.len().saturating_sub(window);
    series[start..].iter().population_std_dev()
}
