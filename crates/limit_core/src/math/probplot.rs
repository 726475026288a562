//! Normal probability (Q-Q) plots.
//!
//! Ordered observations are paired with theoretical standard normal
//! quantiles of Filliben's order-statistic medians, and a least-squares
//! line is fitted through the pairs. The correlation of the pairs measures
//! how close the sample is to normal: `r² → 1` as the points approach a
//! straight line.

use statrs::statistics::Statistics;

use super::normal::norm_ppf;
use crate::types::StatisticsError;

/// Points and least-squares fit of a normal probability plot.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProbabilityPlot {
    /// Theoretical standard normal quantiles (x axis), ascending.
    pub theoretical: Vec<f64>,
    /// Ordered sample values (y axis), ascending.
    pub ordered: Vec<f64>,
    /// Slope of the least-squares line.
    pub slope: f64,
    /// Intercept of the least-squares line.
    pub intercept: f64,
    /// Pearson correlation of the pairs.
    pub r: f64,
}

impl ProbabilityPlot {
    /// Coefficient of determination of the fitted line.
    #[inline]
    pub fn r_squared(&self) -> f64 {
        self.r * self.r
    }

    /// Fitted line evaluated at `x`.
    #[inline]
    pub fn fitted(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    /// Largest absolute gap between an ordered value and the identity line
    /// at the two extreme points.
    pub fn endpoint_deviation(&self) -> f64 {
        match (self.theoretical.first(), self.ordered.first()) {
            (Some(&x0), Some(&y0)) => {
                let last = self.theoretical.len() - 1;
                let tail = (self.ordered[last] - self.theoretical[last]).abs();
                (y0 - x0).abs().max(tail)
            }
            _ => 0.0,
        }
    }
}

/// Filliben's estimates of the uniform order-statistic medians.
///
/// `m[n-1] = 0.5^(1/n)`, `m[0] = 1 − m[n-1]`, and
/// `m[i] = (i + 1 − 0.3175) / (n + 0.365)` in between.
///
/// # Examples
/// ```
/// use limit_core::math::filliben_medians;
///
/// let m = filliben_medians(3);
/// assert!((m[1] - 0.5).abs() < 1e-12);
/// assert!((m[0] + m[2] - 1.0).abs() < 1e-12);
/// ```
pub fn filliben_medians(n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    let nf = n as f64;
    let upper = 0.5_f64.powf(1.0 / nf);
    (0..n)
        .map(|i| {
            if i == n - 1 {
                upper
            } else if i == 0 {
                1.0 - upper
            } else {
                (i as f64 + 1.0 - 0.3175) / (nf + 0.365)
            }
        })
        .collect()
}

/// Builds a normal probability plot of the finite values in `values`.
///
/// # Errors
///
/// [`StatisticsError::InsufficientData`] with fewer than two finite values.
///
/// # Examples
/// ```
/// use limit_core::math::normal_probability_plot;
///
/// let plot = normal_probability_plot(&[-1.2, 0.1, 0.4, -0.3, 1.1]).unwrap();
/// assert_eq!(plot.ordered, vec![-1.2, -0.3, 0.1, 0.4, 1.1]);
/// assert!(plot.r_squared() > 0.9);
/// ```
pub fn normal_probability_plot(values: &[f64]) -> Result<ProbabilityPlot, StatisticsError> {
    let mut ordered: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if ordered.len() < 2 {
        return Err(StatisticsError::InsufficientData {
            got: ordered.len(),
            need: 2,
        });
    }
    ordered.sort_by(f64::total_cmp);

    let theoretical: Vec<f64> = filliben_medians(ordered.len())
        .into_iter()
        .map(norm_ppf)
        .collect();

    let x_mean = theoretical.iter().mean();
    let y_mean = ordered.iter().mean();
    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (&x, &y) in theoretical.iter().zip(ordered.iter()) {
        let dx = x - x_mean;
        let dy = y - y_mean;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    let slope = sxy / sxx;
    let intercept = y_mean - slope * x_mean;
    let r = if syy > 0.0 { sxy / (sxx * syy).sqrt() } else { 0.0 };

    Ok(ProbabilityPlot {
        theoretical,
        ordered,
        slope,
        intercept,
        r,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_medians_single_point() {
        assert_eq!(filliben_medians(1), vec![0.5]);
        assert!(filliben_medians(0).is_empty());
    }

    #[test]
    fn test_medians_ascending_and_symmetric() {
        let m = filliben_medians(100);
        for w in m.windows(2) {
            assert!(w[0] < w[1]);
        }
        for i in 0..50 {
            assert_abs_diff_eq!(m[i] + m[99 - i], 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_exact_quantiles_give_identity_fit() {
        let quantiles: Vec<f64> = filliben_medians(200).into_iter().map(norm_ppf).collect();
        let plot = normal_probability_plot(&quantiles).unwrap();
        assert_abs_diff_eq!(plot.slope, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(plot.intercept, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(plot.r_squared(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(plot.endpoint_deviation(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(plot.fitted(1.0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_affine_sample_recovers_scale_and_location() {
        let quantiles: Vec<f64> = filliben_medians(50)
            .into_iter()
            .map(|p| 3.0 + 2.0 * norm_ppf(p))
            .collect();
        let plot = normal_probability_plot(&quantiles).unwrap();
        assert_abs_diff_eq!(plot.slope, 2.0, epsilon = 1e-10);
        assert_abs_diff_eq!(plot.intercept, 3.0, epsilon = 1e-10);
    }

    #[test]
    fn test_insufficient_data() {
        assert_eq!(
            normal_probability_plot(&[1.0, f64::NAN]),
            Err(StatisticsError::InsufficientData { got: 1, need: 2 })
        );
    }

    #[test]
    fn test_constant_sample_has_zero_correlation() {
        let plot = normal_probability_plot(&[4.0; 10]).unwrap();
        assert_eq!(plot.r, 0.0);
        assert_abs_diff_eq!(plot.slope, 0.0, epsilon = 1e-12);
    }
}
