//! Convergence results shared by the SLLN simulator and the π estimator.

use limit_core::math::cumulative::{convergence_index, tail_volatility, VOLATILITY_WINDOW};
use limit_core::types::Moment;

/// Textual convergence verdict for summary tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verdict {
    /// Final error below tolerance.
    Converged,
    /// Final error at or above tolerance.
    Slow,
    /// No target to converge to.
    NoConvergence,
}

impl Verdict {
    /// Label used in the summary table.
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Converged => "✓ Converged",
            Verdict::Slow => "~ Slow",
            Verdict::NoConvergence => "✗ No convergence",
        }
    }
}

/// A running statistic and its convergence diagnostics.
///
/// # Examples
///
/// ```rust
/// use limit_core::Moment;
/// use limit_sim::{ConvergenceResult, Verdict};
///
/// let result = ConvergenceResult::from_series(vec![0.9, 0.6, 0.52, 0.505], Moment::Finite(0.5), 0.01);
/// assert_eq!(result.convergence_index, Some(3));
/// assert_eq!(result.verdict(), Verdict::Converged);
///
/// let cauchy = ConvergenceResult::from_series(vec![3.0, -1.0], Moment::Undefined, 0.01);
/// assert_eq!(cauchy.convergence_index, None);
/// assert_eq!(cauchy.verdict(), Verdict::NoConvergence);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConvergenceResult {
    /// Running statistic; element `i` uses the first `i + 1` samples.
    pub cumulative: Vec<f64>,
    /// Last element of `cumulative`.
    pub final_value: f64,
    /// Theoretical target, when finite.
    pub true_value: Option<f64>,
    /// `|final_value − true_value|`.
    pub absolute_error: Option<f64>,
    /// First index within tolerance of the target, or `len` if never.
    pub convergence_index: Option<usize>,
    /// Tolerance used for the index and the verdict.
    pub tolerance: f64,
    /// Population standard deviation of the trailing running values.
    pub volatility: f64,
}

impl ConvergenceResult {
    /// Derives the diagnostics of `cumulative` against `target`.
    ///
    /// An infinite or undefined target skips the error and the convergence
    /// scan. `final_value` is `NaN` for an empty series.
    pub fn from_series(cumulative: Vec<f64>, target: Moment, tolerance: f64) -> Self {
        let final_value = cumulative.last().copied().unwrap_or(f64::NAN);
        let true_value = target.value();
        let absolute_error = true_value.map(|mu| (final_value - mu).abs());
        let convergence_index = true_value.map(|mu| convergence_index(&cumulative, mu, tolerance));
        let volatility = tail_volatility(&cumulative, VOLATILITY_WINDOW);

        Self {
            cumulative,
            final_value,
            true_value,
            absolute_error,
            convergence_index,
            tolerance,
            volatility,
        }
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    /// Whether the series is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }

    /// Whether the convergence scan found an index inside the series.
    pub fn reached_tolerance(&self) -> bool {
        matches!(self.convergence_index, Some(i) if i < self.len())
    }

    /// Whether the trailing volatility is below the tolerance.
    pub fn is_stable(&self) -> bool {
        self.volatility < self.tolerance
    }

    /// Summary verdict from the final error.
    pub fn verdict(&self) -> Verdict {
        match self.absolute_error {
            Some(err) if err < self.tolerance => Verdict::Converged,
            Some(_) => Verdict::Slow,
            None => Verdict::NoConvergence,
        }
    }

    /// Mean absolute deviation from the target over the last `window` values.
    pub fn tail_mean_abs_error(&self, window: usize) -> Option<f64> {
        let mu = self.true_value?;
        let start = self.len().saturating_sub(window);
        let tail = &self.cumulative[start..];
        if tail.is_empty() {
            return None;
        }
        Some(tail.iter().map(|v| (v - mu).abs()).sum::<f64>() / tail.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_within_tolerance_reports_len() {
        let result = ConvergenceResult::from_series(vec![0.7; 20], Moment::Finite(0.5), 0.01);
        assert_eq!(result.convergence_index, Some(20));
        assert!(!result.reached_tolerance());
        assert_eq!(result.verdict(), Verdict::Slow);
    }

    #[test]
    fn test_constant_at_target() {
        let result = ConvergenceResult::from_series(vec![0.5; 20], Moment::Finite(0.5), 0.01);
        assert_eq!(result.convergence_index, Some(0));
        assert_eq!(result.absolute_error, Some(0.0));
        assert!(result.is_stable());
        assert_eq!(result.tail_mean_abs_error(10), Some(0.0));
    }

    #[test]
    fn test_infinite_target_skips_scan() {
        let result = ConvergenceResult::from_series(vec![1.0, 2.0], Moment::Infinite, 0.01);
        assert_eq!(result.true_value, None);
        assert_eq!(result.absolute_error, None);
        assert_eq!(result.tail_mean_abs_error(10), None);
    }

    #[test]
    fn test_empty_series() {
        let result = ConvergenceResult::from_series(Vec::new(), Moment::Finite(0.5), 0.01);
        assert!(result.is_empty());
        assert!(result.final_value.is_nan());
        assert_eq!(result.convergence_index, Some(0));
        assert!(!result.reached_tolerance());
    }

    #[test]
    fn test_verdict_labels() {
        assert_eq!(Verdict::Converged.label(), "✓ Converged");
        assert_eq!(Verdict::Slow.label(), "~ Slow");
        assert_eq!(Verdict::NoConvergence.label(), "✗ No convergence");
    }
}
