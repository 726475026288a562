//! Standard normal helpers.
//!
//! Density is evaluated in closed form; the distribution and quantile
//! functions go through the complementary error function from `statrs`.

use statrs::consts::SQRT_2PI;
use statrs::function::erf::{erfc, erfc_inv};
use std::f64::consts::SQRT_2;

/// Standard normal probability density φ(x).
///
/// # Examples
/// ```
/// use limit_core::math::norm_pdf;
///
/// assert!((norm_pdf(0.0) - 0.3989422804014327).abs() < 1e-15);
/// ```
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / SQRT_2PI
}

/// Standard normal cumulative distribution Φ(x).
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}

/// Standard normal quantile function Φ⁻¹(p).
///
/// Returns `-∞` at 0, `+∞` at 1 and `NaN` outside [0, 1].
///
/// # Examples
/// ```
/// use limit_core::math::norm_ppf;
///
/// assert!(norm_ppf(0.5).abs() < 1e-12);
/// assert!((norm_ppf(0.975) - 1.959963984540054).abs() < 1e-9);
/// ```
pub fn norm_ppf(p: f64) -> f64 {
    if !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    if p == 0.0 {
        return f64::NEG_INFINITY;
    }
    if p == 1.0 {
        return f64::INFINITY;
    }
    -SQRT_2 * erfc_inv(2.0 * p)
}

/// Standardises the sum of `n` i.i.d. draws with mean `mu` and standard
/// deviation `sigma`: `z = (sum − n·μ) / (σ·√n)`.
///
/// # Examples
/// ```
/// use limit_core::math::standardise_sum;
///
/// // Two uniform draws summing to exactly their expectation.
/// assert_eq!(standardise_sum(1.0, 2, 0.5, (1.0_f64 / 12.0).sqrt()), 0.0);
/// ```
#[inline]
pub fn standardise_sum(sum: f64, n: usize, mu: f64, sigma: f64) -> f64 {
    let n = n as f64;
    (sum - n * mu) / (sigma * n.sqrt())
}

/// Standard normal density sampled at `points` evenly spaced abscissae on
/// `[lo, hi]`, endpoints included.
///
/// A single point yields `lo`; zero points yield an empty curve.
pub fn normal_density_curve(lo: f64, hi: f64, points: usize) -> Vec<(f64, f64)> {
    match points {
        0 => Vec::new(),
        1 => vec![(lo, norm_pdf(lo))],
        _ => {
            let step = (hi - lo) / (points - 1) as f64;
            (0..points)
                .map(|i| {
                    let x = lo + step * i as f64;
                    (x, norm_pdf(x))
                })
                .collect()
        }
    }
}
