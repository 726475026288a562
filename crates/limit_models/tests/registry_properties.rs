//! Registry-level properties.
//!
//! 1. **Moments**: every entry matches the closed-form formulas
//! 2. **Applicability**: CLT ⟹ SLLN, and the expected flag table
//! 3. **Samplers**: empirical means agree with finite theoretical means

use approx::assert_relative_eq;
use limit_core::Moment;
use limit_models::{DistributionKind, Registry, Theorem};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::Distribution;

fn pareto_mean(alpha: f64, xm: f64) -> Moment {
    if alpha > 1.0 {
        Moment::Finite(alpha * xm / (alpha - 1.0))
    } else {
        Moment::Infinite
    }
}

fn pareto_variance(alpha: f64, xm: f64) -> Moment {
    if alpha > 2.0 {
        Moment::Finite(alpha * xm * xm / ((alpha - 1.0).powi(2) * (alpha - 2.0)))
    } else {
        Moment::Infinite
    }
}

// ============================================================================
// Moments
// ============================================================================

#[test]
fn test_declared_moments_match_closed_form() {
    let registry = Registry::standard().unwrap();

    let expected = [
        (DistributionKind::Uniform, Moment::Finite(0.5), Moment::Finite(1.0 / 12.0)),
        (DistributionKind::Exponential, Moment::Finite(1.0), Moment::Finite(1.0)),
        (DistributionKind::Pareto3, pareto_mean(3.0, 1.0), pareto_variance(3.0, 1.0)),
        (DistributionKind::Pareto1_5, pareto_mean(1.5, 1.0), pareto_variance(1.5, 1.0)),
        (DistributionKind::Cauchy, Moment::Undefined, Moment::Undefined),
    ];

    for (kind, mean, variance) in expected {
        let spec = registry.get(kind).unwrap();
        assert_eq!(spec.mean, mean, "{}", spec.name);
        assert_eq!(spec.variance, variance, "{}", spec.name);
    }
}

#[test]
fn test_table_values() {
    let registry = Registry::standard().unwrap();
    let pareto3 = registry.get(DistributionKind::Pareto3).unwrap();
    assert_eq!(pareto3.mean, Moment::Finite(1.5));
    assert_eq!(pareto3.variance, Moment::Finite(0.75));

    let pareto15 = registry.get(DistributionKind::Pareto1_5).unwrap();
    assert_eq!(pareto15.mean, Moment::Finite(3.0));
    assert_eq!(pareto15.variance, Moment::Infinite);

    let uniform = registry.get(DistributionKind::Uniform).unwrap();
    assert_relative_eq!(uniform.std_dev.value().unwrap(), (1.0_f64 / 12.0).sqrt());
}

// ============================================================================
// Applicability
// ============================================================================

#[test]
fn test_clt_implies_slln_for_every_entry() {
    let registry = Registry::standard().unwrap();
    for spec in &registry {
        assert!(!spec.clt_applies || spec.slln_applies, "{}", spec.name);
    }
}

#[test]
fn test_applicability_table() {
    let registry = Registry::standard().unwrap();
    let flags: Vec<(bool, bool)> = registry
        .iter()
        .map(|s| (s.applies(Theorem::Slln), s.applies(Theorem::Clt)))
        .collect();
    assert_eq!(
        flags,
        vec![
            (true, true),
            (true, true),
            (true, true),
            (true, false),
            (false, false)
        ]
    );
}

// ============================================================================
// Samplers
// ============================================================================

#[test]
fn test_finite_variance_samplers_match_means() {
    let registry = Registry::standard().unwrap();
    let mut rng = StdRng::seed_from_u64(2024);

    for spec in registry.iter().filter(|s| s.clt_applies) {
        let mean = spec.mean.value().unwrap();
        let sd = spec.std_dev.value().unwrap();
        let n = 100_000;
        let empirical: f64 = (0..n).map(|_| spec.sample(&mut rng)).sum::<f64>() / n as f64;
        // Six standard errors.
        let tol = 6.0 * sd / (n as f64).sqrt();
        assert!(
            (empirical - mean).abs() < tol,
            "{}: empirical {empirical} vs {mean} (tol {tol})",
            spec.name
        );
    }
}

#[test]
fn test_preview_is_seed_deterministic() {
    let registry = Registry::standard().unwrap();
    for spec in &registry {
        assert_eq!(spec.preview(5, 42), spec.preview(5, 42));
        assert_ne!(spec.preview(5, 42), spec.preview(5, 43));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// Pareto samples never fall below the scale parameter.
    #[test]
    fn prop_pareto_support(seed in any::<u64>()) {
        let registry = Registry::standard().unwrap();
        for kind in [DistributionKind::Pareto3, DistributionKind::Pareto1_5] {
            let spec = registry.get(kind).unwrap();
            for x in spec.preview(200, seed) {
                prop_assert!(x >= 1.0);
            }
        }
    }
}
