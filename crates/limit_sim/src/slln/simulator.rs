//! SLLN simulator.

use limit_core::math::cumulative::cumulative_mean;
use limit_core::types::Moment;
use limit_models::{DistributionSpec, Registry};
use rand_distr::Distribution;
use tracing::{debug, info, warn};

use super::config::SllnConfig;
use crate::result::ConvergenceResult;
use crate::rng::SimRng;

/// One registry entry and its running-mean result.
#[derive(Debug, Clone)]
pub struct SllnAnalysis {
    /// The simulated distribution.
    pub spec: DistributionSpec,
    /// Running mean and diagnostics.
    pub result: ConvergenceResult,
}

/// Running-mean simulator.
///
/// Each call to [`run`](Self::run) seeds a fresh generator with the
/// configured seed, so repeated runs and different distributions all see
/// the same underlying random stream.
///
/// # Examples
///
/// ```rust
/// use limit_core::Moment;
/// use limit_models::FnSampler;
/// use limit_sim::slln::{SllnConfig, SllnSimulator};
/// use rand::RngCore;
///
/// // Any closure over the generator can be simulated.
/// let coin = FnSampler(|rng: &mut dyn RngCore| (rng.next_u32() & 1) as f64);
/// let sim = SllnSimulator::new(SllnConfig::builder().n_samples(4_000).build().unwrap());
/// let result = sim.run(&coin, Moment::Finite(0.5));
/// assert!(result.absolute_error.unwrap() < 0.05);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SllnSimulator {
    config: SllnConfig,
}

impl SllnSimulator {
    /// Creates a simulator with the given configuration.
    pub fn new(config: SllnConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    #[inline]
    pub fn config(&self) -> &SllnConfig {
        &self.config
    }

    /// Draws `n_samples` values from `source` and tracks the running mean
    /// against `true_mean`.
    pub fn run<D: Distribution<f64>>(&self, source: &D, true_mean: Moment) -> ConvergenceResult {
        let mut rng = SimRng::from_seed(self.config.seed());
        let samples = rng.draw(source, self.config.n_samples());
        let result =
            ConvergenceResult::from_series(cumulative_mean(&samples), true_mean, self.config.tolerance());

        debug!(
            seed = rng.seed(),
            n = result.len(),
            final_mean = result.final_value,
            volatility = result.volatility,
            "SLLN run complete"
        );
        result
    }

    /// Runs one registry entry.
    pub fn analyse(&self, spec: &DistributionSpec) -> SllnAnalysis {
        let result = self.run(spec, spec.mean);
        match result.true_value {
            Some(_) => info!(
                distribution = spec.name,
                final_mean = result.final_value,
                error = result.absolute_error,
                "Simulated running mean"
            ),
            None => warn!(
                distribution = spec.name,
                volatility = result.volatility,
                "Mean is {}; running mean has no target",
                spec.mean
            ),
        }
        SllnAnalysis {
            spec: spec.clone(),
            result,
        }
    }

    /// Runs every registry entry in registry order, re-seeding for each.
    pub fn analyse_all(&self, registry: &Registry) -> Vec<SllnAnalysis> {
        registry.iter().map(|spec| self.analyse(spec)).collect()
    }
}
