//! CLT simulator.

use limit_core::math::histogram::{density_histogram, DensityHistogram};
use limit_core::math::normal::standardise_sum;
use limit_core::math::probplot::{normal_probability_plot, ProbabilityPlot};
use limit_models::{DistributionSpec, Theorem};
use rand_distr::Distribution;
use tracing::{debug, info};

use super::config::CltConfig;
use crate::error::SimulationError;
use crate::rng::SimRng;

/// Standardised sums for one sample size.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CltTrial {
    /// Sample size `n`.
    pub sample_size: usize,
    /// One z-score per trial, in trial order.
    pub z_scores: Vec<f64>,
    /// Mean of the z-scores.
    pub z_mean: f64,
    /// Population variance of the z-scores.
    pub z_variance: f64,
    /// Density histogram of the z-scores.
    pub histogram: DensityHistogram,
    /// Normal probability plot of the z-scores.
    pub qq: ProbabilityPlot,
}

/// All trials for one distribution.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CltReport {
    /// Display name of the simulated distribution.
    pub distribution: String,
    /// One entry per configured sample size, in order.
    pub trials: Vec<CltTrial>,
}

/// Standardised-sum simulator.
///
/// A single generator is seeded once per [`run`](Self::run) and consumed
/// across all sample sizes in order. Each grid is drawn trial by trial.
#[derive(Debug, Clone, Default)]
pub struct CltSimulator {
    config: CltConfig,
}

impl CltSimulator {
    /// Creates a simulator with the given configuration.
    pub fn new(config: CltConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    #[inline]
    pub fn config(&self) -> &CltConfig {
        &self.config
    }

    /// Simulates a registry distribution.
    ///
    /// # Errors
    ///
    /// - [`SimulationError::TheoremNotApplicable`] unless mean and variance
    ///   are both finite
    /// - [`SimulationError::Statistics`] if the summaries cannot be built
    ///
    /// # Examples
    ///
    /// ```rust
    /// use limit_models::Registry;
    /// use limit_sim::clt::{CltConfig, CltSimulator};
    ///
    /// let registry = Registry::standard().unwrap();
    /// let sim = CltSimulator::new(CltConfig::builder().sample_sizes(vec![30]).build().unwrap());
    ///
    /// let report = sim.run(registry.lookup("exponential").unwrap()).unwrap();
    /// assert_eq!(report.trials[0].z_scores.len(), 1_000);
    ///
    /// assert!(sim.run(registry.lookup("cauchy").unwrap()).is_err());
    /// ```
    pub fn run(&self, spec: &DistributionSpec) -> Result<CltReport, SimulationError> {
        if !spec.clt_applies {
            return Err(SimulationError::TheoremNotApplicable {
                distribution: spec.name.to_string(),
                theorem: Theorem::Clt.abbreviation(),
                requirement: Theorem::Clt.requirement(),
            });
        }
        let mu = spec.mean.require_finite("mean")?;
        let sigma = spec.std_dev.require_finite("standard deviation")?;

        let trials = self.simulate(spec, mu, sigma)?;
        info!(
            distribution = spec.name,
            sizes = trials.len(),
            "Simulated standardised sums"
        );
        Ok(CltReport {
            distribution: spec.name.to_string(),
            trials,
        })
    }

    /// Simulates any source with known mean `mu` and standard deviation
    /// `sigma`.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::Statistics`] if the summaries cannot be
    /// built.
    pub fn simulate<D: Distribution<f64>>(
        &self,
        source: &D,
        mu: f64,
        sigma: f64,
    ) -> Result<Vec<CltTrial>, SimulationError> {
        let mut rng = SimRng::from_seed(self.config.seed());
        let m = self.config.trials();

        self.config
            .sample_sizes()
            .iter()
            .map(|&n| {
                let grid = rng.draw(source, m * n);
                let z_scores: Vec<f64> = grid
                    .chunks_exact(n)
                    .map(|row| standardise_sum(row.iter().sum(), n, mu, sigma))
                    .collect();
                self.summarise(n, z_scores)
            })
            .collect()
    }

    fn summarise(&self, sample_size: usize, z_scores: Vec<f64>) -> Result<CltTrial, SimulationError> {
        let count = z_scores.len() as f64;
        let z_mean = z_scores.iter().sum::<f64>() / count;
        let z_variance = z_scores.iter().map(|z| (z - z_mean).powi(2)).sum::<f64>() / count;

        let histogram = density_histogram(&z_scores, self.config.histogram_bins())?;
        let qq = normal_probability_plot(&z_scores)?;

        debug!(
            n = sample_size,
            z_mean,
            z_variance,
            r_squared = qq.r_squared(),
            "CLT sample size complete"
        );

        Ok(CltTrial {
            sample_size,
            z_scores,
            z_mean,
            z_variance,
            histogram,
            qq,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use limit_models::{DistributionKind, FnSampler, Registry};
    use rand::RngCore;

    #[test]
    fn test_rejects_infinite_variance() {
        let registry = Registry::standard().unwrap();
        let pareto = registry.get(DistributionKind::Pareto1_5).unwrap();
        let err = CltSimulator::default().run(pareto).unwrap_err();

        assert!(matches!(
            err,
            SimulationError::TheoremNotApplicable { theorem: "CLT", .. }
        ));
        assert!(err.to_string().contains("Pareto(α=1.5, xₘ=1)"));
    }

    #[test]
    fn test_trial_shapes() {
        let config = CltConfig::builder()
            .sample_sizes(vec![3, 7])
            .trials(200)
            .histogram_bins(12)
            .build()
            .unwrap();
        let spec = DistributionSpec::from_kind(DistributionKind::Uniform).unwrap();
        let report = CltSimulator::new(config).run(&spec).unwrap();

        assert_eq!(report.distribution, "Uniform(0,1)");
        let sizes: Vec<_> = report.trials.iter().map(|t| t.sample_size).collect();
        assert_eq!(sizes, vec![3, 7]);
        for trial in &report.trials {
            assert_eq!(trial.z_scores.len(), 200);
            assert_eq!(trial.histogram.bins().len(), 12);
            assert_eq!(trial.histogram.total(), 200);
            assert_eq!(trial.qq.ordered.len(), 200);
        }
    }

    #[test]
    fn test_standardisation_uses_row_sums() {
        // Alternating source: each row of two sums to exactly 1.
        let counter = std::cell::Cell::new(0_u32);
        let alternating = FnSampler(|_: &mut dyn RngCore| {
            let i = counter.get();
            counter.set(i + 1);
            if i % 2 == 0 {
                0.25
            } else {
                0.75
            }
        });
        let config = CltConfig::builder()
            .sample_sizes(vec![2])
            .trials(10)
            .build()
            .unwrap();
        let trials = CltSimulator::new(config)
            .simulate(&alternating, 0.5, 0.5)
            .unwrap();

        assert!(trials[0].z_scores.iter().all(|z| z.abs() < 1e-12));
        assert!(trials[0].z_variance.abs() < 1e-20);
    }
}
