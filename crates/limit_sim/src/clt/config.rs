//! CLT simulation configuration.

use crate::error::ConfigError;
use crate::{validate_count, DEFAULT_SEED};

/// Default sample sizes, in simulation order.
pub const DEFAULT_SAMPLE_SIZES: [usize; 5] = [2, 5, 10, 30, 50];

/// Default number of trials per sample size.
pub const DEFAULT_TRIALS: usize = 1_000;

/// Default histogram bin count.
pub const DEFAULT_BINS: usize = 30;

/// CLT simulation configuration.
///
/// # Examples
///
/// ```rust
/// use limit_sim::clt::CltConfig;
///
/// let config = CltConfig::builder()
///     .sample_sizes(vec![1, 4, 16])
///     .trials(500)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.sample_sizes(), &[1, 4, 16]);
/// assert_eq!(config.histogram_bins(), 30);
///
/// assert!(CltConfig::builder().sample_sizes(vec![]).build().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CltConfig {
    sample_sizes: Vec<usize>,
    trials: usize,
    seed: u64,
    histogram_bins: usize,
}

impl Default for CltConfig {
    fn default() -> Self {
        Self {
            sample_sizes: DEFAULT_SAMPLE_SIZES.to_vec(),
            trials: DEFAULT_TRIALS,
            seed: DEFAULT_SEED,
            histogram_bins: DEFAULT_BINS,
        }
    }
}

impl CltConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> CltConfigBuilder {
        CltConfigBuilder::default()
    }

    /// Sample sizes `n`, in simulation order.
    #[inline]
    pub fn sample_sizes(&self) -> &[usize] {
        &self.sample_sizes
    }

    /// Trials `m` per sample size.
    #[inline]
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Seed of the single generator shared by all sample sizes.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Histogram bin count.
    #[inline]
    pub fn histogram_bins(&self) -> usize {
        self.histogram_bins
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `sample_sizes` is empty or contains an invalid size
    /// - `trials` is below 2 or greater than [`crate::MAX_SAMPLES`]
    /// - `histogram_bins` is 0
    /// - a single grid `trials × n` exceeds [`crate::MAX_SAMPLES`]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_sizes.is_empty() {
            return Err(ConfigError::InvalidParameter {
                name: "sample_sizes",
                value: "must not be empty".to_string(),
            });
        }
        for &n in &self.sample_sizes {
            validate_count(n)?;
        }

        validate_count(self.trials)?;
        // the probability plot fit needs two points
        if self.trials < 2 {
            return Err(ConfigError::InvalidParameter {
                name: "trials",
                value: format!("{} (at least 2 required)", self.trials),
            });
        }

        if self.histogram_bins == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "histogram_bins",
                value: "must be positive".to_string(),
            });
        }

        for &n in &self.sample_sizes {
            validate_count(n.saturating_mul(self.trials))?;
        }
        Ok(())
    }
}

/// Builder for [`CltConfig`].
///
/// Unset fields take the defaults: sizes `[2, 5, 10, 30, 50]`, 1000
/// trials, seed 42, 30 bins.
#[derive(Clone, Debug, Default)]
pub struct CltConfigBuilder {
    sample_sizes: Option<Vec<usize>>,
    trials: Option<usize>,
    seed: Option<u64>,
    histogram_bins: Option<usize>,
}

impl CltConfigBuilder {
    /// Sets the sample sizes.
    #[inline]
    pub fn sample_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.sample_sizes = Some(sizes);
        self
    }

    /// Sets the trials per sample size.
    #[inline]
    pub fn trials(mut self, trials: usize) -> Self {
        self.trials = Some(trials);
        self
    }

    /// Sets the seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the histogram bin count.
    #[inline]
    pub fn histogram_bins(mut self, bins: usize) -> Self {
        self.histogram_bins = Some(bins);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a supplied value is invalid.
    pub fn build(self) -> Result<CltConfig, ConfigError> {
        let defaults = CltConfig::default();
        let config = CltConfig {
            sample_sizes: self.sample_sizes.unwrap_or(defaults.sample_sizes),
            trials: self.trials.unwrap_or(defaults.trials),
            seed: self.seed.unwrap_or(defaults.seed),
            histogram_bins: self.histogram_bins.unwrap_or(defaults.histogram_bins),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = CltConfig::builder().build().unwrap();
        assert_eq!(config.sample_sizes(), &[2, 5, 10, 30, 50]);
        assert_eq!(config.trials(), 1_000);
        assert_eq!(config.seed(), 42);
        assert_eq!(config.histogram_bins(), 30);
    }

    #[test]
    fn test_rejects_empty_sizes() {
        let result = CltConfig::builder().sample_sizes(Vec::new()).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "sample_sizes",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_zero_size() {
        let result = CltConfig::builder().sample_sizes(vec![2, 0]).build();
        assert!(matches!(result, Err(ConfigError::InvalidSampleCount(0))));
    }

    #[test]
    fn test_rejects_zero_and_single_trials() {
        let result = CltConfig::builder().trials(0).build();
        assert!(matches!(result, Err(ConfigError::InvalidSampleCount(0))));

        let result = CltConfig::builder().trials(1).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter { name: "trials", .. })
        ));
    }

    #[test]
    fn test_rejects_zero_bins() {
        let result = CltConfig::builder().histogram_bins(0).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "histogram_bins",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_oversized_grid() {
        let result = CltConfig::builder()
            .sample_sizes(vec![crate::MAX_SAMPLES])
            .trials(2)
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidSampleCount(_))));
    }
}
