//! SLLN simulation configuration.

use crate::error::ConfigError;
use crate::{validate_count, validate_tolerance, DEFAULT_SEED, DEFAULT_TOLERANCE};

/// Default number of samples per distribution.
pub const DEFAULT_SLLN_SAMPLES: usize = 10_000;

/// SLLN simulation configuration.
///
/// Immutable; use [`SllnConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use limit_sim::slln::SllnConfig;
///
/// let config = SllnConfig::builder()
///     .n_samples(2_000)
///     .seed(123)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_samples(), 2_000);
/// assert_eq!(config.seed(), 123);
/// assert_eq!(config.tolerance(), 0.01);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SllnConfig {
    n_samples: usize,
    seed: u64,
    tolerance: f64,
}

impl Default for SllnConfig {
    fn default() -> Self {
        Self {
            n_samples: DEFAULT_SLLN_SAMPLES,
            seed: DEFAULT_SEED,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl SllnConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SllnConfigBuilder {
        SllnConfigBuilder::default()
    }

    /// Number of samples drawn per run.
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Seed for each run.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Convergence tolerance.
    #[inline]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `n_samples` is 0 or greater than [`crate::MAX_SAMPLES`]
    /// - `tolerance` is not finite and positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_count(self.n_samples)?;
        validate_tolerance(self.tolerance)
    }
}

/// Builder for [`SllnConfig`].
///
/// Unset fields take the defaults: 10 000 samples, seed 42, tolerance 0.01.
#[derive(Clone, Debug, Default)]
pub struct SllnConfigBuilder {
    n_samples: Option<usize>,
    seed: Option<u64>,
    tolerance: Option<f64>,
}

impl SllnConfigBuilder {
    /// Sets the number of samples.
    #[inline]
    pub fn n_samples(mut self, n_samples: usize) -> Self {
        self.n_samples = Some(n_samples);
        self
    }

    /// Sets the seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the convergence tolerance.
    #[inline]
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a supplied value is invalid.
    pub fn build(self) -> Result<SllnConfig, ConfigError> {
        let defaults = SllnConfig::default();
        let config = SllnConfig {
            n_samples: self.n_samples.unwrap_or(defaults.n_samples),
            seed: self.seed.unwrap_or(defaults.seed),
            tolerance: self.tolerance.unwrap_or(defaults.tolerance),
        };

        config.validate()?;
        Ok(config)
    }
}
