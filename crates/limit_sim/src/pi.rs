//! Monte Carlo estimation of π.
//!
//! Points are drawn uniformly on the unit square; the share landing inside
//! the quarter disc `x² + y² ≤ 1` estimates `π / 4`.

use limit_core::math::cumulative::running_proportion;
use limit_core::types::Moment;
use tracing::info;

use crate::error::ConfigError;
use crate::result::ConvergenceResult;
use crate::rng::SimRng;
use crate::{validate_count, validate_tolerance, DEFAULT_SEED, DEFAULT_TOLERANCE};

/// Default number of points.
pub const DEFAULT_POINTS: usize = 10_000;

/// π estimator configuration.
///
/// # Examples
///
/// ```rust
/// use limit_sim::pi::PiConfig;
///
/// let config = PiConfig::builder().n_points(500).build().unwrap();
/// assert_eq!(config.n_points(), 500);
/// assert_eq!(config.seed(), 42);
///
/// assert!(PiConfig::builder().n_points(0).build().is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PiConfig {
    n_points: usize,
    seed: u64,
    tolerance: f64,
}

impl Default for PiConfig {
    fn default() -> Self {
        Self {
            n_points: DEFAULT_POINTS,
            seed: DEFAULT_SEED,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl PiConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> PiConfigBuilder {
        PiConfigBuilder::default()
    }

    /// Number of points.
    #[inline]
    pub fn n_points(&self) -> usize {
        self.n_points
    }

    /// Seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Tolerance for the convergence index.
    #[inline]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `n_points` or `tolerance` is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_count(self.n_points)?;
        validate_tolerance(self.tolerance)
    }
}

/// Builder for [`PiConfig`].
#[derive(Clone, Debug, Default)]
pub struct PiConfigBuilder {
    n_points: Option<usize>,
    seed: Option<u64>,
    tolerance: Option<f64>,
}

impl PiConfigBuilder {
    /// Sets the number of points.
    #[inline]
    pub fn n_points(mut self, n_points: usize) -> Self {
        self.n_points = Some(n_points);
        self
    }

    /// Sets the seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the tolerance.
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
    pub fn build(self) -> Result<PiConfig, ConfigError> {
        let defaults = PiConfig::default();
        let config = PiConfig {
            n_points: self.n_points.unwrap_or(defaults.n_points),
            seed: self.seed.unwrap_or(defaults.seed),
            tolerance: self.tolerance.unwrap_or(defaults.tolerance),
        };

        config.validate()?;
        Ok(config)
    }
}

/// Outcome of a π estimation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PiEstimate {
    /// Points inside the quarter disc.
    pub inside: usize,
    /// Running estimate against π.
    pub result: ConvergenceResult,
}

impl PiEstimate {
    /// Final estimate.
    #[inline]
    pub fn estimate(&self) -> f64 {
        self.result.final_value
    }
}

/// Monte Carlo π estimator.
#[derive(Debug, Clone, Default)]
pub struct PiEstimator {
    config: PiConfig,
}

impl PiEstimator {
    /// Creates an estimator with the given configuration.
    pub fn new(config: PiConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    #[inline]
    pub fn config(&self) -> &PiConfig {
        &self.config
    }

    /// Draws every x-coordinate, then every y-coordinate, and tracks the
    /// running estimate `4 · inside / points`.
    pub fn run(&self) -> PiEstimate {
        let n = self.config.n_points();
        let mut rng = SimRng::from_seed(self.config.seed());

        let mut xs = vec![0.0; n];
        let mut ys = vec![0.0; n];
        rng.fill_uniform(&mut xs);
        rng.fill_uniform(&mut ys);

        let hits: Vec<bool> = xs
            .iter()
            .zip(&ys)
            .map(|(x, y)| x * x + y * y <= 1.0)
            .collect();
        let inside = hits.iter().filter(|&&h| h).count();

        let result = ConvergenceResult::from_series(
            running_proportion(&hits, 4.0),
            Moment::Finite(std::f64::consts::PI),
            self.config.tolerance(),
        );
        info!(
            points = n,
            inside,
            estimate = result.final_value,
            "Estimated π"
        );

        PiEstimate { inside, result }
    }
}
