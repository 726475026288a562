//! # limit_sim (L3: Convergence Simulators)
//!
//! Seeded simulations of the limit theorems.
//!
//! This crate provides:
//! - A reproducible random number generator ([`rng::SimRng`])
//! - The Strong Law of Large Numbers simulator ([`slln::SllnSimulator`])
//! - The Central Limit Theorem simulator ([`clt::CltSimulator`])
//! - The Monte Carlo estimator of π ([`pi::PiEstimator`])
//!
//! Every simulator takes an immutable configuration built through a
//! validating builder and owns its seed; no global random state is used.
//!
//! ## Example
//!
//! ```rust
//! use limit_models::Registry;
//! use limit_sim::slln::{SllnConfig, SllnSimulator};
//!
//! let registry = Registry::standard().unwrap();
//! let uniform = registry.lookup("uniform").unwrap();
//!
//! let config = SllnConfig::builder().n_samples(5_000).seed(7).build().unwrap();
//! let result = SllnSimulator::new(config).run(uniform, uniform.mean);
//!
//! assert_eq!(result.len(), 5_000);
//! assert!(result.absolute_error.unwrap() < 0.05);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod clt;
pub mod error;
pub mod pi;
pub mod result;
pub mod rng;
pub mod slln;

pub use error::{ConfigError, SimulationError};
pub use result::{ConvergenceResult, Verdict};

/// Upper bound on sample, trial, and point counts.
pub const MAX_SAMPLES: usize = 50_000_000;

/// Default seed shared by every simulator configuration.
pub const DEFAULT_SEED: u64 = 42;

/// Default convergence tolerance.
pub const DEFAULT_TOLERANCE: f64 = 0.01;

pub(crate) fn validate_count(count: usize) -> Result<(), ConfigError> {
    if count == 0 || count > MAX_SAMPLES {
        return Err(ConfigError::InvalidSampleCount(count));
    }
    Ok(())
}

pub(crate) fn validate_tolerance(tolerance: f64) -> Result<(), ConfigError> {
    if !tolerance.is_finite() || tolerance <= 0.0 {
        return Err(ConfigError::InvalidTolerance(tolerance));
    }
    Ok(())
}
