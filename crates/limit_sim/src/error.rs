//! Error types for the simulators.
//!
//! - [`ConfigError`]: invalid simulation parameters, rejected at build time
//! - [`SimulationError`]: runtime failures of a simulation

use std::fmt;

use limit_core::types::{MomentError, StatisticsError};
use thiserror::Error;

/// Configuration error for the simulators.
///
/// These errors occur during construction when invalid parameters are provided.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Sample or point count outside [1, MAX_SAMPLES].
    InvalidSampleCount(usize),
    /// Convergence tolerance not finite and positive.
    InvalidTolerance(f64),
    /// Invalid parameter value with name and description.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSampleCount(count) => {
                write!(
                    f,
                    "Invalid sample count {}: must be in range [1, {}]",
                    count,
                    crate::MAX_SAMPLES
                )
            }
            Self::InvalidTolerance(tol) => {
                write!(f, "Invalid tolerance {}: must be finite and positive", tol)
            }
            Self::InvalidParameter { name, value } => {
                write!(f, "Invalid parameter '{}': {}", name, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Runtime simulation error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// The distribution does not meet the theorem's moment conditions.
    #[error("{theorem} does not apply to {distribution}: requires {requirement}")]
    TheoremNotApplicable {
        /// Distribution display name
        distribution: String,
        /// Theorem abbreviation
        theorem: &'static str,
        /// Moment requirement in text form
        requirement: &'static str,
    },

    /// Moment evaluation failed.
    #[error(transparent)]
    Moment(#[from] MomentError),

    /// Histogram or probability plot construction failed.
    #[error(transparent)]
    Statistics(#[from] StatisticsError),
}
