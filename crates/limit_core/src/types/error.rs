//! Error types for structured error handling.
//!
//! This module provides:
//! - `LookupError`: errors from distribution registry lookups
//! - `MomentError`: errors from closed-form moment evaluation
//! - `StatisticsError`: errors from histogram and probability plot construction

use thiserror::Error;

use super::moment::Moment;

/// Registry lookup errors.
///
/// # Examples
/// ```
/// use limit_core::types::LookupError;
///
/// let err = LookupError::UnknownDistribution {
///     name: "Gamma".to_string(),
///     known: vec!["Uniform(0,1)".to_string(), "Cauchy".to_string()],
/// };
/// assert_eq!(
///     err.to_string(),
///     "Unknown distribution 'Gamma'. Known distributions: Uniform(0,1), Cauchy"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The requested name matches no registry entry.
    #[error("Unknown distribution '{name}'. Known distributions: {}", known.join(", "))]
    UnknownDistribution {
        /// The name that was requested
        name: String,
        /// Display names of every registered distribution
        known: Vec<String>,
    },

    /// The registry holds no entries at all.
    #[error("Distribution registry is empty")]
    EmptyRegistry,
}

/// Moment evaluation errors.
///
/// # Variants
/// - `InvalidParameter`: a distribution parameter is outside its domain
/// - `NotFinite`: a finite moment was required but is infinite or undefined
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MomentError {
    /// Distribution parameter outside its valid domain.
    #[error("Invalid parameter '{name}' = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Offending value
        value: f64,
        /// Constraint that was violated
        reason: &'static str,
    },

    /// A finite moment was required.
    #[error("The {moment} is {state}, a finite value is required")]
    NotFinite {
        /// Which moment ("mean" or "variance")
        moment: &'static str,
        /// The actual state
        state: Moment,
    },
}

/// Sample statistics errors.
///
/// # Examples
/// ```
/// use limit_core::types::StatisticsError;
///
/// let err = StatisticsError::InsufficientData { got: 1, need: 2 };
/// assert!(err.to_string().contains("got 1"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatisticsError {
    /// Not enough finite observations.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of finite observations provided
        got: usize,
        /// Minimum number required
        need: usize,
    },

    /// A histogram needs at least one bin.
    #[error("Histogram bin count must be positive")]
    ZeroBins,
}
