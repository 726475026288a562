//! Error types for the limitlab CLI.

use limit_core::types::{LookupError, MomentError};
use limit_report::ReportError;
use limit_sim::SimulationError;
use thiserror::Error;

use crate::config::ConfigError;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Exit status for an unknown distribution name.
pub const EXIT_LOOKUP: u8 = 2;

/// Exit status for every other failure.
pub const EXIT_FAILURE: u8 = 1;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file or value error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Simulator parameter rejected
    #[error("Simulation configuration error: {0}")]
    SimulationConfig(#[from] limit_sim::ConfigError),

    /// Unknown distribution name
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// Registry construction failed
    #[error("Model error: {0}")]
    Model(#[from] MomentError),

    /// Simulation failed
    #[error("Simulation error: {0}")]
    Simulation(#[from] SimulationError),

    /// Figure or directory output failed
    #[error("Report error: {0}")]
    Report(#[from] ReportError),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Lookup(_) => EXIT_LOOKUP,
            _ => EXIT_FAILURE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_exit_code() {
        let err: CliError = LookupError::UnknownDistribution {
            name: "Weibull".to_string(),
            known: vec!["Cauchy".to_string()],
        }
        .into();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("Unknown distribution 'Weibull'"));
    }

    #[test]
    fn test_other_exit_code() {
        let err: CliError = ConfigError::Parse("bad".to_string()).into();
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "Configuration error: Parse error: bad");

        let err: CliError = limit_sim::ConfigError::InvalidSampleCount(0).into();
        assert_eq!(err.exit_code(), 1);
    }
}
