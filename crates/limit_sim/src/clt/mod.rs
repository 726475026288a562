//! Central Limit Theorem simulation.
//!
//! For each sample size `n` the simulator draws `m` independent samples of
//! size `n`, standardises each sum, and summarises the resulting z-scores
//! with a density histogram and a normal probability plot.

mod config;
mod simulator;

pub use config::{CltConfig, CltConfigBuilder, DEFAULT_BINS, DEFAULT_SAMPLE_SIZES, DEFAULT_TRIALS};
pub use simulator::{CltReport, CltSimulator, CltTrial};
