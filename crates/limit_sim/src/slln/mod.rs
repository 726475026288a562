//! Strong Law of Large Numbers simulation.
//!
//! The simulator draws `n` samples from any [`rand_distr::Distribution<f64>`],
//! computes the running mean, and compares it with the theoretical mean when
//! that mean is finite.
//!
//! - [`SllnConfig`]: sample count, seed, tolerance
//! - [`SllnSimulator`]: single runs and the registry-wide analysis
//! - [`SllnAnalysis`]: one registry entry paired with its result

mod config;
mod simulator;

pub use config::{SllnConfig, SllnConfigBuilder, DEFAULT_SLLN_SAMPLES};
pub use simulator::{SllnAnalysis, SllnSimulator};
