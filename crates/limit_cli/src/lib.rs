//! # limit_cli (S: Entry Point)
//!
//! Command implementations behind the `limitlab` binary.
//!
//! Each command reads a validated [`LabConfig`], runs the matching
//! simulator, prints its tables to stdout, and writes its figures below
//! the configured results directory:
//!
//! - `setup`: create the output directory skeleton
//! - `moments`: moment table, theorem implications, optional sampler preview
//! - `slln`: running-mean analysis of every (or one) registry distribution
//! - `slln-demo`: single uniform running-mean chart
//! - `clt`: standardised-sum histograms and Q-Q plots
//! - `pi`: Monte Carlo estimate of π
//! - `all`: everything above, in that order

#![deny(missing_docs)]

pub mod commands;
pub mod config;
pub mod error;

pub use config::LabConfig;
pub use error::{CliError, Result};
