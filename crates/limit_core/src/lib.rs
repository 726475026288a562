//! # limit_core: Statistical Foundation for limitlab
//!
//! ## Layer 1 (Foundation) Role
//!
//! limit_core is the bottom layer of the workspace, providing:
//! - The moment tri-state [`Moment`] (`types::moment`)
//! - Error types: [`LookupError`], [`MomentError`], [`StatisticsError`]
//!   (`types::error`)
//! - Running statistics: cumulative mean, running proportion, convergence
//!   index scan, tail volatility (`math::cumulative`)
//! - Standard normal helpers and CLT standardisation (`math::normal`)
//! - Density histograms and normal probability plots (`math::histogram`,
//!   `math::probplot`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other limit_* crates:
//! - num-traits: generic floating point for the running statistics
//! - statrs: normal density and quantile function
//! - thiserror: error derivation
//! - serde: serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use limit_core::math::cumulative::{convergence_index, cumulative_mean};
//! use limit_core::types::Moment;
//!
//! let running = cumulative_mean(&[1.0_f64, 0.0, 0.5, 0.5]);
//! assert_eq!(running, vec![1.0, 0.5, 0.5, 0.5]);
//!
//! let mean = Moment::Finite(0.5);
//! let idx = convergence_index(&running, mean.value().unwrap(), 0.01);
//! assert_eq!(idx, 1);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: enable serialisation for [`Moment`] and the result types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod math;
pub mod types;

pub use types::{LookupError, Moment, MomentError, StatisticsError};
