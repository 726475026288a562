//! Core value and error types.
//!
//! This module provides:
//! - `moment`: the [`Moment`] tri-state for theoretical mean and variance
//! - `error`: structured error types for registry lookup, moment evaluation,
//!   and sample statistics
//!
//! # Re-exports
//!
//! - [`Moment`] from `moment`
//! - [`LookupError`], [`MomentError`], [`StatisticsError`] from `error`

pub mod error;
pub mod moment;

pub use error::{LookupError, MomentError, StatisticsError};
pub use moment::Moment;
