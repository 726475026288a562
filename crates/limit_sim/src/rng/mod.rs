//! # Random Number Generation
//!
//! Seeded random number generation for the simulators.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: every generator is created from an explicit seed;
//!   the same seed gives the same sample sequence
//! - **Batch operations**: zero-allocation fills via `&mut [f64]` slices
//! - **Static dispatch**: samplers are generic over
//!   [`rand_distr::Distribution<f64>`], no `Box<dyn Trait>` in the hot loop
//!
//! ## Usage Example
//!
//! ```rust
//! use limit_sim::rng::SimRng;
//! use limit_models::{DistributionKind, DistributionSpec};
//!
//! let mut rng = SimRng::from_seed(42);
//! let u = rng.gen_uniform();
//! assert!((0.0..1.0).contains(&u));
//!
//! let spec = DistributionSpec::from_kind(DistributionKind::Exponential).unwrap();
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_from(&spec, &mut buffer);
//! assert!(buffer.iter().all(|&x| x >= 0.0));
//! ```

mod prng;

pub use prng::SimRng;

#[cfg(test)]
mod tests;
