//! Distribution definitions.
//!
//! - [`family`]: parametric families and their closed-form moments
//! - [`sampler`]: `rand_distr`-backed samplers with static dispatch
//! - [`kind`]: the five registry distributions

pub mod family;
pub mod kind;
pub mod sampler;

pub use family::Family;
pub use kind::DistributionKind;
pub use sampler::{FnSampler, Sampler};
