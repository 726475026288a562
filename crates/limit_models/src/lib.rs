//! # limit_models (L2: Distribution Registry)
//!
//! Probability distributions used to illustrate the Strong Law of Large
//! Numbers and the Central Limit Theorem.
//!
//! This crate provides:
//! - Parametric families with closed-form moments ([`Family`])
//! - Statically dispatched samplers built on `rand_distr` ([`Sampler`])
//! - The five teaching distributions ([`DistributionKind`])
//! - Theorem applicability rules ([`Theorem`])
//! - The registry mapping names to full specifications ([`Registry`])
//!
//! ## Design Principles
//!
//! - **Enum-based distributions** for static dispatch, no stored closures
//! - **Moment tri-state** ([`limit_core::Moment`]) instead of float sentinels
//! - **Derived flags**: applicability follows from the moments, never typed in
//!
//! ## Example
//!
//! ```
//! use limit_models::{DistributionKind, Registry};
//!
//! let registry = Registry::standard().unwrap();
//! let pareto = registry.lookup("Pareto(α=1.5, xₘ=1)").unwrap();
//! assert_eq!(pareto.kind, DistributionKind::Pareto1_5);
//! assert!(pareto.slln_applies);
//! assert!(!pareto.clt_applies);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod distributions;
pub mod registry;
pub mod theorems;

pub use distributions::{DistributionKind, Family, FnSampler, Sampler};
pub use registry::{DistributionSpec, Registry};
pub use theorems::Theorem;
