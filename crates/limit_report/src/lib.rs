//! # limit_report (L4: Reporting)
//!
//! Presentation of simulation results.
//!
//! - [`tables`]: fixed-width text tables returned as `String`s; the caller
//!   decides where they are printed
//! - [`figures`]: PNG charts rendered with the `plotters` bitmap backend,
//!   plus the output path layout and file name sanitisation
//!
//! ## Example
//!
//! ```rust
//! use limit_models::Registry;
//! use limit_report::{figures::sanitize_filename, tables::moment_table};
//!
//! let registry = Registry::standard().unwrap();
//! let table = moment_table(&registry);
//! assert!(table.contains("INFINITE"));
//! assert!(table.contains("UNDEFINED"));
//!
//! assert_eq!(sanitize_filename("Pareto(α=3, xₘ=1)"), "Pareto_α3 xₘ1");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod figures;
pub mod tables;

pub use error::ReportError;
