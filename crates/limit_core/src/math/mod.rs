//! Statistical routines shared by the simulators and the figures.
//!
//! - [`cumulative`]: running mean, running proportion, convergence scan, tail volatility
//! - [`normal`]: standard normal density, distribution and quantile functions
//! - [`histogram`]: density-normalised histograms
//! - [`probplot`]: normal probability (Q-Q) plots with least-squares fit

pub mod cumulative;
pub mod histogram;
pub mod normal;
pub mod probplot;

pub use cumulative::{convergence_index, cumulative_mean, running_proportion, tail_volatility};
pub use histogram::{density_histogram, DensityHistogram, HistogramBin};
pub use normal::{norm_cdf, norm_pdf, norm_ppf, normal_density_curve, standardise_sum};
pub use probplot::{filliben_medians, normal_probability_plot, ProbabilityPlot};
