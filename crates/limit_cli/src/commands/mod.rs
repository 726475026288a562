//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod all;
pub mod clt;
pub mod moments;
pub mod pi;
pub mod setup;
pub mod slln;
pub mod slln_demo;

use limit_report::figures::FigurePaths;

use crate::LabConfig;

/// Figure layout for `config`.
pub(crate) fn figure_paths(config: &LabConfig) -> FigurePaths {
    FigurePaths::new(&config.results_dir)
}
