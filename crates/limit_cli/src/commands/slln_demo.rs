//! SLLN demonstration command implementation
//!
//! Single Uniform(0,1) running mean written to `figures/slln_convergence.png`.

use limit_models::{DistributionKind, DistributionSpec};
use limit_report::figures::slln::plot_slln_demo;
use limit_report::tables::running_mean_summary;
use limit_sim::slln::SllnSimulator;
use limit_sim::ConvergenceResult;
use tracing::info;

use super::figure_paths;
use crate::{LabConfig, Result};

/// Run the SLLN demonstration command
pub fn run(config: &LabConfig) -> Result<ConvergenceResult> {
    let uniform = DistributionSpec::from_kind(DistributionKind::Uniform)?;
    let result = SllnSimulator::new(config.slln_config()?).run(&uniform, uniform.mean);

    let path = figure_paths(config).slln_convergence();
    plot_slln_demo(&result, &path)?;
    info!(path = %path.display(), "Saved SLLN demonstration");

    print!("{}", running_mean_summary(&result));
    Ok(result)
}
