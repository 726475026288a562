//! Monte Carlo π command implementation

use limit_report::figures::pi::plot_pi_estimate;
use limit_report::tables::pi_summary;
use limit_sim::pi::{PiEstimate, PiEstimator};
use tracing::info;

use super::figure_paths;
use crate::{LabConfig, Result};

/// Run the π command
pub fn run(config: &LabConfig) -> Result<PiEstimate> {
    let estimate = PiEstimator::new(config.pi_config()?).run();

    let path = figure_paths(config).pi_estimation();
    plot_pi_estimate(&estimate, &path)?;
    info!(path = %path.display(), "Saved π figure");

    print!("{}", pi_summary(&estimate));
    Ok(estimate)
}
