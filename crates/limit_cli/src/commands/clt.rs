//! CLT command implementation
//!
//! Standardised sums for each configured sample size, with a histogram and
//! a Q-Q plot per size.

use limit_models::Registry;
use limit_report::figures::clt::{plot_clt_histogram, plot_clt_qq};
use limit_report::tables::clt_summary;
use limit_sim::clt::{CltReport, CltSimulator};
use tracing::info;

use super::figure_paths;
use crate::{LabConfig, Result};

/// Run the CLT command
///
/// `distribution` overrides the configured distribution.
pub fn run(config: &LabConfig, distribution: Option<&str>) -> Result<CltReport> {
    let registry = Registry::standard()?;
    let spec = registry.lookup(distribution.unwrap_or(&config.clt.distribution))?;
    let report = CltSimulator::new(config.clt_config()?).run(spec)?;
    let paths = figure_paths(config);

    for trial in &report.trials {
        let histogram = paths.clt_histogram(trial.sample_size);
        let qq = paths.clt_qqplot(trial.sample_size);
        plot_clt_histogram(trial, &histogram)?;
        plot_clt_qq(trial, &qq)?;
        info!(
            n = trial.sample_size,
            histogram = %histogram.display(),
            qq = %qq.display(),
            "Saved CLT figures"
        );
    }

    print!("{}", clt_summary(&report));
    Ok(report)
}
