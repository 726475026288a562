//! SLLN command implementation
//!
//! Simulates the running mean of every registry distribution, or of a
//! single one when a name is given, and writes one chart per distribution.

use limit_models::Registry;
use limit_report::figures::slln::plot_slln_analysis;
use limit_report::tables::{analysis_block, slln_summary};
use limit_sim::slln::{SllnAnalysis, SllnSimulator};
use tracing::info;

use super::figure_paths;
use crate::{LabConfig, Result};

/// Run the SLLN command
pub fn run(config: &LabConfig, distribution: Option<&str>) -> Result<Vec<SllnAnalysis>> {
    let registry = Registry::standard()?;
    let simulator = SllnSimulator::new(config.slln_config()?);
    let paths = figure_paths(config);

    let selected = distribution.map(|name| registry.lookup(name)).transpose()?;

    let rule = "=".repeat(80);
    println!("\n{rule}");
    println!("{}", banner(selected.map(|spec| spec.name)));
    println!("{rule}");

    let analyses = match selected {
        Some(spec) => vec![simulator.analyse(spec)],
        None => simulator.analyse_all(&registry),
    };

    for analysis in &analyses {
        print!("{}", analysis_block(analysis));
        let path = paths.slln_distribution(analysis.spec.name);
        plot_slln_analysis(analysis, &path)?;
        info!(path = %path.display(), "Saved SLLN figure");
    }

    println!("\n{rule}");
    println!(
        "SLLN ANALYSIS COMPLETE - All plots saved to {}/",
        paths.slln_dir().display()
    );
    println!("{rule}");
    print!("{}", slln_summary(&analyses));

    Ok(analyses)
}

/// Heading naming what the run covers.
fn banner(selected: Option<&str>) -> String {
    match selected {
        Some(name) => format!("SLLN ANALYSIS - {name}"),
        None => "SLLN ANALYSIS - ALL DISTRIBUTIONS".to_string(),
    }
}
