//! Runs every command in sequence.

use tracing::info;

use crate::{LabConfig, Result};

/// Run setup, moments, SLLN, SLLN demonstration, CLT, and π in order
pub fn run(config: &LabConfig) -> Result<()> {
    super::setup::run(config)?;
    super::moments::run(config, true)?;
    super::slln::run(config, None)?;
    super::slln_demo::run(config)?;
    super::clt::run(config, None)?;
    super::pi::run(config)?;

    info!(results = %config.results_dir.display(), "All demonstrations complete");
    Ok(())
}
