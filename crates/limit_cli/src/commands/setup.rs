//! Setup command implementation
//!
//! Creates the results and reports directory skeleton.

use std::path::PathBuf;

use limit_report::figures::ensure_dir;
use tracing::info;

use super::figure_paths;
use crate::{LabConfig, Result};

/// Run the setup command, returning the directories it ensured.
pub fn run(config: &LabConfig) -> Result<Vec<PathBuf>> {
    let mut directories = figure_paths(config).directories().to_vec();
    directories.push(config.reports_dir.clone());

    for dir in &directories {
        ensure_dir(dir)?;
        info!(path = %dir.display(), "Directory ready");
        println!("✓ Created directory: {}", dir.display());
    }

    let rule = "=".repeat(60);
    println!("\n{rule}");
    println!("Project structure created successfully!");
    println!("{rule}");
    println!("\nNext steps:");
    println!("1. Run: limitlab moments --preview");
    println!("2. Run: limitlab slln");
    println!("3. Run: limitlab clt");
    println!("4. Run: limitlab pi");

    Ok(directories)
}
