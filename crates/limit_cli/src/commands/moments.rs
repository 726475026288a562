//! Moments command implementation
//!
//! Prints the moment table and which theorem applies to which distribution.

use limit_models::Registry;
use limit_report::tables::{moment_table, preview_table, theoretical_implications};

use crate::{LabConfig, Result};

/// Run the moments command
pub fn run(config: &LabConfig, preview: bool) -> Result<()> {
    let registry = Registry::standard()?;

    print!("{}", moment_table(&registry));
    print!("{}", theoretical_implications(&registry));
    if preview {
        print!(
            "{}",
            preview_table(&registry, config.preview_count, config.seed)
        );
    }
    Ok(())
}
