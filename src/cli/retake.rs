//! Retake command - clear the saved result

use crate::store::ResultStore;
use anyhow::{Context, Result};
use console::style;

/// Run the retake command
pub fn run() -> Result<()> {
    let store = ResultStore::open_default();

    let removed = store
        .clear()
        .context("Could not clear the saved result")?;

    if removed {
        println!(
            "{} Saved result cleared. Start fresh with {}",
            style("✓").green(),
            style("readyscope run").cyan()
        );
    } else {
        println!(
            "No saved result to clear. Take the assessment with {}",
            style("readyscope run").cyan()
        );
    }

    Ok(())
}
