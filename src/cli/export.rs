//! Export command - write the downloadable JSON report
//!
//! Produces the same wrapper document the original web client offered as
//! a download: `{ timestamp, results, summary }`.

use crate::models::AssessmentReport;
use crate::store::{ResultStore, StoreError};
use anyhow::{Context, Result};
use console::style;
use std::path::Path;

/// Run the export command
pub fn run(output: &Path) -> Result<()> {
    let store = ResultStore::open_default();

    let result = match store.load() {
        Ok(result) => result,
        Err(StoreError::NotFound) => {
            println!(
                "\n  {} Nothing to export. Take the assessment with {}\n",
                style("[--]").dim(),
                style("readyscope run").cyan()
            );
            return Ok(());
        }
        Err(e) => return Err(e).context("Could not load the saved result"),
    };

    let report = AssessmentReport::new(result);
    let json = serde_json::to_string_pretty(&report)?;
    std::fs::write(output, json)
        .with_context(|| format!("Could not write {}", output.display()))?;

    println!(
        "{} Results exported to {}",
        style("✓").green(),
        style(output.display()).cyan()
    );

    Ok(())
}
