//! Results command - re-render the saved assessment result

use crate::reporters;
use crate::store::{ResultStore, StoreError};
use anyhow::{Context, Result};
use console::style;
use std::path::Path;

/// Run the results command
pub fn run(format: &str, output: Option<&Path>) -> Result<()> {
    let store = ResultStore::open_default();

    let result = match store.load() {
        Ok(result) => result,
        Err(StoreError::NotFound) => {
            // No result is the start state, not an error
            println!(
                "\n  {} No saved assessment yet. Take one with {}\n",
                style("[--]").dim(),
                style("readyscope run").cyan()
            );
            return Ok(());
        }
        Err(e) => return Err(e).context("Could not load the saved result"),
    };

    let rendered = reporters::report(&result, format)?;

    match output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Could not write report to {}", path.display()))?;
            println!("Report written to {}", path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}
