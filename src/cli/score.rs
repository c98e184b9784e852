//! Score command - non-interactive scoring of a JSON answer file

use crate::catalog::global_catalog;
use crate::config::load_scoring_config;
use crate::models::Answer;
use crate::reporters;
use crate::scoring::ScoringEngine;
use anyhow::{Context, Result};
use std::path::Path;

/// Run the score command
pub fn run(input: &Path, format: &str, output: Option<&Path>, explain: bool) -> Result<()> {
    let content = std::fs::read_to_string(input)
        .with_context(|| format!("Could not read answer file: {}", input.display()))?;
    let answers: Vec<Answer> = serde_json::from_str(&content)
        .with_context(|| format!("Invalid answer file: {}", input.display()))?;

    let catalog = global_catalog();
    let config = load_scoring_config(input.parent().unwrap_or(Path::new(".")));
    let engine = ScoringEngine::new(catalog, &config);

    let (result, breakdown) = engine.calculate_with_breakdown(&answers);

    let rendered = if explain {
        engine.explain(&result, &breakdown)
    } else {
        reporters::report(&result, format)?
    };

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
