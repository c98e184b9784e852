//! Questions command - list the static catalog

use crate::catalog::global_catalog;
use crate::models::{Category, Question};
use anyhow::Result;
use console::style;
use std::str::FromStr;

/// Run the questions command
pub fn run(category: Option<&str>, format: &str) -> Result<()> {
    let catalog = global_catalog();

    let filter = category
        .map(Category::from_str)
        .transpose()
        .map_err(anyhow::Error::msg)?;

    let questions: Vec<&Question> = catalog
        .questions()
        .iter()
        .filter(|q| filter.map_or(true, |c| q.category == c))
        .collect();

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&questions)?);
        return Ok(());
    }

    println!(
        "\n{}",
        style(format!("{} questions", questions.len())).bold()
    );
    println!(
        "{}",
        style("  ID         CATEGORY       SUBCATEGORY    PROMPT").dim()
    );
    for q in &questions {
        let prompt: String = q.prompt.chars().take(50).collect();
        let prompt = if q.prompt.chars().count() > 50 {
            format!("{}...", prompt)
        } else {
            prompt
        };
        println!(
            "  {} {:<14} {:<14} {}",
            style(format!("{:<10}", q.id)).cyan(),
            q.category.to_string(),
            q.subcategory,
            prompt
        );
    }
    println!();

    Ok(())
}
