//! Init command - write an example readyscope.toml

use crate::config::CONFIG_FILE_NAME;
use anyhow::{Context, Result};
use console::style;
use std::path::Path;

/// Run the init command
pub fn run() -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);

    if config_path.exists() {
        println!(
            "{} {} already exists, leaving it untouched",
            style("✓").green(),
            style(CONFIG_FILE_NAME).cyan()
        );
        return Ok(());
    }

    let example = r#"# Readyscope Scoring Configuration
# Every table here overrides the built-in default of the same name.
# Omitted tables keep their defaults.

# Placeholder value for the WISCAR real-world dimension (not yet derived
# from any answer)
# real_world_score = 75.0

# Recommendation tier thresholds (inclusive lower bounds)
# [tiers]
# yes = 80
# maybe = 60

# Correct literal answer per technical question
# [answer_key]
# tech_1 = "C#"
# tech_2 = "Rotation"
# tech_3 = "VR completely replaces reality while AR overlays digital content on reality"
# tech_4 = "Y-axis"
# tech_5 = "Maintaining consistent frame rate"

# Experience phrase -> score for the WISCAR skill item
# [skill_levels]
# "Complete beginner" = 25.0
# "Some experience with tutorials" = 50.0
# "Built several projects" = 75.0
# "Professional experience" = 100.0

# Coping-strategy phrase -> score for the WISCAR will scenario
# [scenario_scores]
# "Ask for help from a colleague immediately" = 60.0
# "Take a break and approach it with fresh perspective" = 85.0
# "Keep working until you solve it yourself" = 70.0
# "Document the issue and move to other tasks" = 40.0

# Skill-gap table rows (replaces the whole table when present)
# [[skill_requirements]]
# skill = "Programming (C#, C++)"
# source = "technical"
# required = 80
"#;

    std::fs::write(config_path, example)
        .with_context(|| format!("Failed to create {}", CONFIG_FILE_NAME))?;

    println!(
        "{} Created {}",
        style("✓").green(),
        style(CONFIG_FILE_NAME).cyan()
    );
    println!("\nNext steps:");
    println!(
        "  {} Take the assessment",
        style("readyscope run").cyan()
    );
    println!(
        "  {} List the questions",
        style("readyscope questions").cyan()
    );

    Ok(())
}
