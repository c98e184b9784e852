//! Text (terminal) reporter with colors and formatting

use crate::models::{AssessmentResult, Recommendation};
use anyhow::Result;

/// Recommendation colors (ANSI escape codes)
fn recommendation_color(recommendation: Recommendation) -> &'static str {
    match recommendation {
        Recommendation::Yes => "\x1b[32m",   // Green
        Recommendation::Maybe => "\x1b[33m", // Yellow
        Recommendation::No => "\x1b[31m",    // Red
    }
}

/// Reset ANSI color
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Render result as formatted terminal output
pub fn render(result: &AssessmentResult) -> Result<String> {
    let mut out = String::new();

    // Header
    let rec_c = recommendation_color(result.recommendation);
    out.push_str(&format!("\n{BOLD}AR/VR Developer Readiness{RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
    out.push_str(&format!(
        "Overall: {BOLD}{}/100{RESET}  Recommendation: {rec_c}{BOLD}{}{RESET}\n",
        result.overall_score, result.recommendation
    ));
    out.push_str(&format!("{DIM}{}{RESET}\n\n", result.recommendation.headline()));

    // Pillar scores
    out.push_str(&format!("{BOLD}SCORES{RESET}\n"));
    out.push_str(&format!(
        "  Psychometric: {}  Technical: {}\n\n",
        format_score(result.psychometric_score),
        format_score(result.technical_score)
    ));

    // WISCAR table
    let w = &result.wiscar_scores;
    out.push_str(&format!("{BOLD}WISCAR{RESET}\n"));
    out.push_str(&format!(
        "  Will: {}  Interest: {}  Skill: {}\n",
        format_score(w.will),
        format_score(w.interest),
        format_score(w.skill)
    ));
    out.push_str(&format!(
        "  Cognitive: {}  Ability: {}  Real-world: {}\n\n",
        format_score(w.cognitive),
        format_score(w.ability),
        format_score(w.real_world)
    ));

    // Skill gaps
    if !result.skill_gaps.is_empty() {
        out.push_str(&format!("{BOLD}SKILL GAPS{RESET}\n"));
        out.push_str(&format!(
            "{DIM}  SKILL                            CURRENT  REQUIRED{RESET}\n"
        ));
        for gap in &result.skill_gaps {
            let marker = if gap.gap {
                "\x1b[31m▼\x1b[0m"
            } else {
                "\x1b[32m✓\x1b[0m"
            };
            out.push_str(&format!(
                "  {:<32} {:>7}  {:>8}  {}\n",
                gap.skill, gap.current, gap.required, marker
            ));
        }
        out.push('\n');
    }

    // Insights
    if !result.insights.is_empty() {
        out.push_str(&format!("{BOLD}INSIGHTS{RESET}\n"));
        for insight in &result.insights {
            out.push_str(&format!("  • {}\n", insight));
        }
        out.push('\n');
    }

    // Next steps
    if !result.next_steps.is_empty() {
        out.push_str(&format!("{BOLD}NEXT STEPS{RESET}\n"));
        for (i, step) in result.next_steps.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", i + 1, step));
        }
        out.push('\n');
    }

    // Closing tip
    match result.recommendation {
        Recommendation::Yes => {
            out.push_str(&format!("{DIM}You're ready. Pick a first project and start.{RESET}\n"));
        }
        Recommendation::Maybe => {
            out.push_str(&format!(
                "{DIM}Close the gaps above, then retake with `readyscope run`.{RESET}\n"
            ));
        }
        Recommendation::No => {
            out.push_str(&format!(
                "{DIM}Build foundations first; retake with `readyscope run` anytime.{RESET}\n"
            ));
        }
    }

    Ok(out)
}

fn format_score(score: u32) -> String {
    let color = if score >= 80 {
        "\x1b[32m"
    } else if score >= 60 {
        "\x1b[33m"
    } else {
        "\x1b[31m"
    };
    format!("{color}{}{RESET}", score)
}
