//! Markdown reporter for GitHub-flavored Markdown output
//!
//! Generates reports suitable for:
//! - Sharing results in issues or discussions
//! - Archiving alongside learning plans

use crate::models::{AssessmentResult, Recommendation};
use anyhow::Result;
use chrono::Local;

/// Render result as GitHub-flavored Markdown
pub fn render(result: &AssessmentResult) -> Result<String> {
    let mut md = String::new();

    md.push_str(&render_header(result));
    md.push('\n');
    md.push_str(&render_summary(result));
    md.push('\n');
    md.push_str(&render_wiscar(result));
    md.push('\n');
    md.push_str(&render_skill_gaps(result));
    md.push('\n');
    md.push_str(&render_narrative(result));
    md.push('\n');
    md.push_str(&render_footer());

    Ok(md)
}

fn render_header(result: &AssessmentResult) -> String {
    let emoji = match result.recommendation {
        Recommendation::Yes => "🏆",
        Recommendation::Maybe => "⭐",
        Recommendation::No => "🌱",
    };

    format!(
        r#"# {} AR/VR Developer Readiness Report

**Recommendation: {}** | **Overall Score: {}/100**

{}
"#,
        emoji,
        result.recommendation,
        result.overall_score,
        result.recommendation.headline()
    )
}

fn render_summary(result: &AssessmentResult) -> String {
    format!(
        r#"## Summary

| Pillar | Score |
|--------|-------|
| **Psychometric Fit** | {}/100 |
| **Technical Knowledge** | {}/100 |
| **Overall** | {}/100 |
"#,
        result.psychometric_score, result.technical_score, result.overall_score
    )
}

fn render_wiscar(result: &AssessmentResult) -> String {
    let w = &result.wiscar_scores;
    format!(
        r#"## WISCAR Analysis

| Dimension | Score |
|-----------|-------|
| Will | {} |
| Interest | {} |
| Skill | {} |
| Cognitive | {} |
| Ability | {} |
| Real-world alignment | {} |
"#,
        w.will, w.interest, w.skill, w.cognitive, w.ability, w.real_world
    )
}

fn render_skill_gaps(result: &AssessmentResult) -> String {
    let mut md = String::from(
        r#"## Skill Gaps

| Skill | Current | Required | Status |
|-------|---------|----------|--------|
"#,
    );

    for gap in &result.skill_gaps {
        let status = if gap.gap { "❌ Gap" } else { "✅ Met" };
        md.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            gap.skill, gap.current, gap.required, status
        ));
    }

    md
}

fn render_narrative(result: &AssessmentResult) -> String {
    let mut md = String::from("## Insights\n\n");
    for insight in &result.insights {
        md.push_str(&format!("- {}\n", insight));
    }

    md.push_str("\n## Next Steps\n\n");
    for (i, step) in result.next_steps.iter().enumerate() {
        md.push_str(&format!("{}. {}\n", i + 1, step));
    }

    md
}

fn render_footer() -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    format!("---\n\n*Generated by readyscope on {}*\n", timestamp)
}
