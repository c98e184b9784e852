//! Scoring tables loaded from readyscope.toml or built-in defaults
//!
//! Every number the engine uses lives here as a named table: the technical
//! answer key, the WISCAR literal-to-score maps, the realWorld placeholder,
//! the recommendation tier thresholds, and the skill-gap requirement rows.
//! The defaults reproduce the published assessment exactly; a TOML file can
//! override individual tables for tuning.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

/// File name probed in the working directory for overrides
pub const CONFIG_FILE_NAME: &str = "readyscope.toml";

/// Which output score field a skill-gap row reads its "current" value from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreSource {
    Technical,
    Psychometric,
    Will,
    Interest,
    Skill,
    Cognitive,
    Ability,
    RealWorld,
}

/// One row of the skill-gap table
#[derive(Debug, Clone, Deserialize)]
pub struct SkillRequirement {
    /// Display name of the competency
    pub skill: String,
    /// Score field supplying the current value
    pub source: ScoreSource,
    /// Fixed bar the current value is compared against
    pub required: u32,
}

/// Inclusive lower bounds of the recommendation tiers
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TierThresholds {
    #[serde(default = "default_yes_threshold")]
    pub yes: u32,
    #[serde(default = "default_maybe_threshold")]
    pub maybe: u32,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            yes: default_yes_threshold(),
            maybe: default_maybe_threshold(),
        }
    }
}

fn default_yes_threshold() -> u32 {
    80
}
fn default_maybe_threshold() -> u32 {
    60
}

/// Scoring configuration for assessment result calculation
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    /// Correct literal answer per technical question id
    #[serde(default = "default_answer_key")]
    pub answer_key: HashMap<String, String>,

    /// Self-reported experience phrase -> score, for the WISCAR skill item
    #[serde(default = "default_skill_levels")]
    pub skill_levels: HashMap<String, f64>,

    /// Scenario coping-strategy phrase -> score, for the WISCAR will item.
    /// Values are not monotone: strategies are scored by presumed
    /// effectiveness, not by position in the option list.
    #[serde(default = "default_scenario_scores")]
    pub scenario_scores: HashMap<String, f64>,

    /// Placeholder value for the realWorld dimension, which is not derived
    /// from any answer yet
    #[serde(default = "default_real_world_score")]
    pub real_world_score: f64,

    /// Recommendation tier thresholds
    #[serde(default)]
    pub tiers: TierThresholds,

    /// Skill-gap table rows
    #[serde(default = "default_skill_requirements")]
    pub skill_requirements: Vec<SkillRequirement>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            answer_key: default_answer_key(),
            skill_levels: default_skill_levels(),
            scenario_scores: default_scenario_scores(),
            real_world_score: default_real_world_score(),
            tiers: TierThresholds::default(),
            skill_requirements: default_skill_requirements(),
        }
    }
}

fn default_answer_key() -> HashMap<String, String> {
    [
        ("tech_1", "C#"),
        ("tech_2", "Rotation"),
        (
            "tech_3",
            "VR completely replaces reality while AR overlays digital content on reality",
        ),
        ("tech_4", "Y-axis"),
        ("tech_5", "Maintaining consistent frame rate"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

fn default_skill_levels() -> HashMap<String, f64> {
    [
        ("Complete beginner", 25.0),
        ("Some experience with tutorials", 50.0),
        ("Built several projects", 75.0),
        ("Professional experience", 100.0),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect()
}

fn default_scenario_scores() -> HashMap<String, f64> {
    [
        ("Ask for help from a colleague immediately", 60.0),
        ("Take a break and approach it with fresh perspective", 85.0),
        ("Keep working until you solve it yourself", 70.0),
        ("Document the issue and move to other tasks", 40.0),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect()
}

fn default_real_world_score() -> f64 {
    75.0
}

fn default_skill_requirements() -> Vec<SkillRequirement> {
    vec![
        SkillRequirement {
            skill: "Programming (C#, C++)".into(),
            source: ScoreSource::Technical,
            required: 80,
        },
        SkillRequirement {
            skill: "3D Math & Spatial Reasoning".into(),
            source: ScoreSource::Cognitive,
            required: 75,
        },
        SkillRequirement {
            skill: "Problem Solving & Debugging".into(),
            source: ScoreSource::Psychometric,
            required: 70,
        },
        SkillRequirement {
            skill: "Creativity & Innovation".into(),
            source: ScoreSource::Interest,
            required: 75,
        },
        SkillRequirement {
            skill: "Persistence & Grit".into(),
            source: ScoreSource::Will,
            required: 80,
        },
    ]
}

/// Load scoring configuration, with priority:
/// 1. `readyscope.toml` in the given directory (if present and valid)
/// 2. Built-in defaults
pub fn load_scoring_config(dir: &Path) -> ScoringConfig {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        debug!("No {} found, using default scoring tables", CONFIG_FILE_NAME);
        return ScoringConfig::default();
    }

    match std::fs::read_to_string(&path) {
        Ok(content) => match toml::from_str::<ScoringConfig>(&content) {
            Ok(config) => {
                debug!("Loaded scoring config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("Invalid {}: {}. Using defaults.", path.display(), e);
                ScoringConfig::default()
            }
        },
        Err(e) => {
            warn!("Could not read {}: {}. Using defaults.", path.display(), e);
            ScoringConfig::default()
        }
    }
}
