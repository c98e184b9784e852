//! Configuration module for Readyscope
//!
//! This module handles:
//! - Scoring tables (answer key, WISCAR value maps, skill-gap bars)
//! - Recommendation tier thresholds
//! - Optional overrides from readyscope.toml

mod scoring;

pub use scoring::{
    load_scoring_config, ScoreSource, ScoringConfig, SkillRequirement, TierThresholds,
    CONFIG_FILE_NAME,
};
