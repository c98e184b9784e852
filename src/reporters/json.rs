//! JSON reporter
//!
//! Outputs the full AssessmentResult as pretty-printed JSON, in the same
//! camelCase shape the original web client persisted and downloaded.

use crate::models::AssessmentResult;
use anyhow::Result;

/// Render result as JSON
pub fn render(result: &AssessmentResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}
