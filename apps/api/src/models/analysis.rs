//! Result types for the transcript analysis endpoint.

use serde::{Deserialize, Serialize};

use crate::catalog::Difficulty;

/// Score for one rubric pillar, 0–100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PillarScore {
    pub id: String,
    pub label: String,
    pub description: String,
    pub score: u8,
}

/// The full skill assessment returned to the caller. Constructed once per
/// analysis request and never mutated; a degraded fallback variant (score 0,
/// no pillars) is returned when the model output cannot be parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub score: u8,
    pub phase_key: String,
    pub phase_label: String,
    pub difficulty: Difficulty,
    pub pillars: Vec<PillarScore>,
    pub good: Vec<String>,
    pub improve: Vec<String>,
    pub next_level: Option<String>,
}
