//! Defensive normalization of the model's analysis output.
//!
//! The raw response is untrusted text that should parse as JSON but may not.
//! Robustness beats strictness here: malformed fields coerce to defaults
//! instead of rejecting the response, and a completely unparseable response
//! degrades to a fixed fallback result. This function never fails.

use serde_json::Value;

use crate::catalog::Difficulty;
use crate::llm_client::strip_json_fences;
use crate::models::analysis::{AnalysisResult, PillarScore};

/// Fixed `good` entry of the fallback result.
pub const FALLBACK_GOOD: &str = "Kunne ikke analysere samtalen på grunn av en teknisk feil.";
/// Fixed `improve` entry of the fallback result.
pub const FALLBACK_IMPROVE: &str = "Prøv igjen eller kontakt support.";

/// Request-side identifiers. These always win over whatever the model
/// echoes, so a confused model cannot corrupt caller-known fields.
pub struct AnalysisContext<'a> {
    pub phase_key: &'a str,
    pub phase_label: &'a str,
    pub difficulty: Difficulty,
}

/// Normalizes raw model output into a fully-populated `AnalysisResult`.
pub fn normalize(raw: &str, ctx: &AnalysisContext<'_>) -> AnalysisResult {
    match serde_json::from_str::<Value>(strip_json_fences(raw)) {
        Ok(parsed) => normalized(&parsed, ctx),
        Err(e) => {
            tracing::warn!("Analysis output did not parse as JSON: {e}");
            fallback(ctx)
        }
    }
}

fn normalized(parsed: &Value, ctx: &AnalysisContext<'_>) -> AnalysisResult {
    let pillars = match parsed.get("pillars").and_then(Value::as_array) {
        Some(items) => items
            .iter()
            .map(|p| PillarScore {
                id: string_or_empty(p.get("id")),
                label: string_or_empty(p.get("label")),
                description: string_or_empty(p.get("description")),
                score: clamp_score(p.get("score")),
            })
            .collect(),
        None => Vec::new(),
    };

    AnalysisResult {
        score: clamp_score(parsed.get("score")),
        phase_key: ctx.phase_key.to_string(),
        phase_label: ctx.phase_label.to_string(),
        difficulty: ctx.difficulty,
        pillars,
        good: string_list(parsed.get("good")),
        improve: string_list(parsed.get("improve")),
        next_level: parsed
            .get("nextLevel")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
    }
}

/// The degraded-but-valid result returned when the model output cannot be
/// parsed at all. Deliberately not an error: the user sees a low-confidence
/// report instead of a failure mid-exercise.
fn fallback(ctx: &AnalysisContext<'_>) -> AnalysisResult {
    AnalysisResult {
        score: 0,
        phase_key: ctx.phase_key.to_string(),
        phase_label: ctx.phase_label.to_string(),
        difficulty: ctx.difficulty,
        pillars: Vec::new(),
        good: vec![FALLBACK_GOOD.to_string()],
        improve: vec![FALLBACK_IMPROVE.to_string()],
        next_level: None,
    }
}

/// Missing or non-numeric scores coerce to 0; numeric scores clamp to
/// [0, 100].
fn clamp_score(value: Option<&Value>) -> u8 {
    let n = value.and_then(Value::as_f64).unwrap_or(0.0);
    n.clamp(0.0, 100.0).round() as u8
}

fn string_or_empty(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Non-array values coerce to an empty list; non-string elements are
/// dropped.
fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> AnalysisContext<'static> {
        AnalysisContext {
            phase_key: "phase-1",
            phase_label: "Trinn 1: Første kontakt",
            difficulty: Difficulty::Easy,
        }
    }

    #[test]
    fn test_unparseable_output_yields_fixed_fallback() {
        for raw in ["", "not json at all", "{truncated", "<html>oops</html>"] {
            let result = normalize(raw, &ctx());
            assert_eq!(result.score, 0);
            assert!(result.pillars.is_empty());
            assert_eq!(result.good, vec![FALLBACK_GOOD.to_string()]);
            assert_eq!(result.improve, vec![FALLBACK_IMPROVE.to_string()]);
            assert_eq!(result.next_level, None);
        }
    }

    #[test]
    fn test_score_clamping() {
        let cases = [(-5.0, 0), (140.0, 100), (73.0, 73), (0.0, 0), (100.0, 100)];
        for (raw, expected) in cases {
            let result = normalize(&format!(r#"{{"score": {raw}}}"#), &ctx());
            assert_eq!(result.score, expected, "raw score {raw}");
        }
    }

    #[test]
    fn test_missing_and_non_numeric_scores_coerce_to_zero() {
        assert_eq!(normalize("{}", &ctx()).score, 0);
        assert_eq!(normalize(r#"{"score": "high"}"#, &ctx()).score, 0);
        assert_eq!(normalize(r#"{"score": null}"#, &ctx()).score, 0);
    }

    #[test]
    fn test_pillar_fields_coerce_not_fail() {
        let raw = r#"{
            "score": 80,
            "pillars": [
                {"id": "intro_name", "label": "Navn", "description": "…", "score": 120},
                {"score": -3}
            ]
        }"#;
        let result = normalize(raw, &ctx());
        assert_eq!(result.pillars.len(), 2);
        assert_eq!(result.pillars[0].score, 100);
        assert_eq!(result.pillars[1].score, 0);
        assert_eq!(result.pillars[1].id, "");
        assert_eq!(result.pillars[1].label, "");
    }

    #[test]
    fn test_non_array_collections_coerce_to_empty() {
        let raw = r#"{"score": 50, "pillars": "none", "good": 7, "improve": {"x": 1}}"#;
        let result = normalize(raw, &ctx());
        assert!(result.pillars.is_empty());
        assert!(result.good.is_empty());
        assert!(result.improve.is_empty());
    }

    #[test]
    fn test_identifiers_come_from_request_not_model_echo() {
        let raw = r#"{
            "score": 60,
            "phaseKey": "phase-99",
            "phaseLabel": "Fabricated",
            "difficulty": "Difficult"
        }"#;
        let result = normalize(raw, &ctx());
        assert_eq!(result.phase_key, "phase-1");
        assert_eq!(result.phase_label, "Trinn 1: Første kontakt");
        assert_eq!(result.difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_next_level_passes_through_only_when_truthy() {
        assert_eq!(
            normalize(r#"{"nextLevel": "Moderate"}"#, &ctx()).next_level,
            Some("Moderate".to_string())
        );
        assert_eq!(normalize(r#"{"nextLevel": null}"#, &ctx()).next_level, None);
        assert_eq!(normalize(r#"{"nextLevel": ""}"#, &ctx()).next_level, None);
        assert_eq!(normalize("{}", &ctx()).next_level, None);
    }

    #[test]
    fn test_fenced_json_is_accepted() {
        let raw = "```json\n{\"score\": 42}\n```";
        assert_eq!(normalize(raw, &ctx()).score, 42);
    }
}
