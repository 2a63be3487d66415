//! Axum handler for the batch analysis turn.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::analysis::normalize::{normalize, AnalysisContext};
use crate::analysis::prompts::{build_analyze_user_prompt, AnalyzePromptParams, ANALYZE_SYSTEM_PROMPT};
use crate::analysis::transcript::render_transcript;
use crate::catalog::Difficulty;
use crate::errors::AppError;
use crate::llm_client::{CompletionOptions, LlmError};
use crate::models::analysis::AnalysisResult;
use crate::models::message::Message;
use crate::state::AppState;

/// Bounded output budget and low randomness: this call is evaluative, not
/// conversational.
const ANALYZE_OPTIONS: CompletionOptions = CompletionOptions {
    max_tokens: 1500,
    temperature: 0.3,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub messages: Vec<Message>,
    pub phase_key: String,
    pub phase_label: String,
    pub difficulty: Difficulty,
    pub character_label: String,
    pub scenario_description: String,
}

/// POST /api/v1/analyze
///
/// Scores the full transcript against the phase rubric. Always returns a
/// fully-populated `AnalysisResult`: a malformed model response degrades to
/// the fallback result instead of an error status.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    if request.messages.is_empty() {
        return Err(AppError::Validation("No messages provided".to_string()));
    }

    let transcript = render_transcript(&request.messages, &request.character_label);
    let user_prompt = build_analyze_user_prompt(
        &AnalyzePromptParams {
            phase_key: &request.phase_key,
            phase_label: &request.phase_label,
            difficulty: request.difficulty,
            character_label: &request.character_label,
            scenario_description: &request.scenario_description,
        },
        &transcript,
    );

    let raw = match state
        .llm
        .complete(ANALYZE_SYSTEM_PROMPT, &user_prompt, ANALYZE_OPTIONS)
        .await
    {
        Ok(text) => text,
        // An empty reply is treated as an empty object, which normalizes to
        // an all-zero result rather than an error.
        Err(LlmError::EmptyContent) => "{}".to_string(),
        Err(e) => return Err(AppError::Upstream(e.to_string())),
    };

    let context = AnalysisContext {
        phase_key: &request.phase_key,
        phase_label: &request.phase_label,
        difficulty: request.difficulty,
    };
    Ok(Json(normalize(&raw, &context)))
}
