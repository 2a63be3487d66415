//! Axum handler for the streaming chat turn.
//!
//! Per-turn state machine: validate, compile the persona prompt, dispatch,
//! then relay fragments unbuffered. The full message history is resupplied
//! by the caller on every turn; nothing is persisted across turns.

use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::catalog::Difficulty;
use crate::chat::prompts::{build_chat_system_prompt, ChatPromptParams};
use crate::llm_client::ModelMessage;
use crate::models::message::Message;
use crate::state::AppState;

/// Hard cap on history length, enforced before any model call.
pub const MAX_MESSAGES: usize = 100;

/// Scenario fields arrive as opaque strings: the caller already resolved
/// them from the catalogs, and this handler does not re-validate them.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub messages: Vec<Message>,
    pub employer_label: String,
    pub phase_label: String,
    pub difficulty: Difficulty,
    pub manager_name: String,
    pub scenario_description: String,
}

/// POST /api/v1/chat
///
/// Streams the persona's reply as a raw `text/plain` body; fragments
/// concatenate to the full reply with no framing. Validation failures are
/// plain-text 400s, and an upstream failure before the first fragment is a
/// plain-text 500. Mid-stream failures terminate the body.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Response {
    if request.messages.is_empty() {
        return (StatusCode::BAD_REQUEST, "No messages provided").into_response();
    }
    if request.messages.len() > MAX_MESSAGES {
        return (StatusCode::BAD_REQUEST, "Too many messages").into_response();
    }

    let system_prompt = build_chat_system_prompt(&ChatPromptParams {
        employer_label: &request.employer_label,
        phase_label: &request.phase_label,
        difficulty: request.difficulty,
        manager_name: &request.manager_name,
        scenario_description: &request.scenario_description,
    });

    let history: Vec<ModelMessage> = request
        .messages
        .iter()
        .map(|msg| ModelMessage {
            role: msg.role.as_str(),
            content: msg.text.clone(),
        })
        .collect();

    match state.llm.stream_reply(&system_prompt, history).await {
        Ok(stream) => (
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            Body::from_stream(stream),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Chat dispatch failed: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use futures::StreamExt;

    use super::*;
    use crate::llm_client::testing::ScriptedModel;
    use crate::llm_client::ChatModel;
    use crate::models::message::Role;

    fn request_with(count: usize) -> ChatRequest {
        ChatRequest {
            messages: (0..count)
                .map(|i| Message {
                    role: if i % 2 == 0 { Role::User } else { Role::Assistant },
                    text: format!("melding {i}"),
                })
                .collect(),
            employer_label: "Rema 1000 Nygårdsgaten".to_string(),
            phase_label: "Trinn 1: Første kontakt".to_string(),
            difficulty: Difficulty::Easy,
            manager_name: "Kari Johansen".to_string(),
            scenario_description: "En rolig formiddag.".to_string(),
        }
    }

    fn state_with(model: ScriptedModel) -> AppState {
        AppState {
            llm: Arc::new(model),
        }
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_empty_messages_rejected_before_dispatch() {
        // A failing model proves rejection happens before any model call.
        let state = state_with(ScriptedModel::failing());
        let response = handle_chat(State(state), Json(request_with(0))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "No messages provided");
    }

    #[tokio::test]
    async fn test_101_messages_rejected() {
        let state = state_with(ScriptedModel::failing());
        let response = handle_chat(State(state), Json(request_with(101))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "Too many messages");
    }

    #[tokio::test]
    async fn test_100_messages_accepted() {
        let model = ScriptedModel::streaming(vec!["ok".to_string()]);
        let response = handle_chat(State(state_with(model)), Json(request_with(100))).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_fragments_concatenate_to_full_reply() {
        let model = ScriptedModel::streaming(vec![
            "Hei, ".to_string(),
            "dette er ".to_string(),
            "Kari.".to_string(),
        ]);
        let response = handle_chat(State(state_with(model)), Json(request_with(1))).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "Hei, dette er Kari.");
    }

    #[tokio::test]
    async fn test_dispatch_failure_is_plain_500() {
        let state = state_with(ScriptedModel::failing());
        let response = handle_chat(State(state), Json(request_with(1))).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_no_fragments_produced_after_consumer_disconnect() {
        let model = ScriptedModel::streaming(
            (0..50).map(|i| format!("fragment-{i}")).collect(),
        );
        let counter = model.yield_counter();

        let mut stream = model
            .stream_reply("system", Vec::new())
            .await
            .unwrap();
        for _ in 0..3 {
            stream.next().await.unwrap().unwrap();
        }
        drop(stream);

        // The stream is pull-driven: once dropped it can never be polled
        // again, so the producer cannot run past the last read.
        assert_eq!(counter.load(std::sync::atomic::Ordering::SeqCst), 3);
    }
}
