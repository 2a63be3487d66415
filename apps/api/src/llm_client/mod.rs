//! LLM client — the single point of entry for all model API calls.
//!
//! No other module may call the Anthropic API directly; handlers depend on
//! the [`ChatModel`] trait so tests can substitute a scripted fake with no
//! network access.

use std::pin::Pin;

use async_trait::async_trait;
use futures::stream::Stream;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

#[cfg(test)]
pub mod testing;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// The model used for all LLM calls.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "claude-sonnet-4-5";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Stream error: {0}")]
    Stream(String),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// A stream of incremental text fragments from the model, in arrival order.
pub type TextStream = Pin<Box<dyn Stream<Item = Result<String, LlmError>> + Send>>;

/// One turn of conversation history forwarded to the model.
#[derive(Debug, Clone, Serialize)]
pub struct ModelMessage {
    pub role: &'static str,
    pub content: String,
}

/// Sampling and budget knobs for a single-shot completion.
#[derive(Debug, Clone, Copy)]
pub struct CompletionOptions {
    pub max_tokens: u32,
    pub temperature: f32,
}

/// The narrow capability the handlers depend on. The conversational persona
/// and the scoring judgment live entirely behind this seam.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Single-shot completion: one system prompt, one user prompt, full text
    /// back. Used by the analysis path.
    async fn complete(
        &self,
        system: &str,
        user: &str,
        options: CompletionOptions,
    ) -> Result<String, LlmError>;

    /// Streaming persona reply over the full message history. Fragments are
    /// yielded as they arrive; dropping the stream releases the upstream
    /// call.
    async fn stream_reply(
        &self,
        system: &str,
        messages: Vec<ModelMessage>,
    ) -> Result<TextStream, LlmError>;
}

#[derive(Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    system: &'a str,
    messages: &'a [ModelMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    stream: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
    usage: Usage,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    input_tokens: u32,
    output_tokens: u32,
}

impl MessagesResponse {
    fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// Anthropic-backed implementation of [`ChatModel`].
///
/// No retry or backoff here: a failed request is terminal for that request,
/// and resubmission is the caller's responsibility.
#[derive(Clone)]
pub struct AnthropicClient {
    client: Client,
    api_key: String,
}

impl AnthropicClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    async fn send(&self, request: &AnthropicRequest<'_>) -> Result<reqwest::Response, LlmError> {
        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Anthropic API returned {status}: {body}");
            let message = serde_json::from_str::<AnthropicError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl ChatModel for AnthropicClient {
    async fn complete(
        &self,
        system: &str,
        user: &str,
        options: CompletionOptions,
    ) -> Result<String, LlmError> {
        let messages = [ModelMessage {
            role: "user",
            content: user.to_string(),
        }];
        let request = AnthropicRequest {
            model: MODEL,
            max_tokens: options.max_tokens,
            temperature: options.temperature,
            system,
            messages: &messages,
            stream: None,
        };

        let response = self.send(&request).await?;
        let parsed: MessagesResponse = response.json().await?;

        debug!(
            "LLM call succeeded: input_tokens={}, output_tokens={}",
            parsed.usage.input_tokens, parsed.usage.output_tokens
        );

        parsed
            .text()
            .map(str::to_string)
            .ok_or(LlmError::EmptyContent)
    }

    async fn stream_reply(
        &self,
        system: &str,
        messages: Vec<ModelMessage>,
    ) -> Result<TextStream, LlmError> {
        let request = AnthropicRequest {
            model: MODEL,
            max_tokens: 4096,
            temperature: 0.7,
            system,
            messages: &messages,
            stream: Some(true),
        };

        let response = self.send(&request).await?;

        // Decode the SSE event stream into plain text deltas, forwarding
        // each fragment as soon as its event is complete.
        let stream = async_stream::stream! {
            use futures::StreamExt;
            let mut byte_stream = response.bytes_stream();
            let mut buffer = String::new();

            while let Some(chunk_result) = byte_stream.next().await {
                match chunk_result {
                    Ok(bytes) => {
                        buffer.push_str(&String::from_utf8_lossy(&bytes));

                        while let Some(event_end) = buffer.find("\n\n") {
                            let event = buffer[..event_end].to_string();
                            buffer = buffer[event_end + 2..].to_string();

                            for line in event.lines() {
                                let Some(data) = line.strip_prefix("data: ") else {
                                    continue;
                                };
                                let Ok(event_json) =
                                    serde_json::from_str::<serde_json::Value>(data)
                                else {
                                    continue;
                                };
                                if event_json["type"] == "content_block_delta" {
                                    if let Some(text) = event_json["delta"]["text"].as_str() {
                                        yield Ok(text.to_string());
                                    }
                                } else if event_json["type"] == "error" {
                                    let message = event_json["error"]["message"]
                                        .as_str()
                                        .unwrap_or("Unknown streaming error");
                                    yield Err(LlmError::Stream(message.to_string()));
                                    return;
                                }
                            }
                        }
                    }
                    Err(e) => {
                        yield Err(LlmError::Http(e));
                        return;
                    }
                }
            }
        };

        Ok(Box::pin(stream))
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_model_message_serializes_role_and_content() {
        let msg = ModelMessage {
            role: "assistant",
            content: "Hei!".to_string(),
        };
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["role"], "assistant");
        assert_eq!(json["content"], "Hei!");
    }
}
