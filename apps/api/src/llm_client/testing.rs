//! Scripted [`ChatModel`] fake for handler tests. No network involved.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use super::{ChatModel, CompletionOptions, LlmError, ModelMessage, TextStream};

/// A model whose replies are fixed up front. Streaming replies count each
/// fragment actually yielded, which lets tests observe that production stops
/// when the consumer goes away.
pub struct ScriptedModel {
    completion: Result<String, String>,
    fragments: Vec<String>,
    yielded: Arc<AtomicUsize>,
    fail_on_dispatch: bool,
}

impl ScriptedModel {
    pub fn completing(text: impl Into<String>) -> Self {
        Self {
            completion: Ok(text.into()),
            fragments: Vec::new(),
            yielded: Arc::new(AtomicUsize::new(0)),
            fail_on_dispatch: false,
        }
    }

    pub fn streaming(fragments: Vec<String>) -> Self {
        Self {
            completion: Err("no completion scripted".to_string()),
            fragments,
            yielded: Arc::new(AtomicUsize::new(0)),
            fail_on_dispatch: false,
        }
    }

    /// Fails both entry points before producing any output.
    pub fn failing() -> Self {
        Self {
            completion: Err("scripted failure".to_string()),
            fragments: Vec::new(),
            yielded: Arc::new(AtomicUsize::new(0)),
            fail_on_dispatch: true,
        }
    }

    /// Handle to the count of fragments yielded so far.
    pub fn yield_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.yielded)
    }
}

#[async_trait]
impl ChatModel for ScriptedModel {
    async fn complete(
        &self,
        _system: &str,
        _user: &str,
        _options: CompletionOptions,
    ) -> Result<String, LlmError> {
        self.completion
            .clone()
            .map_err(|message| LlmError::Api { status: 500, message })
    }

    async fn stream_reply(
        &self,
        _system: &str,
        _messages: Vec<ModelMessage>,
    ) -> Result<TextStream, LlmError> {
        if self.fail_on_dispatch {
            return Err(LlmError::Api {
                status: 500,
                message: "scripted failure".to_string(),
            });
        }
        let fragments = self.fragments.clone();
        let yielded = Arc::clone(&self.yielded);
        let stream = async_stream::stream! {
            for fragment in fragments {
                yielded.fetch_add(1, Ordering::SeqCst);
                yield Ok(fragment);
            }
        };
        Ok(Box::pin(stream))
    }
}
