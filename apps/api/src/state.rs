use std::sync::Arc;

use crate::llm_client::ChatModel;

/// Shared application state injected into all route handlers via Axum
/// extractors. The model lives behind the `ChatModel` trait so tests can
/// swap in a scripted fake.
#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn ChatModel>,
}
