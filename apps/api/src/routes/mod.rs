pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers::handle_analyze;
use crate::catalog::handlers::{handle_get_scenario, handle_list_phases};
use crate::chat::handlers::handle_chat;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog (read-only reference data for the UI)
        .route("/api/v1/phases", get(handle_list_phases))
        .route(
            "/api/v1/scenarios/:phase_id/:difficulty",
            get(handle_get_scenario),
        )
        // Simulator
        .route("/api/v1/chat", post(handle_chat))
        .route("/api/v1/analyze", post(handle_analyze))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::llm_client::testing::ScriptedModel;

    fn app() -> Router {
        build_router(AppState {
            llm: Arc::new(ScriptedModel::completing("{}")),
        })
    }

    #[tokio::test]
    async fn test_health_route_responds_ok() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_phases_route_responds_ok() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/phases")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_scenario_phase_is_404() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/scenarios/phase-9/Easy")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_malformed_chat_body_is_client_error() {
        // Body that is not valid JSON must be rejected before any dispatch.
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/chat")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
