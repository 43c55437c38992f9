//! HTTP routes.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderValue, Method, StatusCode},
    routing::{get, post},
    Json, Router,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tutor_domain::DomainError;
use tutor_shared::{ChatRequest, ChatResponse, ErrorResponse, HealthResponse, CHAT_PATH, HEALTH_PATH};

use crate::app::App;
use crate::use_cases::tutoring::TutorError;

/// Create all API routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route(CHAT_PATH, post(chat))
        .route(HEALTH_PATH, get(health))
}

/// Assemble the full router: API routes, request tracing, CORS, and the
/// optional static front-end.
pub fn build_router(app: Arc<App>, cors_allowed_origins: Option<&str>, static_dir: &Path) -> Router {
    let mut router = routes().with_state(app);

    if static_dir.is_dir() {
        tracing::info!(dir = %static_dir.display(), "Serving static front-end");
        let index = ServeFile::new(static_dir.join("index.html"));
        router = router.fallback_service(ServeDir::new(static_dir).fallback(index));
    } else {
        tracing::debug!(dir = %static_dir.display(), "No static front-end directory");
    }

    router = router.layer(TraceLayer::new_for_http());

    if let Some(cors) = cors_allowed_origins.and_then(build_cors_layer) {
        router = router.layer(cors);
    }

    router
}

/// Build a CORS layer from a `*` or comma-separated origin list.
pub fn build_cors_layer(allowed_origins: &str) -> Option<CorsLayer> {
    let allowed_origins = allowed_origins.trim();
    if allowed_origins.is_empty() {
        return None;
    }

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        // Browser clients post JSON, which triggers a preflight.
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    if allowed_origins == "*" {
        return Some(cors.allow_origin(Any));
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect();

    if origins.is_empty() {
        return None;
    }

    Some(cors.allow_origin(origins))
}

async fn health(State(app): State<Arc<App>>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(app.clock.now()))
}

async fn chat(
    State(app): State<Arc<App>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(request) = payload?;

    let (message, history) = request.into_parts()?;

    let exchanged = app
        .use_cases
        .tutoring
        .exchange
        .execute(&history, message.as_str())
        .await?;

    Ok(Json(ChatResponse {
        response: exchanged.reply,
        conversation_history: exchanged.history,
    }))
}

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    /// Body refused before parsing (oversized, wrong content type).
    Rejected(StatusCode, String),
    Internal(String),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(msg))).into_response()
            }
            ApiError::Rejected(status, msg) => {
                (status, Json(ErrorResponse::new(msg))).into_response()
            }
            ApiError::Internal(details) => {
                tracing::error!(error = %details, "Chat request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("Failed to get AI response").with_details(details)),
                )
                    .into_response()
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection, "Rejected chat body");
        let status = rejection.status();
        match status {
            StatusCode::PAYLOAD_TOO_LARGE | StatusCode::UNSUPPORTED_MEDIA_TYPE => {
                ApiError::Rejected(status, rejection.body_text())
            }
            // Syntax and shape errors are the caller's malformed request.
            _ => ApiError::BadRequest(rejection.body_text()),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation(msg) | DomainError::Parse(msg) => ApiError::BadRequest(msg),
        }
    }
}

impl From<TutorError> for ApiError {
    fn from(e: TutorError) -> Self {
        match e {
            TutorError::Validation(e) => e.into(),
            TutorError::Service(e) => ApiError::Internal(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{LlmError, LlmResponse, MockClockPort, MockLlmPort};
    use crate::prompt_templates::PromptTemplate;
    use axum::{body::Body, http::Request};
    use chrono::{TimeZone, Utc};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_app(llm: MockLlmPort) -> Arc<App> {
        let mut clock = MockClockPort::new();
        clock
            .expect_now()
            .returning(|| Utc.with_ymd_and_hms(2025, 6, 15, 10, 30, 0).unwrap());
        Arc::new(App::new(
            Arc::new(llm),
            PromptTemplate::default(),
            Some(1000),
            Arc::new(clock),
        ))
    }

    fn test_router(llm: MockLlmPort) -> Router {
        build_router(test_app(llm), Some("*"), Path::new("does-not-exist"))
    }

    fn post_chat(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/chat")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn chat_returns_reply_and_extended_history() {
        let mut llm = MockLlmPort::new();
        llm.expect_generate()
            .times(1)
            .returning(|_| Ok(LlmResponse::text("What does 'rate of change' mean to you?")));

        let response = test_router(llm)
            .oneshot(post_chat(r#"{"message": "What is a derivative?"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["response"], "What does 'rate of change' mean to you?");
        assert_eq!(
            body["conversation_history"],
            json!([
                {"role": "user", "content": "What is a derivative?"},
                {"role": "ai", "content": "What does 'rate of change' mean to you?"}
            ])
        );
    }

    #[tokio::test]
    async fn chat_keeps_supplied_history_as_prefix() {
        let mut llm = MockLlmPort::new();
        llm.expect_generate()
            .returning(|_| Ok(LlmResponse::text("Try an example.")));

        let response = test_router(llm)
            .oneshot(post_chat(
                r#"{
                    "message": "I still don't get it",
                    "conversation_history": [
                        {"role": "user", "content": "What is a derivative?"},
                        {"role": "ai", "content": "Think about slopes."}
                    ]
                }"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let history = body["conversation_history"].as_array().unwrap();
        assert_eq!(history.len(), 4);
        assert_eq!(history[0]["content"], "What is a derivative?");
        assert_eq!(history[1]["content"], "Think about slopes.");
        assert_eq!(history[2], json!({"role": "user", "content": "I still don't get it"}));
        assert_eq!(history[3], json!({"role": "ai", "content": "Try an example."}));
    }

    #[tokio::test]
    async fn missing_message_is_bad_request() {
        let mut llm = MockLlmPort::new();
        llm.expect_generate().never();

        let response = test_router(llm)
            .oneshot(post_chat(r#"{"conversation_history": []}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Message is required"})
        );
    }

    #[tokio::test]
    async fn empty_message_is_bad_request() {
        let mut llm = MockLlmPort::new();
        llm.expect_generate().never();

        let response = test_router(llm)
            .oneshot(post_chat(r#"{"message": ""}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "Message is required");
    }

    #[tokio::test]
    async fn malformed_body_is_bad_request() {
        let mut llm = MockLlmPort::new();
        llm.expect_generate().never();

        let response = test_router(llm)
            .oneshot(post_chat("{not json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn missing_content_type_is_unsupported_media_type() {
        let mut llm = MockLlmPort::new();
        llm.expect_generate().never();

        let request = Request::builder()
            .method("POST")
            .uri("/api/chat")
            .body(Body::from(r#"{"message": "hi"}"#))
            .unwrap();
        let response = test_router(llm).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert!(body_json(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn oversized_body_is_payload_too_large() {
        let mut llm = MockLlmPort::new();
        llm.expect_generate().never();

        // Default axum body limit is 2 MiB.
        let big = format!(r#"{{"message": "{}"}}"#, "a".repeat(3 * 1024 * 1024));
        let response = test_router(llm).oneshot(post_chat(&big)).await.unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn unknown_role_is_bad_request() {
        let mut llm = MockLlmPort::new();
        llm.expect_generate().never();

        let response = test_router(llm)
            .oneshot(post_chat(
                r#"{"message": "hi", "conversation_history": [{"role": "system", "content": "x"}]}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn completion_failure_is_server_error_with_details() {
        let mut llm = MockLlmPort::new();
        llm.expect_generate()
            .returning(|_| Err(LlmError::Unauthorized("status 401: Invalid API Key".into())));

        let response = test_router(llm)
            .oneshot(post_chat(r#"{"message": "What is a derivative?"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Failed to get AI response");
        assert!(body["details"].as_str().unwrap().contains("Invalid API Key"));
        assert!(body.get("conversation_history").is_none());
    }

    #[tokio::test]
    async fn health_reports_status_and_time() {
        let response = test_router(MockLlmPort::new())
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["timestamp"], "2025-06-15T10:30:00Z");
    }

    #[tokio::test]
    async fn cors_preflight_allows_any_origin() {
        let response = test_router(MockLlmPort::new())
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/api/chat")
                    .header("origin", "http://localhost:5173")
                    .header("access-control-request-method", "POST")
                    .header("access-control-request-headers", "content-type")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers()["access-control-allow-origin"],
            "*"
        );
    }

    #[tokio::test]
    async fn serves_static_index_as_fallback() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<h1>Concept Clarifier</h1>").unwrap();
        let router = build_router(test_app(MockLlmPort::new()), None, dir.path());

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/some/client/route")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"<h1>Concept Clarifier</h1>");
    }

    #[test]
    fn cors_layer_from_origin_list() {
        assert!(build_cors_layer("http://a.example, http://b.example").is_some());
        assert!(build_cors_layer(" , ").is_none());
        assert!(build_cors_layer("").is_none());
    }
}
