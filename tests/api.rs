// tests/api.rs

use std::sync::Arc;
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{ Request, StatusCode };
use serde_json::{ json, Value };
use tower::ServiceExt;

use journal_companion::companion::CompanionService;
use journal_companion::config::ServiceConfig;
use journal_companion::llm::LlmError;
use journal_companion::llm::chat::{ ChatClient, ChatCompletion, ModelEntry };
use journal_companion::server::api::router;

/// Runtime that is never reachable.
struct DownRuntime;

#[async_trait]
impl ChatClient for DownRuntime {
    async fn chat(&self, _request: &ChatCompletion) -> Result<String, LlmError> {
        Err(LlmError::Status { status: 503, body: "connection refused".into() })
    }

    async fn list_models(&self) -> Result<Vec<ModelEntry>, LlmError> {
        Err(LlmError::Status { status: 503, body: "connection refused".into() })
    }
}

/// Runtime that always answers with the same text.
struct EchoRuntime(&'static str);

#[async_trait]
impl ChatClient for EchoRuntime {
    async fn chat(&self, _request: &ChatCompletion) -> Result<String, LlmError> {
        Ok(self.0.to_string())
    }

    async fn list_models(&self) -> Result<Vec<ModelEntry>, LlmError> {
        Ok(vec![ModelEntry::named("deepseek-r1:1.5b", "deepseek-r1:1.5b")])
    }
}

fn app(client: Arc<dyn ChatClient>) -> axum::Router {
    router(CompanionService::new(client, ServiceConfig::default()))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("origin", "http://localhost:8081")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn read_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_route_reports_liveness() {
    let response = app(Arc::new(DownRuntime))
        .oneshot(Request::builder().uri("/test").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await, json!({ "status": "ok", "message": "Test route working" }));
}

#[tokio::test]
async fn respond_friend_failure_returns_canned_text() {
    let response = app(Arc::new(DownRuntime))
        .oneshot(post_json("/api/respond", json!({
            "content": "I got promoted",
            "emotion": "happy",
            "advisorPerspective": "friend",
            "intensity": 4
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        read_json(response).await,
        json!({
            "response": "Hey there, as your friend, I just want to say I totally get why you're feeling happy! That's a lot to deal with, but I know you've got this. Want to grab coffee soon? I'm always here for you, no matter what."
        })
    );
}

#[tokio::test]
async fn respond_never_returns_500_when_runtime_is_down() {
    let bodies = [
        json!({ "content": "x", "emotion": "sad", "advisorPerspective": "therapist" }),
        json!({ "content": "x", "emotion": "sad", "recipient": "partner", "intensity": 2 }),
        json!({ "content": "x", "emotion": "sad", "advisorPerspective": "mentor", "recipient": "family" }),
        json!({ "content": "x", "emotion": "sad", "advisorPerspective": "coach" }),
        json!({ "emotion": "sad" }),
    ];

    let expected_prefixes = [
        "As your therapist, I want to acknowledge that your feelings of sad are completely valid.",
        "Dear partner, I wanted to open up to you about something I've been feeling. I've experienced sad with intensity level 2 recently: x",
        "Dear family, I've been getting some support for my sad feelings, and my mentor suggested: As your mentor,",
        "As someone who cares about you, I want to say I understand your sad feelings.",
        "Thank you for sharing how you feel sad.",
    ];

    for (body, prefix) in bodies.into_iter().zip(expected_prefixes) {
        let response = app(Arc::new(DownRuntime)).oneshot(post_json("/api/respond", body.clone())).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{}", body);
        let json = read_json(response).await;
        assert!(json["response"].as_str().unwrap().starts_with(prefix), "{}", body);
    }
}

#[tokio::test]
async fn respond_self_recipient_gets_reflection_lead_in() {
    let response = app(Arc::new(EchoRuntime("<think>hmm</think> Today I felt proud of my work.")))
        .oneshot(post_json("/api/respond", json!({
            "content": "I got promoted",
            "emotion": "happy",
            "recipient": "self"
        })))
        .await
        .unwrap();

    let json = read_json(response).await;
    assert_eq!(json["response"], "Personal reflection: Today I felt proud of my work.");
}

#[tokio::test]
async fn chat_returns_model_text_and_name() {
    let response = app(Arc::new(EchoRuntime("<think>\nreasoning\n</think>\n\n**Paris**")))
        .oneshot(post_json("/api/chat", json!({ "message": "Capital of France?", "model": "llama3" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await, json!({ "response": "**Paris**", "model": "llama3" }));
}

#[tokio::test]
async fn chat_failure_reports_fallback_model() {
    let response = app(Arc::new(DownRuntime))
        .oneshot(post_json("/api/chat", json!({ "message": "hello" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    assert_eq!(json["model"], "fallback");
    assert!(json["response"].as_str().unwrap().starts_with("Thank you for sharing your thoughts"));
}

#[tokio::test]
async fn malformed_json_is_a_500_with_error_text() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app(Arc::new(EchoRuntime("unused"))).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = read_json(response).await;
    assert!(!json["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn analyze_falls_back_by_emotion() {
    let response = app(Arc::new(DownRuntime))
        .oneshot(post_json("/api/analyze", json!({ "content": "deadline tomorrow", "emotion": "anxious", "intensity": 5 })))
        .await
        .unwrap();

    let json = read_json(response).await;
    assert!(json["analysis"].as_str().unwrap().starts_with("I sense anxiousness with 5 intensity in your journal entry."));
}

#[tokio::test]
async fn models_returns_two_placeholders_when_runtime_is_down() {
    let response = app(Arc::new(DownRuntime))
        .oneshot(Request::builder().uri("/api/models").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        read_json(response).await,
        json!([
            { "id": "gpt-3.5-turbo", "name": "GPT-3.5 Turbo" },
            { "id": "gpt-4", "name": "GPT-4" }
        ])
    );
}

#[tokio::test]
async fn models_lists_runtime_models() {
    let response = app(Arc::new(EchoRuntime("")))
        .oneshot(Request::builder().uri("/api/models").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let json = read_json(response).await;
    assert_eq!(json[0]["id"], "deepseek-r1:1.5b");
}

#[tokio::test]
async fn cors_preflight_is_acknowledged() {
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/respond")
        .header("origin", "http://localhost:8081")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .body(Body::empty())
        .unwrap();
    let response = app(Arc::new(DownRuntime)).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-max-age"], "3600");
    assert!(headers["access-control-allow-methods"].to_str().unwrap().contains("POST"));
}

#[tokio::test]
async fn options_without_preflight_headers_is_acknowledged() {
    for uri in ["/api/chat", "/api/models", "/api/analyze", "/api/respond"] {
        let request = Request::builder()
            .method("OPTIONS")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = app(Arc::new(DownRuntime)).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK, "{}", uri);
        assert_eq!(response.headers()["access-control-allow-origin"], "*", "{}", uri);
    }
}

#[tokio::test]
async fn every_response_carries_cors_origin() {
    let response = app(Arc::new(DownRuntime))
        .oneshot(post_json("/api/respond", json!({ "emotion": "calm" })))
        .await
        .unwrap();

    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}

#[tokio::test]
async fn loosely_typed_fields_fall_back_instead_of_failing() {
    let cases = [
        ("/api/respond", json!({ "content": "x", "intensity": "4", "emotion": null, "recipient": "self" })),
        ("/api/respond", json!({ "content": "x", "emotion": "sad", "intensity": 4.0, "advisorPerspective": "friend" })),
        ("/api/analyze", json!({ "content": "x", "emotion": "sad", "intensity": "2" })),
        ("/api/chat", json!({ "message": "hello", "temperature": "0.7" })),
    ];

    for (uri, body) in cases {
        let response = app(Arc::new(DownRuntime)).oneshot(post_json(uri, body.clone())).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{} {}", uri, body);
    }
}

#[tokio::test]
async fn string_intensity_reaches_the_fallback_text() {
    let response = app(Arc::new(DownRuntime))
        .oneshot(post_json("/api/respond", json!({
            "content": "I got promoted",
            "emotion": null,
            "recipient": "self",
            "intensity": "4"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    assert!(json["response"].as_str().unwrap().starts_with("Personal reflection: I've been feeling  with intensity level 4."));
}
