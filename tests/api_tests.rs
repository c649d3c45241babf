use coach_relay::config::Config;
use coach_relay::error::{NOT_CONFIGURED, UPSTREAM_FAILED, USER_MESSAGE_REQUIRED};
use coach_relay::routes::create_router;
use coach_relay::services::persona::DEFAULT_PERSONA;
use coach_relay::state::AppState;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use mockito::{Matcher, ServerGuard};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tower::util::ServiceExt;

const GENERATE_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

fn app(config: &Config) -> Router {
    create_router().with_state(AppState::shared(config))
}

fn config_for(server: &ServerGuard) -> Config {
    Config {
        api_key: Some("test-key".to_string()),
        api_base_url: server.url(),
        ..Config::default()
    }
}

async fn post_chat(app: Router, body: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/chat")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);
    (status, body)
}

fn candidate_with(part: Value) -> String {
    json!({ "candidates": [{ "content": { "role": "model", "parts": [part] } }] }).to_string()
}

#[tokio::test]
async fn test_missing_user_message_is_rejected() {
    let mut server = mockito::Server::new_async().await;
    let provider = server.mock("POST", GENERATE_PATH).expect(0).create_async().await;
    let config = config_for(&server);

    for body in [
        r#"{}"#,
        r#"{"userMessage": ""}"#,
        r#"{"userMessage": "   "}"#,
        r#"{"userMessage": null, "text": "hello"}"#,
        r#"{"userMessage": 42}"#,
        r#"{"message": "I want to grow", "session_id": "abc"}"#,
        "not json at all",
    ] {
        let (status, resp) = post_chat(app(&config), body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
        assert_eq!(resp, json!({ "error": USER_MESSAGE_REQUIRED }), "body: {body}");
    }

    provider.assert_async().await;
}

#[tokio::test]
async fn test_missing_credential_never_calls_provider() {
    let mut server = mockito::Server::new_async().await;
    let provider = server.mock("POST", GENERATE_PATH).expect(0).create_async().await;
    let config = Config {
        api_key: None,
        lazy_credentials: true,
        api_base_url: server.url(),
        ..Config::default()
    };

    for _ in 0..3 {
        let (status, resp) = post_chat(app(&config), r#"{"userMessage": "hello"}"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(resp, json!({ "error": NOT_CONFIGURED }));
    }

    provider.assert_async().await;
}

#[tokio::test]
async fn test_text_reply_has_no_function_call() {
    let mut server = mockito::Server::new_async().await;
    let provider = server
        .mock("POST", GENERATE_PATH)
        .match_header("x-goog-api-key", "test-key")
        .match_body(Matcher::PartialJson(json!({
            "systemInstruction": { "parts": [{ "text": DEFAULT_PERSONA }] },
            "contents": [{ "role": "user", "parts": [{ "text": "I want a better work-life balance" }] }]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(candidate_with(json!({ "text": "Great goal! ..." })))
        .expect(1)
        .create_async()
        .await;

    let (status, resp) = post_chat(
        app(&config_for(&server)),
        r#"{"userMessage": "I want a better work-life balance"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp, json!({ "text": "Great goal! ..." }));
    provider.assert_async().await;
}

#[tokio::test]
async fn test_utterance_is_forwarded_as_sent() {
    let mut server = mockito::Server::new_async().await;
    let provider = server
        .mock("POST", GENERATE_PATH)
        .match_body(Matcher::PartialJson(json!({
            "contents": [{ "role": "user", "parts": [{ "text": "  I keep procrastinating\n" }] }]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(candidate_with(json!({ "text": "Let's break it down." })))
        .expect(1)
        .create_async()
        .await;

    let (status, resp) = post_chat(
        app(&config_for(&server)),
        r#"{"userMessage": "  I keep procrastinating\n"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp, json!({ "text": "Let's break it down." }));
    provider.assert_async().await;
}

#[tokio::test]
async fn test_tool_call_is_echoed_with_acknowledgement() {
    let mut server = mockito::Server::new_async().await;
    let args = json!({ "date": "2025-10-20", "time": "10:00 AM EST", "topic": "Career Transition" });
    server
        .mock("POST", GENERATE_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(candidate_with(json!({
            "functionCall": { "name": "schedule_session", "args": args }
        })))
        .create_async()
        .await;

    let (status, resp) = post_chat(
        app(&config_for(&server)),
        r#"{"userMessage": "Book me a session about my career next Monday"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        resp["function_call"],
        json!({ "name": "schedule_session", "args": args })
    );
    assert!(resp["text"].as_str().unwrap().contains("schedule session"));
}

#[tokio::test]
async fn test_provider_failures_become_generic_500() {
    let cases = [
        (503, r#"{"error": {"message": "overloaded"}}"#.to_string()),
        (200, "{not json".to_string()),
        (200, r#"{"candidates": []}"#.to_string()),
        (200, candidate_with(json!({}))),
    ];

    for (provider_status, provider_body) in cases {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", GENERATE_PATH)
            .with_status(provider_status)
            .with_body(&provider_body)
            .create_async()
            .await;

        let (status, resp) =
            post_chat(app(&config_for(&server)), r#"{"userMessage": "hello"}"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "provider: {provider_body}");
        assert_eq!(resp, json!({ "error": UPSTREAM_FAILED }));
    }
}

#[tokio::test]
async fn test_non_post_is_method_not_allowed() {
    let app = app(&Config::default());
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/chat")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(body, json!({ "error": "Method Not Allowed" }));
}

#[tokio::test]
async fn test_health() {
    let response = app(&Config::default())
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
