#![allow(clippy::expect_used, reason = "integration test — panics are the assertion mechanism")]

use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use claude4free_core::handlers;
use claude4free_core::registry::ModelRegistry;
use claude4free_core::upstream::{AiGateway, PuterClient, UpstreamError};
use claude4free_types::protocol::{ChatCompletionRequest, ChatMessage, MessageContent};
use claude4free_types::{ChatRequest, FunctionKind, ResponseMode};

fn upstream_chat_request() -> ChatCompletionRequest {
    ChatCompletionRequest {
        driver: "openai-completion".to_string(),
        model: "gpt-4o".to_string(),
        messages: vec![ChatMessage::user(MessageContent::Text("Hi".to_string()))],
    }
}

fn client_for(server: &MockServer) -> PuterClient {
    PuterClient::new(reqwest::Client::new(), server.uri())
}

#[tokio::test]
async fn test_chat_success_roundtrip() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/drivers/chat"))
        .and(body_partial_json(serde_json::json!({
            "driver": "openai-completion",
            "model": "gpt-4o",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": {"content": "Hello from mock!"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let payload = client
        .chat(upstream_chat_request())
        .await
        .expect("200 scenario: expected Ok");

    assert_eq!(payload["message"]["content"], "Hello from mock!");
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/drivers/chat"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .chat(upstream_chat_request())
        .await
        .expect_err("500 scenario: expected Err");

    match err {
        UpstreamError::Status { status, body } => {
            assert_eq!(status, 500);
            assert!(body.contains("Internal Server Error"));
        }
        other => panic!("500 scenario: wrong variant: {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_payload_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/drivers/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .chat(upstream_chat_request())
        .await
        .expect_err("garbage scenario: expected Err");

    assert!(matches!(err, UpstreamError::Malformed(_)), "wrong variant: {err:?}");
}

fn browser_chat_request(message: &str, model: &str) -> ChatRequest {
    ChatRequest {
        message: message.to_string(),
        function: FunctionKind::Chat,
        model: Some(model.to_string()),
        tts_language: "zh-TW".to_string(),
        img_size: "1024x1024".to_string(),
        img_style: String::new(),
        image: None,
    }
}

#[tokio::test]
async fn test_handler_normal_reply_over_http() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/drivers/chat"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"content": "宇宙很大"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let registry = ModelRegistry::new();
    let envelope =
        handlers::dispatch(&browser_chat_request("宇宙", "gpt-4o"), &registry, &client).await;

    assert!(envelope.success);
    assert!(envelope.mode.is_none());
    assert_eq!(envelope.text, "宇宙很大");
}

#[tokio::test]
async fn test_handler_degrades_to_fallback_over_http() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/drivers/chat"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let registry = ModelRegistry::new();
    let envelope =
        handlers::dispatch(&browser_chat_request("你好", "gpt-4o"), &registry, &client).await;

    assert!(envelope.success);
    assert_eq!(envelope.mode, Some(ResponseMode::Fallback));
    assert!(envelope.text.contains("你好"));
    assert!(envelope.text.contains("gpt-4o"));
}
