//! Integration tests for the REST layer via `tower::ServiceExt::oneshot`.
//!
//! Covers: status endpoints, webhook happy path, invalid channel rejection,
//! graceful reply on an unresolvable message, and /model/parse intent mapping.
//! The pipeline runs with a stub LlmClient; no network.

use std::sync::Arc;

use actbot_core::{Action, ActionHandler, ActionParam, ArgMap, ParamType};
use actbot_server::build_router;
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use llm_adapter::LlmAdapter;
use llm_client::{ChatMessage, LlmClient};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Stub LLM: always resolves to the echo action with the raw text as argument.
struct EchoResolverLlm;

#[async_trait]
impl LlmClient for EchoResolverLlm {
    async fn complete(&self, _messages: Vec<ChatMessage>) -> anyhow::Result<String> {
        Ok(r#"{"action": "echo", "arguments": {"text": "hello"}}"#.to_string())
    }
}

/// Stub LLM that never resolves anything.
struct NoMatchLlm;

#[async_trait]
impl LlmClient for NoMatchLlm {
    async fn complete(&self, _messages: Vec<ChatMessage>) -> anyhow::Result<String> {
        Ok(r#"{"action": null}"#.to_string())
    }
}

struct EchoHandler;

#[async_trait]
impl ActionHandler for EchoHandler {
    async fn call(&self, args: ArgMap) -> anyhow::Result<Value> {
        Ok(args["text"].clone())
    }
}

fn echo_adapter(llm: Arc<dyn LlmClient>) -> Arc<LlmAdapter> {
    let mut adapter = LlmAdapter::new(llm);
    adapter
        .register_action(Action::new(
            "echo",
            "Echo the given text",
            vec![ActionParam::required("text", ParamType::String)],
            Arc::new(EchoHandler),
        ))
        .unwrap();
    adapter.register_formatter(
        "echo",
        Arc::new(|result: &Value| -> anyhow::Result<String> {
            Ok(result.as_str().unwrap_or_default().to_string())
        }),
    );
    Arc::new(adapter)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// **Test: GET /status reports ok and lists endpoints.**
#[tokio::test]
async fn test_status_endpoint() {
    let app = build_router(echo_adapter(Arc::new(EchoResolverLlm)));

    let response = app
        .oneshot(Request::builder().uri("/status").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert!(body["available_endpoints"]
        .as_array()
        .unwrap()
        .contains(&json!("/webhooks/rest/webhook")));
}

/// **Test: webhook returns the reply addressed to the sender.**
#[tokio::test]
async fn test_webhook_happy_path() {
    let app = build_router(echo_adapter(Arc::new(EchoResolverLlm)));

    let response = app
        .oneshot(post_json(
            "/webhooks/rest/webhook",
            json!({"sender": "user-1", "message": "say hello"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body[0]["recipient_id"], "user-1");
    assert_eq!(body[0]["text"], "hello");
}

/// **Test: the callback channel is accepted; an unknown channel is a 400.**
#[tokio::test]
async fn test_webhook_channel_validation() {
    let adapter = echo_adapter(Arc::new(EchoResolverLlm));

    let ok = build_router(adapter.clone())
        .oneshot(post_json(
            "/webhooks/callback/webhook",
            json!({"sender": "u", "message": "m"}),
        ))
        .await
        .unwrap();
    assert_eq!(ok.status(), StatusCode::OK);

    let bad = build_router(adapter)
        .oneshot(post_json(
            "/webhooks/sms/webhook",
            json!({"sender": "u", "message": "m"}),
        ))
        .await
        .unwrap();
    assert_eq!(bad.status(), StatusCode::BAD_REQUEST);
    let body = body_json(bad).await;
    assert!(body["error"].as_str().unwrap().contains("sms"));
}

/// **Test: an unresolvable message still yields 200 with a clarification reply.**
#[tokio::test]
async fn test_webhook_unresolved_is_still_a_reply() {
    let app = build_router(echo_adapter(Arc::new(NoMatchLlm)));

    let response = app
        .oneshot(post_json(
            "/webhooks/rest/webhook",
            json!({"sender": "u", "message": "gibberish"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(!body[0]["text"].as_str().unwrap().is_empty());
}

/// **Test: /model/parse maps a completed turn to the action intent, otherwise nlu_fallback.**
#[tokio::test]
async fn test_model_parse_intents() {
    let resolved = build_router(echo_adapter(Arc::new(EchoResolverLlm)))
        .oneshot(post_json("/model/parse", json!({"text": "say hello"})))
        .await
        .unwrap();
    let body = body_json(resolved).await;
    assert_eq!(body["intent"]["name"], "echo");
    assert_eq!(body["intent"]["confidence"], 1.0);
    assert_eq!(body["text"], "say hello");
    assert!(!body["message_id"].as_str().unwrap().is_empty());

    let fallback = build_router(echo_adapter(Arc::new(NoMatchLlm)))
        .oneshot(post_json("/model/parse", json!({"text": "gibberish"})))
        .await
        .unwrap();
    let body = body_json(fallback).await;
    assert_eq!(body["intent"]["name"], "nlu_fallback");
    assert_eq!(body["intent"]["confidence"], 0.3);
}
