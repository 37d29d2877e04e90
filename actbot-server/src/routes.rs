//! Route handlers: status endpoints, conversation webhook, and message parsing.

use axum::extract::{Path, State};
use axum::Json;
use tracing::info;

use crate::dto::{Intent, ParseData, ParseRequest, WebhookRequest, WebhookResponse};
use crate::error::AppError;
use crate::{AppState, VERSION};

/// GET /: liveness check.
pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "API is running",
        "message": "Use the /webhooks/rest/webhook endpoint for natural language processing",
        "version": VERSION,
    }))
}

/// GET /status: status and endpoint listing.
pub async fn status() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": VERSION,
        "available_endpoints": ["/", "/status", "/webhooks/rest/webhook", "/model/parse"],
    }))
}

/// POST /webhooks/{channel}/webhook: process one message through the pipeline.
/// Only the `rest` and `callback` channels exist; anything else is a 400.
/// Pipeline failures are replies, so this returns 200 with reply text either way.
pub async fn webhook(
    State(state): State<AppState>,
    Path(channel): Path<String>,
    Json(request): Json<WebhookRequest>,
) -> Result<Json<Vec<WebhookResponse>>, AppError> {
    if channel != "rest" && channel != "callback" {
        return Err(AppError::bad_request(format!(
            "Invalid REST channel: {channel}"
        )));
    }

    let turn = state.adapter.chat(&request.message).await;
    info!(
        sender = %request.sender,
        action = turn.action.as_deref().unwrap_or("-"),
        succeeded = turn.succeeded(),
        "webhook turn processed"
    );

    Ok(Json(vec![WebhookResponse {
        recipient_id: request.sender,
        text: turn.reply,
    }]))
}

/// POST /model/parse: resolve a message and report it as an intent.
/// An unresolved turn maps to the `nlu_fallback` intent with low confidence.
pub async fn parse(
    State(state): State<AppState>,
    Json(request): Json<ParseRequest>,
) -> Json<ParseData> {
    let turn = state.adapter.chat(&request.text).await;

    let intent = match turn.action {
        Some(action) if turn.succeeded() => Intent {
            name: action,
            confidence: 1.0,
        },
        _ => Intent {
            name: "nlu_fallback".to_string(),
            confidence: 0.3,
        },
    };

    Json(ParseData::with_intent(request.text, request.message_id, intent))
}
