//! Request/response models for the REST layer.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

fn new_message_id() -> String {
    Uuid::new_v4().to_string()
}

/// Body of the conversation webhook.
#[derive(Debug, Deserialize)]
pub struct WebhookRequest {
    pub sender: String,
    pub message: String,
}

/// One reply addressed to the original sender.
#[derive(Debug, Serialize, Deserialize)]
pub struct WebhookResponse {
    pub recipient_id: String,
    pub text: String,
}

/// Intent attached to a parse result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Intent {
    pub name: String,
    pub confidence: f64,
}

/// Body of `/model/parse`.
#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub text: String,
    #[serde(default = "new_message_id")]
    pub message_id: String,
}

/// Parse result: resolved intent plus ranking. Entities are not extracted.
#[derive(Debug, Serialize, Deserialize)]
pub struct ParseData {
    pub entities: Vec<serde_json::Value>,
    pub intent: Intent,
    pub intent_ranking: Vec<Intent>,
    pub text: String,
    pub message_id: String,
}

impl ParseData {
    pub fn with_intent(text: String, message_id: String, intent: Intent) -> Self {
        Self {
            entities: Vec::new(),
            intent: intent.clone(),
            intent_ranking: vec![intent],
            text,
            message_id,
        }
    }
}
