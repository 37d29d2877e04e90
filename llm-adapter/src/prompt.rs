//! Prompt construction for the two LLM calls: action resolution and result formatting.
//! Kept as two independent small prompts so each expected output stays simple.

use actbot_core::ActionInfo;
use llm_client::ChatMessage;
use serde_json::Value;
use std::fmt::Write;

const RESOLUTION_SYSTEM: &str = "You are an assistant that maps a user message to one of the \
available actions and extracts its arguments. Respond with a single JSON object of the form \
{\"action\": \"<action name>\", \"arguments\": {<parameter>: <value>, ...}}. If no action fits \
the message, respond with {\"action\": null}. Output only the JSON object, nothing else.";

const FORMATTING_SYSTEM: &str =
    "You are a helpful assistant that formats action results in a natural way.";

/// Renders the action catalog: name, description, and parameter schema per action.
fn render_catalog(catalog: &[ActionInfo]) -> String {
    let mut out = String::new();
    for info in catalog {
        let _ = write!(out, "Action: {}\nDescription: {}\nParameters:\n", info.name, info.description);
        for param in &info.parameters {
            let requirement = if param.required { "required" } else { "optional" };
            let _ = write!(
                out,
                "- {} ({}, {}): {}\n",
                param.name, param.param_type, requirement, param.description
            );
        }
        out.push('\n');
    }
    out
}

/// Messages for the resolution call: full catalog plus the user text.
pub fn resolution_messages(catalog: &[ActionInfo], message: &str) -> Vec<ChatMessage> {
    let prompt = format!(
        "You have access to the following actions:\n\n{}User message: {}",
        render_catalog(catalog),
        message
    );
    vec![
        ChatMessage::system(RESOLUTION_SYSTEM),
        ChatMessage::user(prompt),
    ]
}

/// Messages for the formatting call: action name, description, and raw result.
pub fn formatting_messages(action_name: &str, description: &str, result: &Value) -> Vec<ChatMessage> {
    let prompt = format!(
        "Action: {}\nDescription: {}\nResult: {}\n\n\
Please format this result as a natural language response that would be helpful and \
informative to a user. Keep your response concise and focused on the information in the \
result. Do not add any disclaimers, explanations about yourself, or additional information \
not present in the result.",
        action_name, description, result
    );
    vec![
        ChatMessage::system(FORMATTING_SYSTEM),
        ChatMessage::user(prompt),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use actbot_core::{ActionParam, ParamType};
    use serde_json::json;

    #[test]
    fn test_resolution_messages_include_catalog_and_text() {
        let catalog = vec![ActionInfo {
            name: "get_time".to_string(),
            description: "Get the current time".to_string(),
            parameters: vec![
                ActionParam::optional("timezone", ParamType::String, json!(null))
                    .describe("Timezone to report the time in"),
            ],
        }];

        let messages = resolution_messages(&catalog, "what time is it?");
        assert_eq!(messages.len(), 2);
        let user = &messages[1].content;
        assert!(user.contains("Action: get_time"));
        assert!(user.contains("timezone (string, optional)"));
        assert!(user.contains("User message: what time is it?"));
    }

    #[test]
    fn test_formatting_messages_include_result() {
        let messages =
            formatting_messages("calculate", "Evaluate an expression", &json!({"result": 108}));
        assert!(messages[1].content.contains("Action: calculate"));
        assert!(messages[1].content.contains("{\"result\":108}"));
    }
}
