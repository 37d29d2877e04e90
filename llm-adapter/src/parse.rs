//! Strict parsing of the LLM resolution reply. Model output is untrusted input:
//! anything that is not the expected JSON object is a resolution failure, not an error.

use actbot_core::ArgMap;
use serde::Deserialize;

#[derive(Deserialize)]
struct ResolvedCall {
    action: Option<String>,
    #[serde(default)]
    arguments: ArgMap,
}

/// Parses `{"action": ..., "arguments": {...}}` from the model reply.
/// Returns `None` for malformed JSON, a null/empty action, or any other shape.
/// Markdown code fences around the object are tolerated.
pub fn parse_resolution(raw: &str) -> Option<(String, ArgMap)> {
    let text = strip_code_fences(raw.trim());
    let call: ResolvedCall = serde_json::from_str(text).ok()?;
    let action = call.action?;
    if action.trim().is_empty() {
        return None;
    }
    Some((action, call.arguments))
}

/// Strips a surrounding ``` / ```json fence if present.
fn strip_code_fences(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.trim_start_matches(['\r', '\n']);
    rest.strip_suffix("```").map(str::trim_end).unwrap_or(rest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_well_formed() {
        let (action, args) =
            parse_resolution(r#"{"action": "calculate", "arguments": {"expression": "15 * 7 + 3"}}"#)
                .unwrap();
        assert_eq!(action, "calculate");
        assert_eq!(args["expression"], json!("15 * 7 + 3"));
    }

    #[test]
    fn test_parse_missing_arguments_defaults_empty() {
        let (action, args) = parse_resolution(r#"{"action": "get_time"}"#).unwrap();
        assert_eq!(action, "get_time");
        assert!(args.is_empty());
    }

    #[test]
    fn test_parse_null_action_is_no_match() {
        assert!(parse_resolution(r#"{"action": null}"#).is_none());
        assert!(parse_resolution(r#"{"action": ""}"#).is_none());
    }

    #[test]
    fn test_parse_malformed_is_no_match() {
        assert!(parse_resolution("I would use the calculate action here.").is_none());
        assert!(parse_resolution("{\"action\": \"calculate\"").is_none());
        assert!(parse_resolution("").is_none());
    }

    #[test]
    fn test_parse_tolerates_code_fences() {
        let raw = "```json\n{\"action\": \"get_time\", \"arguments\": {\"timezone\": \"UTC\"}}\n```";
        let (action, args) = parse_resolution(raw).unwrap();
        assert_eq!(action, "get_time");
        assert_eq!(args["timezone"], json!("UTC"));
    }
}
