//! Deterministic keyword matcher for the demo actions. Handles common phrasings with
//! zero latency and zero cost; anything it does not recognize falls through to the LLM.

use actbot_core::{ActionInfo, ArgMap, PatternMatch, PatternProcessor};
use serde_json::json;

pub struct SimplePatternMatcher;

impl SimplePatternMatcher {
    /// Extracts the text after the last occurrence of a marker word, trimming
    /// trailing punctuation; e.g. "weather in New York?" -> "New York".
    fn after_marker(message: &str, marker: &str) -> Option<String> {
        let lowered = message.to_lowercase();
        let idx = lowered.rfind(&format!(" {} ", marker))?;
        // Index into the original text; lowercasing can shift byte offsets for
        // non-ASCII input, so fall back to no match on a boundary mismatch.
        let tail = message
            .get(idx + marker.len() + 2..)?
            .trim()
            .trim_end_matches(['?', '.', '!'])
            .trim();
        if tail.is_empty() {
            None
        } else {
            Some(tail.to_string())
        }
    }

    fn has_action(catalog: &[ActionInfo], name: &str) -> bool {
        catalog.iter().any(|info| info.name == name)
    }
}

impl PatternProcessor for SimplePatternMatcher {
    fn process(&self, message: &str, catalog: &[ActionInfo]) -> Option<PatternMatch> {
        let lowered = message.to_lowercase();

        if (lowered.contains("calculate") || message.contains(['+', '-', '*', '/', '^']))
            && Self::has_action(catalog, "calculate")
        {
            let mut expression = lowered.replace("calculate", "").trim().to_string();
            if expression.is_empty() {
                expression = message.to_string();
            }
            let mut args = ArgMap::new();
            args.insert("expression".to_string(), json!(expression));
            return Some(PatternMatch::new("calculate", args));
        }

        if (lowered.contains("weather") || lowered.contains("temperature"))
            && Self::has_action(catalog, "get_weather_temperature")
        {
            let city = Self::after_marker(message, "in").unwrap_or_else(|| "London".to_string());
            let mut args = ArgMap::new();
            args.insert("city_name".to_string(), json!(city));
            return Some(PatternMatch::new("get_weather_temperature", args));
        }

        if (lowered.contains("time") || lowered.contains("clock"))
            && Self::has_action(catalog, "get_time")
        {
            let mut args = ArgMap::new();
            if let Some(timezone) = Self::after_marker(message, "in") {
                args.insert("timezone".to_string(), json!(timezone));
            }
            return Some(PatternMatch::new("get_time", args));
        }

        None
    }
}
