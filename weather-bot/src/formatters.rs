//! Custom formatters for the demo actions. With these registered the pipeline never
//! needs an LLM formatting call for weather, time, or calculator results.

use actbot_core::Formatter;
use serde_json::Value;
use std::sync::Arc;

fn field<'a>(result: &'a Value, name: &str) -> anyhow::Result<&'a Value> {
    result
        .get(name)
        .ok_or_else(|| anyhow::anyhow!("result is missing '{}'", name))
}

pub fn format_weather_temperature(result: &Value) -> anyhow::Result<String> {
    Ok(format!(
        "The current temperature in {} is {}°{} (as of {})",
        field(result, "city")?.as_str().unwrap_or_default(),
        field(result, "temperature")?,
        field(result, "unit")?.as_str().unwrap_or_default(),
        field(result, "timestamp")?.as_str().unwrap_or_default(),
    ))
}

pub fn format_time(result: &Value) -> anyhow::Result<String> {
    Ok(format!(
        "The current time is {} on {} ({} timezone)",
        field(result, "time")?.as_str().unwrap_or_default(),
        field(result, "date")?.as_str().unwrap_or_default(),
        field(result, "timezone")?.as_str().unwrap_or_default(),
    ))
}

pub fn format_calculate(result: &Value) -> anyhow::Result<String> {
    Ok(format!(
        "The result of {} is {}",
        field(result, "expression")?.as_str().unwrap_or_default(),
        field(result, "result")?,
    ))
}

/// Formatter registrations for the demo action set.
pub fn action_formatters() -> Vec<(String, Arc<dyn Formatter>)> {
    vec![
        (
            "get_weather_temperature".to_string(),
            Arc::new(format_weather_temperature) as Arc<dyn Formatter>,
        ),
        ("get_time".to_string(), Arc::new(format_time) as Arc<dyn Formatter>),
        ("calculate".to_string(), Arc::new(format_calculate) as Arc<dyn Formatter>),
    ]
}
