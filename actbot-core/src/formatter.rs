//! Formatter registry: optional per-action result formatting functions.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

/// Converts an action's raw result into user-facing reply text. Implemented for any
/// matching closure, so formatters can be registered inline.
pub trait Formatter: Send + Sync {
    fn format(&self, result: &Value) -> anyhow::Result<String>;
}

impl<F> Formatter for F
where
    F: Fn(&Value) -> anyhow::Result<String> + Send + Sync,
{
    fn format(&self, result: &Value) -> anyhow::Result<String> {
        self(result)
    }
}

/// Mapping from action name to formatter. Absence of an entry is a valid state and
/// means "delegate formatting to the LLM".
#[derive(Default, Clone)]
pub struct FormatterRegistry {
    formatters: HashMap<String, Arc<dyn Formatter>>,
}

impl FormatterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Associates a formatter with an action name; overwrites silently.
    pub fn register(&mut self, action_name: impl Into<String>, formatter: Arc<dyn Formatter>) {
        let action_name = action_name.into();
        debug!(action = %action_name, "registering formatter");
        self.formatters.insert(action_name, formatter);
    }

    /// Bulk registration; same overwrite semantics as [`register`](Self::register).
    pub fn register_all<I>(&mut self, formatters: I)
    where
        I: IntoIterator<Item = (String, Arc<dyn Formatter>)>,
    {
        for (name, formatter) in formatters {
            self.register(name, formatter);
        }
    }

    pub fn get(&self, action_name: &str) -> Option<Arc<dyn Formatter>> {
        self.formatters.get(action_name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// **Test: registered formatter is found and formats; unknown name is None.**
    #[test]
    fn test_register_and_get() {
        let mut registry = FormatterRegistry::new();
        registry.register(
            "calculate",
            Arc::new(|result: &Value| -> anyhow::Result<String> { Ok(format!("= {}", result["result"])) }),
        );

        let formatter = registry.get("calculate").expect("formatter registered");
        let text = formatter.format(&json!({"result": 108})).unwrap();
        assert_eq!(text, "= 108");

        assert!(registry.get("get_time").is_none());
    }

    /// **Test: register_all overwrites existing entries silently.**
    #[test]
    fn test_register_all_overwrites() {
        let mut registry = FormatterRegistry::new();
        registry.register("a", Arc::new(|_: &Value| -> anyhow::Result<String> { Ok("first".to_string()) }));
        registry.register_all(vec![(
            "a".to_string(),
            Arc::new(|_: &Value| -> anyhow::Result<String> { Ok("second".to_string()) }) as Arc<dyn Formatter>,
        )]);

        let text = registry.get("a").unwrap().format(&json!(null)).unwrap();
        assert_eq!(text, "second");
    }
}
