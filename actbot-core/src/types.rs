//! Core types: parameter schema, action, catalog snapshot, and turn outcome.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Arguments for one action invocation, keyed by parameter name.
pub type ArgMap = serde_json::Map<String, Value>;

/// Declared type of an action parameter. Drives argument coercion at dispatch time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    String,
    Integer,
    Float,
    Boolean,
    Any,
}

impl ParamType {
    /// Coerces a value to this type where the conversion is unambiguous
    /// (numeric strings to numbers, "true"/"false" to bool, scalars to string).
    /// Anything else is passed through unchanged.
    pub fn coerce(&self, value: Value) -> Value {
        match self {
            ParamType::Integer => {
                if let Value::String(s) = &value {
                    if let Ok(n) = s.trim().parse::<i64>() {
                        return Value::from(n);
                    }
                }
                value
            }
            ParamType::Float => {
                match &value {
                    Value::String(s) => {
                        if let Ok(n) = s.trim().parse::<f64>() {
                            if let Some(f) = serde_json::Number::from_f64(n) {
                                return Value::Number(f);
                            }
                        }
                    }
                    Value::Number(n) => {
                        if let Some(f) =
                            n.as_i64().and_then(|i| serde_json::Number::from_f64(i as f64))
                        {
                            return Value::Number(f);
                        }
                    }
                    _ => {}
                }
                value
            }
            ParamType::Boolean => {
                if let Value::String(s) = &value {
                    match s.trim().to_lowercase().as_str() {
                        "true" => return Value::Bool(true),
                        "false" => return Value::Bool(false),
                        _ => {}
                    }
                }
                value
            }
            ParamType::String => {
                match &value {
                    Value::Number(n) => return Value::String(n.to_string()),
                    Value::Bool(b) => return Value::String(b.to_string()),
                    _ => {}
                }
                value
            }
            ParamType::Any => value,
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ParamType::String => "string",
            ParamType::Integer => "integer",
            ParamType::Float => "float",
            ParamType::Boolean => "boolean",
            ParamType::Any => "any",
        };
        f.write_str(s)
    }
}

/// One declared parameter of an action. A parameter with a default is never required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionParam {
    pub name: String,
    pub param_type: ParamType,
    pub required: bool,
    pub default: Option<Value>,
    pub description: String,
}

impl ActionParam {
    /// A required parameter with no default.
    pub fn required(name: impl Into<String>, param_type: ParamType) -> Self {
        Self {
            name: name.into(),
            param_type,
            required: true,
            default: None,
            description: String::new(),
        }
    }

    /// An optional parameter with a default value.
    pub fn optional(name: impl Into<String>, param_type: ParamType, default: Value) -> Self {
        Self {
            name: name.into(),
            param_type,
            required: false,
            default: Some(default),
            description: String::new(),
        }
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Executable body of an action. Arguments and result are JSON values; the framework
/// is agnostic to the business payload behind them.
#[async_trait]
pub trait ActionHandler: Send + Sync {
    async fn call(&self, args: ArgMap) -> anyhow::Result<Value>;
}

/// A named, described unit of executable logic with a typed parameter list.
/// Immutable after construction; the registry hands it out behind an `Arc`.
#[derive(Clone)]
pub struct Action {
    pub name: String,
    pub description: String,
    pub parameters: Vec<ActionParam>,
    pub handler: Arc<dyn ActionHandler>,
}

impl Action {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: Vec<ActionParam>,
        handler: Arc<dyn ActionHandler>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
            handler,
        }
    }

    /// Snapshot without the handler, for catalogs, prompts, and the API.
    pub fn info(&self) -> ActionInfo {
        ActionInfo {
            name: self.name.clone(),
            description: self.description.clone(),
            parameters: self.parameters.clone(),
        }
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

/// Serializable snapshot of an action; the unit of the action catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionInfo {
    pub name: String,
    pub description: String,
    pub parameters: Vec<ActionParam>,
}

/// How one conversational turn ended. Everything except `Completed` still carries a
/// user-facing reply; only the transport decides whether to log or branch on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// An action was resolved, invoked, and formatted.
    Completed,
    /// No pattern processor matched and the LLM did not resolve a known action.
    ResolutionFailed,
    /// A required parameter was missing from the extracted arguments.
    ValidationFailed,
    /// The action handler returned an error.
    ExecutionFailed,
}

/// Result of one conversational turn. `reply` is always a non-empty string;
/// request-scoped, never persisted.
#[derive(Debug, Clone)]
pub struct Turn {
    pub reply: String,
    pub action: Option<String>,
    pub outcome: TurnOutcome,
}

impl Turn {
    pub fn succeeded(&self) -> bool {
        self.outcome == TurnOutcome::Completed
    }
}
