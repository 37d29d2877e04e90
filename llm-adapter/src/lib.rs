//! # llm-adapter
//!
//! The dispatch pipeline for one conversational turn: resolve an action from free text
//! (pattern-processor chain first, LLM fallback second), validate and coerce arguments,
//! invoke the handler, and format the result (custom formatter or LLM summary).
//!
//! [`LlmAdapter::chat`] never returns an error: every failure inside a live turn is
//! converted into a reply string so one bad action cannot crash the serving process.

mod parse;
mod prompt;
mod validate;

use std::sync::Arc;

use actbot_core::{
    Action, ActionInfo, ActionRegistry, ActionSource, ArgMap, Formatter, FormatterRegistry,
    PatternProcessor, Result, Turn, TurnOutcome,
};
use llm_client::LlmClient;
use serde_json::Value;
use tracing::{info, instrument, warn};

pub use parse::parse_resolution;
pub use validate::validate_args;

/// Reply used when no action could be matched to the input.
const CLARIFICATION_REPLY: &str =
    "I'm not sure how to help with that. Could you rephrase your request?";

/// Output token cap for the formatting call; replies are short summaries, so this
/// is tighter than the client's general-purpose default.
const FORMATTING_MAX_TOKENS: u32 = 150;

/// Orchestrates resolution, validation, invocation, and formatting for one turn.
///
/// Registration (the `&mut self` methods) happens at startup, before the adapter is
/// shared with transports behind an `Arc`; request handling only reads.
pub struct LlmAdapter {
    registry: ActionRegistry,
    formatters: FormatterRegistry,
    processors: Vec<Arc<dyn PatternProcessor>>,
    llm: Arc<dyn LlmClient>,
}

impl LlmAdapter {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self {
            registry: ActionRegistry::new(),
            formatters: FormatterRegistry::new(),
            processors: Vec::new(),
            llm,
        }
    }

    /// Registers every action the source yields.
    pub fn discover(&mut self, source: &dyn ActionSource) -> Result<()> {
        self.registry.discover(source)
    }

    /// Registers a single action (last write wins on name collision).
    pub fn register_action(&mut self, action: Action) -> Result<()> {
        self.registry.register(action)
    }

    /// Appends a pattern processor; processors run in registration order.
    pub fn register_pattern_processor(&mut self, processor: Arc<dyn PatternProcessor>) {
        self.processors.push(processor);
    }

    /// Associates a custom formatter with an action name.
    pub fn register_formatter(&mut self, action_name: impl Into<String>, formatter: Arc<dyn Formatter>) {
        self.formatters.register(action_name, formatter);
    }

    /// Bulk formatter registration.
    pub fn register_formatters<I>(&mut self, formatters: I)
    where
        I: IntoIterator<Item = (String, Arc<dyn Formatter>)>,
    {
        self.formatters.register_all(formatters);
    }

    /// Snapshot of the action catalog.
    pub fn actions(&self) -> Vec<ActionInfo> {
        self.registry.all()
    }

    /// Processes one natural-language message end to end. Always returns a reply.
    #[instrument(skip(self, message))]
    pub async fn chat(&self, message: &str) -> Turn {
        info!(message_len = message.len(), "step: turn started");

        // Resolve: pattern chain first, then one LLM completion call.
        let (name, args) = match self.resolve(message).await {
            Some(resolved) => resolved,
            None => {
                info!("step: no action resolved");
                return Turn {
                    reply: CLARIFICATION_REPLY.to_string(),
                    action: None,
                    outcome: TurnOutcome::ResolutionFailed,
                };
            }
        };

        let action = match self.registry.get(&name) {
            Ok(action) => action,
            Err(_) => {
                warn!(action = %name, "step: resolved action not in registry");
                return Turn {
                    reply: CLARIFICATION_REPLY.to_string(),
                    action: None,
                    outcome: TurnOutcome::ResolutionFailed,
                };
            }
        };
        info!(action = %action.name, "step: action resolved");

        // Validate: fill defaults, coerce declared types, reject missing required params.
        let args = match validate_args(&action, args) {
            Ok(args) => args,
            Err(missing) => {
                info!(action = %action.name, missing = %missing, "step: missing required argument");
                return Turn {
                    reply: format!(
                        "I can't run '{}' without a value for '{}'.",
                        action.name, missing
                    ),
                    action: Some(action.name.clone()),
                    outcome: TurnOutcome::ValidationFailed,
                };
            }
        };

        // Invoke: a handler error becomes a reply, never a crash.
        let result = match action.handler.call(args).await {
            Ok(result) => result,
            Err(e) => {
                warn!(action = %action.name, error = %e, "step: action execution failed");
                return Turn {
                    reply: format!("The action '{}' failed: {}", action.name, e),
                    action: Some(action.name.clone()),
                    outcome: TurnOutcome::ExecutionFailed,
                };
            }
        };
        info!(action = %action.name, "step: action executed");

        let reply = self.format_result(&action, &result).await;
        info!(action = %action.name, reply_len = reply.len(), "step: turn finished");

        Turn {
            reply,
            action: Some(action.name.clone()),
            outcome: TurnOutcome::Completed,
        }
    }

    /// Runs the pattern-processor chain, then falls back to one LLM resolution call.
    async fn resolve(&self, message: &str) -> Option<(String, ArgMap)> {
        let catalog = self.registry.all();

        for processor in &self.processors {
            if let Some(m) = processor.process(message, &catalog) {
                info!(action = %m.action, "step: pattern processor matched");
                return Some((m.action, m.args));
            }
        }

        info!("step: resolving via LLM");
        let messages = prompt::resolution_messages(&catalog, message);
        let raw = match self.llm.complete(messages).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "LLM resolution call failed");
                return None;
            }
        };
        parse_resolution(&raw)
    }

    /// Custom formatter if registered (verbatim), else one LLM formatting call.
    /// Any formatting failure falls back to a raw-result string; the turn still completes.
    async fn format_result(&self, action: &Action, result: &Value) -> String {
        if let Some(formatter) = self.formatters.get(&action.name) {
            match formatter.format(result) {
                Ok(reply) => return reply,
                Err(e) => {
                    warn!(action = %action.name, error = %e, "formatter failed, using raw result");
                    return raw_result_string(result);
                }
            }
        }

        info!(action = %action.name, "step: formatting via LLM");
        let messages = prompt::formatting_messages(&action.name, &action.description, result);
        match self
            .llm
            .complete_with_max_tokens(messages, FORMATTING_MAX_TOKENS)
            .await
        {
            Ok(reply) if !reply.trim().is_empty() => reply.trim().to_string(),
            Ok(_) => raw_result_string(result),
            Err(e) => {
                warn!(action = %action.name, error = %e, "LLM formatting call failed, using raw result");
                raw_result_string(result)
            }
        }
    }
}

/// Best-effort string rendering of a raw action result.
fn raw_result_string(result: &Value) -> String {
    match result {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
