//! Pattern processor seam: deterministic, non-LLM matching from text to an action.

use crate::types::{ActionInfo, ArgMap};

/// A confident match produced by a pattern processor.
#[derive(Debug, Clone)]
pub struct PatternMatch {
    pub action: String,
    pub args: ArgMap,
}

impl PatternMatch {
    pub fn new(action: impl Into<String>, args: ArgMap) -> Self {
        Self {
            action: action.into(),
            args,
        }
    }
}

/// Matches free text directly to an action and arguments without an LLM call.
/// Processors run in registration order as a short-circuiting chain; the first
/// confident match wins. Returning `None` means "no match, try the next one".
pub trait PatternProcessor: Send + Sync {
    fn process(&self, message: &str, catalog: &[ActionInfo]) -> Option<PatternMatch>;
}
