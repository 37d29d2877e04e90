//! # actbot-core
//!
//! Core types for the conversational-action framework: [`Action`], [`ActionRegistry`],
//! [`FormatterRegistry`], the [`PatternProcessor`] seam, turn outcomes, error taxonomy,
//! and tracing initialization. Transport-agnostic; used by llm-adapter, actbot-server
//! and actbot-telegram.

pub mod error;
pub mod formatter;
pub mod logger;
pub mod pattern;
pub mod registry;
pub mod types;

pub use error::{ActbotError, Result};
pub use formatter::{Formatter, FormatterRegistry};
pub use logger::init_tracing;
pub use pattern::{PatternMatch, PatternProcessor};
pub use registry::{ActionRegistry, ActionSource};
pub use types::{
    Action, ActionHandler, ActionInfo, ActionParam, ArgMap, ParamType, Turn, TurnOutcome,
};
