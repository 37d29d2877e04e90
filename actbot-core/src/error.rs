use thiserror::Error;

/// Hard errors surfaced by the registry API. Everything that happens inside a live
/// conversational turn is converted to a reply string instead (see [`crate::TurnOutcome`]).
#[derive(Error, Debug)]
pub enum ActbotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Action not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ActbotError>;
