//! # weather-bot
//!
//! Demo action set for actbot: weather, time, and calculator actions, their custom
//! formatters, and a deterministic keyword pattern matcher. Used by actbot-cli as the
//! default action set and by integration tests as a realistic fixture.

pub mod actions;
pub mod formatters;
pub mod patterns;

pub use actions::WeatherBotActions;
pub use formatters::action_formatters;
pub use patterns::SimplePatternMatcher;
