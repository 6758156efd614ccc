//! Type definitions and aliases for the bot.
//!
//! This module contains shared types used throughout the application.

use rusthours::playtime::PlaytimeAggregator;

/// Bot application data shared across all commands.
///
/// This data is accessible in all command handlers through the context.
pub struct Data {
    /// Builds player summaries from the Battlemetrics API
    pub aggregator: PlaytimeAggregator,
}

/// Error type for bot commands (maintains compatibility with poise).
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Command context type alias for easier usage.
pub type Context<'a> = poise::Context<'a, Data, Error>;
