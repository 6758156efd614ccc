//! Ping command for bot health check.

use crate::types::{Context, Error};

/// Replies with Pong! - Health check command
#[poise::command(slash_command)]
pub async fn ping(context: Context<'_>) -> Result<(), Error> {
    context.say("Pong! 🏓").await?;
    Ok(())
}
