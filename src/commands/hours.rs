//! Player hours command.
//!
//! Looks up a Battlemetrics player and shows how long they played Rust,
//! broken down by region, aim training, and most played servers.

use poise::serenity_prelude as serenity;
use tracing::{error, info};

use rusthours::playtime::PlayerSummary;
use rusthours::utils::format::{format_hours, last_seen_text, profile_url, top_servers_text};
use rusthours::RustHoursError;

use super::{ERROR_RED, RUST_ICON_URL, RUST_ORANGE};
use crate::types::{Context, Error};

/// Get comprehensive Rust player statistics from Battlemetrics
#[poise::command(slash_command)]
pub async fn hours(
    context: Context<'_>,
    #[description = "Battlemetrics player ID (found in player's Battlemetrics URL)"]
    #[rename = "playerid"]
    player_id: String,
) -> Result<(), Error> {
    info!(%player_id, "Hours command started");

    // Aggregation takes two API round trips, longer than Discord's 3s window
    context.defer().await?;

    let embed = match context.data().aggregator.aggregate(&player_id).await {
        Ok(summary) => summary_embed(&summary),
        Err(RustHoursError::InvalidInput(reason)) => {
            info!("Rejected player ID: {}", reason);
            invalid_id_embed()
        }
        Err(RustHoursError::NotFound(_)) => not_found_embed(&player_id),
        Err(e) => {
            error!("Failed to aggregate hours for {}: {}", player_id, e);
            generic_error_embed()
        }
    };

    context.send(poise::CreateReply::default().embed(embed)).await?;
    info!(%player_id, "Hours command completed");
    Ok(())
}

fn summary_embed(summary: &PlayerSummary) -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .color(RUST_ORANGE)
        .title("🦀 Rust Player Statistics")
        .thumbnail(RUST_ICON_URL)
        .field("👤 Player Name", summary.name.as_str(), true)
        .field("⏰ Total Hours", format!("{} hours", summary.total_hours), true)
        .field("🕒 Last Seen", last_seen_text(summary.last_seen), true)
        .field("🇺🇸 US Servers", format_hours(summary.us_hours), true)
        .field("🇪🇺 EU Servers", format_hours(summary.eu_hours), true)
        .field("🎯 Aim Training", format_hours(summary.training_hours), true)
        .field("🏆 Top 5 Servers", top_servers_text(&summary.top_servers), false)
        .field(
            "🔗 Battlemetrics Profile",
            format!("[View Full Profile]({})", profile_url(&summary.player_id)),
            false,
        )
        .footer(serenity::CreateEmbedFooter::new("Data provided by Battlemetrics API"))
        .timestamp(serenity::Timestamp::now())
}

fn invalid_id_embed() -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .color(ERROR_RED)
        .title("❌ Invalid Player ID")
        .description("Please provide a valid numeric player ID from the Battlemetrics URL.")
        .field(
            "Example",
            "From URL: `https://www.battlemetrics.com/players/123456789`\nUse: `/hours playerid:123456789`",
            false,
        )
}

fn not_found_embed(player_id: &str) -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .color(ERROR_RED)
        .title("❌ Player Not Found")
        .description(format!("Could not find player with ID: {}", player_id))
        .field(
            "Tips",
            "• Make sure the player ID is correct\n• Check that the player exists on Battlemetrics\n• Try again in a few moments",
            false,
        )
}

fn generic_error_embed() -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .color(ERROR_RED)
        .title("❌ Error")
        .description("Something went wrong while fetching player data. Please try again later.")
}
