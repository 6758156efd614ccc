//! Guide command.
//!
//! Walks users through finding a player ID and using `/hours`.

use poise::serenity_prelude as serenity;

use rusthours::guide::{GuidePage, GUIDE_PAGES};

use super::{RUST_ICON_URL, RUST_ORANGE};
use crate::types::{Context, Error};

/// Show how to find a player ID and check their hours
#[poise::command(slash_command)]
pub async fn guide(context: Context<'_>) -> Result<(), Error> {
    let reply = GUIDE_PAGES
        .iter()
        .enumerate()
        .fold(poise::CreateReply::default(), |reply, (i, page)| {
            reply.embed(page_embed(page, i == 0))
        });

    context.send(reply).await?;
    Ok(())
}

fn page_embed(page: &GuidePage, first: bool) -> serenity::CreateEmbed {
    let mut embed = serenity::CreateEmbed::new()
        .color(RUST_ORANGE)
        .title(page.title)
        .footer(serenity::CreateEmbedFooter::new(page.footer));

    if first {
        embed = embed.thumbnail(RUST_ICON_URL);
    }
    if let Some(description) = page.description {
        embed = embed.description(description);
    }
    for field in page.fields {
        embed = embed.field(field.name, field.value, false);
    }
    if let Some(image) = page.image {
        embed = embed.image(image);
    }
    embed
}
