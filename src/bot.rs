use crate::commands::{guide, hours, ping};
use crate::types::{Data, Error};
use poise::serenity_prelude as serenity;
use rusthours::battlemetrics::BattlemetricsClient;
use rusthours::playtime::PlaytimeAggregator;
use rusthours::{health, Config};
use std::sync::Arc;
use tracing::{error, info, warn};

pub async fn run() -> Result<(), Error> {
    let config = Config::from_env()?;

    let http_client = reqwest::Client::builder()
        .user_agent(concat!("rusthours/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let provider = BattlemetricsClient::new(http_client, config.battlemetrics_api_url.as_str())
        .with_token(config.battlemetrics_token.clone());
    let aggregator = PlaytimeAggregator::new(Arc::new(provider), config.playtime_source);
    info!("Reading playtime from {} ({})", config.battlemetrics_api_url, config.playtime_source);

    // Hosting platforms probe this port to decide whether the bot is alive
    let port = config.port;
    tokio::spawn(async move {
        if let Err(e) = health::serve(port).await {
            error!("Health check server stopped: {}", e);
        }
    });

    let guild_id = config.guild_id;
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![ping(), hours(), guide()],
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |context, ready, framework| {
            Box::pin(async move {
                info!("Bot is online! Logged in as {}", ready.user.name);
                let commands = &framework.options().commands;
                match guild_id {
                    Some(id) => {
                        poise::builtins::register_in_guild(context, commands, serenity::GuildId::new(id)).await?;
                        info!("Registered {} commands in guild {}", commands.len(), id);
                    }
                    None => {
                        poise::builtins::register_globally(context, commands).await?;
                        info!("Registered {} commands globally", commands.len());
                    }
                }
                Ok(Data { aggregator })
            })
        })
        .build();

    let intents = serenity::GatewayIntents::GUILDS;
    let mut client = serenity::ClientBuilder::new(&config.discord_token, intents)
        .framework(framework)
        .await?;

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Shutting down...");
                shard_manager.shutdown_all().await;
            }
            Err(e) => warn!("Failed to listen for Ctrl+C: {}", e),
        }
    });

    client.start().await?;

    Ok(())
}

/// Log framework errors and answer the interaction so it never hangs.
async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Error in command '{}': {:?}", ctx.command().name, error);
            let reply = ctx
                .say("❌ Something went wrong while running this command. Please try again later.")
                .await;
            if let Err(e) = reply {
                warn!("Failed to send error message: {}", e);
            }
        }
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                error!("Error while handling error: {}", e);
            }
        }
    }
}
