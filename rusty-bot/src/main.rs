mod config;

use std::sync::Arc;

use tracing::{error, info};
use twilight_gateway::{EventTypeFlags, Intents, Shard, ShardId, StreamExt as _};
use twilight_http::Client;
use twilight_model::gateway::event::Event;

use rustls::crypto::ring::default_provider;

use rusty_commands::{handle_interaction, handle_message};
use rusty_core::Context;
use rusty_paginator::PaginatorManager;

use crate::config::BotConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("failed to install rustls ring provider"))?;

    // Load the .env file
    dotenvy::dotenv().ok();
    let config = BotConfig::from_env()?;

    // Create a single shared HTTP Client
    let http = Arc::new(Client::new(config.token.clone()));
    let paginator = PaginatorManager::new(config.paginator);
    let sweeper = paginator.start_sweeper();
    let ctx = Context::new(Arc::clone(&http), paginator);

    // Declare which intents the bot has
    let intents = Intents::GUILDS | Intents::GUILD_MESSAGES | Intents::MESSAGE_CONTENT;

    // A shard is one Gateway WebSocket connection to Discord
    let mut shard = Shard::new(ShardId::new(0, 1), config.token, intents);

    info!("Rusty is connecting...");

    while let Some(item) = shard.next_event(EventTypeFlags::all()).await {
        let event = match item {
            Ok(event) => event,
            Err(source) => {
                error!(?source, "gateway event stream error");
                continue;
            }
        };

        match event {
            Event::Ready(_) => {
                info!("Rusty has successfully awoken!");
            }
            Event::MessageCreate(msg) => {
                let ctx = ctx.clone();
                tokio::spawn(async move {
                    if let Err(source) = handle_message(ctx, msg).await {
                        error!(?source, "message handler failed");
                    }
                });
            }
            Event::InteractionCreate(interaction) => {
                let ctx = ctx.clone();
                tokio::spawn(async move {
                    if let Err(source) = handle_interaction(ctx, interaction).await {
                        error!(?source, "interaction handler failed");
                    }
                });
            }
            _ => {} // Ignore unused events
        }
    }

    sweeper.shutdown().await;
    Ok(()) // Return Success, shutdown cleanly
}
