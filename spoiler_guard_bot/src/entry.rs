use std::sync::Arc;

use bot_commons::make_interruptible;
use serenity::{http::Http, model::gateway::GatewayIntents, Client};

use crate::{config::Config, context::AppContext, handlers::Handler, platform::DiscordChannel};

/// Start the bot and run until it's stopped with Ctrl+C or the gateway dies.
pub async fn entry() {
    log::info!("ASYNC WOOOO");

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Bad configuration: {e}");
            return;
        }
    };

    log::info!(
        "Watching channel {} with a grace period of {:?}.",
        config.channel_id,
        config.grace_period
    );

    let http = Arc::new(Http::new(&config.token));
    let channel = Arc::new(DiscordChannel::new(http, config.channel_id));
    let app = Arc::new(AppContext::new(config.clone(), channel));

    let intents = GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    log::info!("Creating the client...");

    let mut client = match Client::builder(&config.token, intents)
        .event_handler(Handler { app: app.clone() })
        .await
    {
        Ok(client) => client,
        Err(e) => {
            log::error!("Failed to create the client: {e}");
            return;
        }
    };

    log::info!("Dispatching the dispatcher!");

    let result = make_interruptible(client.start()).await;
    match result {
        Some(Ok(())) => log::info!("Gateway closed."),
        Some(Err(e)) => log::error!("Client died: {e}"),
        None => client.shard_manager.shutdown_all().await,
    }

    let lost = app.escalator.shutdown();
    if !lost.is_empty() {
        log::warn!(
            "Dropped {} unfinished case(s) for messages: {:?}",
            lost.len(),
            lost
        );
    }

    log::info!("it appears we have been bonked.");
}
