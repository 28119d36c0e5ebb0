use std::sync::Arc;

use serenity::{
    async_trait,
    model::{channel::Message, gateway::Ready},
    prelude::{Context, EventHandler},
};

use crate::{
    context::AppContext,
    misc::hash_secret,
    platform::{posted_message, SpoilerChannel},
    spoiler_checker::is_message_compliant,
    types::{ChannelId, PostedMessage},
};

/// Serenity event handler. Only cares about new messages in the watched channel.
pub struct Handler {
    pub app: Arc<AppContext>,
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        log::info!(
            "Logged in as {} with ID ({})",
            ready.user.name,
            hash_secret(&ready.user.id)
        );
    }

    async fn message(&self, _ctx: Context, msg: Message) {
        let channel_id = ChannelId(msg.channel_id.get());
        handle_new_message(&self.app, channel_id, msg.author.bot, &posted_message(&msg));
    }
}

/// Check a freshly posted message, and start escalating it if it's not spoilered.
///
/// Never waits for the escalation itself. Returns true if the message got flagged.
pub fn handle_new_message<C: SpoilerChannel>(
    app: &AppContext<C>,
    channel_id: ChannelId,
    from_bot: bool,
    message: &PostedMessage,
) -> bool {
    if channel_id != app.config.channel_id {
        return false;
    }

    if from_bot {
        // Including ourselves. Bots can't get DMs anyway.
        log::debug!("Skipping message {} from a bot.", message.id);
        return false;
    }

    if is_message_compliant(message) {
        log::debug!("Message {} is properly spoilered.", message.id);
        return false;
    }

    log::info!(
        "Message {} from user {} is not spoilered. Starting the countdown.",
        message.id,
        message.author
    );
    app.escalator.flag(message).is_some()
}
