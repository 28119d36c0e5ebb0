use serenity::{
    async_trait,
    model::{channel::Message, gateway::Ready},
    prelude::*,
};

use bot_commons::*;

struct PrintEverything;

#[async_trait]
impl EventHandler for PrintEverything {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        log::info!("Logged in as {}", ready.user.name);
    }

    async fn message(&self, _ctx: Context, msg: Message) {
        println!(
            "channel {} message {} from {}: {:?}",
            msg.channel_id, msg.id, msg.author.id, msg.content
        );
        for attachment in &msg.attachments {
            println!("    attachment: {}", attachment.filename);
        }
    }
}

/// Runs a Discord bot and prints all messages it receives to stdout.
/// This is useful to find out channel IDs and see what exactly the
/// bot receives, attachment names included.
async fn run_bot_to_print_messages() {
    log::info!("Starting The thingamading...");

    let key = load_bot_key().expect("Could not load bot key!");

    let intents = GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&key, intents)
        .event_handler(PrintEverything)
        .await
        .expect("Could not create the client!");

    log::info!("Listening and printing all messages.");
    if let Some(Err(e)) = make_interruptible(client.start()).await {
        log::error!("Client died: {e}");
    }

    log::info!("it appears we have been bonked.");
}

fn main() {
    start_everything(run_bot_to_print_messages());
}
