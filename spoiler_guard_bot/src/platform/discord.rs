use std::sync::Arc;

use bot_commons::useful_methods::HttpArchSendMsg;
use serenity::{http::Http, model::channel::Message};

use super::{ChannelError, SpoilerChannel};
use crate::types::{Attachment, ChannelId, MessageId, PostedMessage, UserId};

impl From<serenity::Error> for ChannelError {
    fn from(e: serenity::Error) -> Self {
        if let serenity::Error::Http(http_error) = &e {
            // Unknown Message, Unknown User and friends.
            if http_error.status_code().is_some_and(|x| x.as_u16() == 404) {
                return ChannelError::NotFound;
            }
        }
        ChannelError::Discord(e)
    }
}

/// Convert a message received from Discord into what we care about.
pub fn posted_message(message: &Message) -> PostedMessage {
    PostedMessage {
        id: MessageId(message.id.get()),
        author: UserId(message.author.id.get()),
        content: message.content.clone(),
        attachments: message
            .attachments
            .iter()
            .map(|x| Attachment::new(x.filename.as_str()))
            .collect(),
    }
}

/// A Discord text channel, accessed over the REST API.
pub struct DiscordChannel {
    http: Arc<Http>,
    channel_id: serenity::model::id::ChannelId,
}

impl DiscordChannel {
    /// # Panics
    ///
    /// Panics if `channel_id` is 0, which is never a valid Discord ID.
    pub fn new(http: Arc<Http>, channel_id: ChannelId) -> Self {
        Self {
            http,
            channel_id: serenity::model::id::ChannelId::new(channel_id.0),
        }
    }
}

// Discord IDs are never 0, and all of the ones we get come from Discord.
fn message_id(message_id: MessageId) -> serenity::model::id::MessageId {
    serenity::model::id::MessageId::new(message_id.0)
}

impl SpoilerChannel for DiscordChannel {
    fn id(&self) -> ChannelId {
        ChannelId(self.channel_id.get())
    }

    async fn fetch_message(&self, id: MessageId) -> Result<PostedMessage, ChannelError> {
        let message = self.channel_id.message(&self.http, message_id(id)).await?;
        Ok(posted_message(&message))
    }

    async fn delete_message(&self, id: MessageId) -> Result<(), ChannelError> {
        self.channel_id
            .delete_message(&self.http, message_id(id))
            .await?;
        Ok(())
    }

    async fn send_direct_message(&self, user_id: UserId, text: &str) -> Result<(), ChannelError> {
        let user_id = serenity::model::id::UserId::new(user_id.0);
        self.http.archsenddm(user_id, text).await?;
        Ok(())
    }
}
