mod split_msg;
pub use split_msg::*;

use std::time::Duration;

use futures::Future;
use serenity::{
    http::Http,
    model::{
        channel::Message,
        id::{ChannelId, UserId},
    },
    Error,
};

/// Discord refuses messages longer than this many characters.
pub const DISCORD_MESSAGE_LIMIT: usize = 2000;

pub trait HttpArchSendMsg {
    /// Opinionated method to send a message. Splits the message into many
    /// if it's longer than the character limit.
    ///
    /// Does *not* retry on failure; serenity already waits out rate limits,
    /// and anything else failing might have actually gone through.
    fn archsendmsg(
        &self,
        to_where: ChannelId,
        text: &str,
    ) -> impl Future<Output = Result<Vec<Message>, Error>> + Send;

    /// Same as [`HttpArchSendMsg::archsendmsg`], but opens a DM channel
    /// with the user first.
    fn archsenddm(
        &self,
        to_whom: UserId,
        text: &str,
    ) -> impl Future<Output = Result<Vec<Message>, Error>> + Send;
}

impl HttpArchSendMsg for Http {
    async fn archsendmsg(&self, to_where: ChannelId, text: &str) -> Result<Vec<Message>, Error> {
        let mut sent_messages = Vec::new();

        for text in SplitOverLengthTokens::new(text, DISCORD_MESSAGE_LIMIT) {
            if !sent_messages.is_empty() {
                // Keep the pieces in order on the receiving end.
                tokio::time::sleep(Duration::from_millis(500)).await;
            }
            sent_messages.push(to_where.say(self, text).await?);
        }

        Ok(sent_messages)
    }

    async fn archsenddm(&self, to_whom: UserId, text: &str) -> Result<Vec<Message>, Error> {
        let dm_channel = to_whom.create_dm_channel(self).await?;
        self.archsendmsg(dm_channel.id, text).await
    }
}
