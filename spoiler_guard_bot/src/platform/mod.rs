use std::future::Future;

use crate::types::{ChannelId, MessageId, PostedMessage, UserId};

mod discord;
pub use discord::*;

#[cfg(test)]
pub mod mock;

#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    /// The message (or user) doesn't exist anymore, or never did.
    #[error("not found")]
    NotFound,
    #[error("Discord request failed: {0}")]
    Discord(#[source] serenity::Error),
}

/// The one channel being watched, as far as moderation is concerned.
pub trait SpoilerChannel: Send + Sync + 'static {
    /// ID of the channel itself.
    fn id(&self) -> ChannelId;

    /// Get the message as it is right now.
    fn fetch_message(
        &self,
        message_id: MessageId,
    ) -> impl Future<Output = Result<PostedMessage, ChannelError>> + Send;

    fn delete_message(
        &self,
        message_id: MessageId,
    ) -> impl Future<Output = Result<(), ChannelError>> + Send;

    /// Privately message a user. Long texts may arrive as several messages.
    fn send_direct_message(
        &self,
        user_id: UserId,
        text: &str,
    ) -> impl Future<Output = Result<(), ChannelError>> + Send;
}
