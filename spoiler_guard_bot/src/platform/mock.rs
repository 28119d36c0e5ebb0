//! In-memory channel for tests.

use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard},
};

use super::{ChannelError, SpoilerChannel};
use crate::types::{ChannelId, MessageId, PostedMessage, UserId};

#[derive(Default)]
struct State {
    messages: HashMap<MessageId, PostedMessage>,
    direct_messages: Vec<(UserId, String)>,
    deleted: Vec<MessageId>,
    fetches: usize,
    fail_fetches: bool,
    fail_deletes: bool,
    fail_direct_messages: bool,
}

#[derive(Default)]
pub struct MockChannel {
    state: Mutex<State>,
}

impl MockChannel {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    pub fn post(&self, message: PostedMessage) {
        self.state().messages.insert(message.id, message);
    }

    pub fn edit(&self, id: MessageId, content: &str) {
        self.state()
            .messages
            .get_mut(&id)
            .expect("edited a message that was never posted")
            .content = content.to_string();
    }

    /// Delete as if a moderator did it by hand.
    pub fn remove(&self, id: MessageId) {
        self.state().messages.remove(&id);
    }

    pub fn fail_fetches(&self) {
        self.state().fail_fetches = true;
    }

    pub fn fail_deletes(&self) {
        self.state().fail_deletes = true;
    }

    pub fn fail_direct_messages(&self) {
        self.state().fail_direct_messages = true;
    }

    pub fn fetch_count(&self) -> usize {
        self.state().fetches
    }

    pub fn direct_messages(&self) -> Vec<(UserId, String)> {
        self.state().direct_messages.clone()
    }

    /// Messages deleted through [`SpoilerChannel::delete_message`].
    pub fn deleted(&self) -> Vec<MessageId> {
        self.state().deleted.clone()
    }

    pub fn exists(&self, id: MessageId) -> bool {
        self.state().messages.contains_key(&id)
    }
}

fn outage() -> ChannelError {
    ChannelError::Discord(serenity::Error::Other("simulated outage"))
}

impl SpoilerChannel for MockChannel {
    fn id(&self) -> ChannelId {
        ChannelId(1000)
    }

    async fn fetch_message(&self, message_id: MessageId) -> Result<PostedMessage, ChannelError> {
        let mut state = self.state();
        state.fetches += 1;
        if state.fail_fetches {
            return Err(outage());
        }
        state
            .messages
            .get(&message_id)
            .cloned()
            .ok_or(ChannelError::NotFound)
    }

    async fn delete_message(&self, message_id: MessageId) -> Result<(), ChannelError> {
        let mut state = self.state();
        if state.fail_deletes {
            return Err(outage());
        }
        state
            .messages
            .remove(&message_id)
            .ok_or(ChannelError::NotFound)?;
        state.deleted.push(message_id);
        Ok(())
    }

    async fn send_direct_message(&self, user_id: UserId, text: &str) -> Result<(), ChannelError> {
        let mut state = self.state();
        if state.fail_direct_messages {
            return Err(outage());
        }
        state.direct_messages.push((user_id, text.to_string()));
        Ok(())
    }
}
