use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use tokio::task::{AbortHandle, JoinHandle};

use crate::{
    platform::SpoilerChannel,
    types::{MessageId, PostedMessage},
};

mod workflow;
pub use workflow::*;

type CaseMap = HashMap<MessageId, AbortHandle>;

fn lock(cases: &Mutex<CaseMap>) -> MutexGuard<'_, CaseMap> {
    // Nothing in here can be left half-updated by a panic.
    cases.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Keeps track of every message currently going through escalation.
/// Each one runs as its own task, so one message's grace period never holds up another's.
pub struct Escalator<C: SpoilerChannel> {
    channel: Arc<C>,
    grace_period: Duration,
    cases: Arc<Mutex<CaseMap>>,
}

impl<C: SpoilerChannel> Escalator<C> {
    pub fn new(channel: Arc<C>, grace_period: Duration) -> Self {
        Self {
            channel,
            grace_period,
            cases: Arc::default(),
        }
    }

    /// Start escalating this message.
    ///
    /// Returns [`None`] if this message is already being escalated; there's only ever
    /// one case per message.
    pub fn flag(&self, message: &PostedMessage) -> Option<JoinHandle<EscalationOutcome>> {
        // Held until the handle is stored, so a case can't remove itself before it's added.
        let mut cases = lock(&self.cases);

        if cases.get(&message.id).is_some_and(|x| !x.is_finished()) {
            log::debug!("Message {} is already being escalated.", message.id);
            return None;
        }

        let mut case = EscalationCase::new(message, self.channel.id());
        let channel = self.channel.clone();
        let grace_period = self.grace_period;
        let registry = Arc::downgrade(&self.cases);

        let handle = tokio::spawn(async move {
            let outcome = run_escalation(channel.as_ref(), &mut case, grace_period).await;
            log::info!("Case of message {} ended: {:?}", case.message_id, outcome);

            if let Some(registry) = registry.upgrade() {
                lock(&registry).remove(&case.message_id);
            }
            outcome
        });

        cases.insert(message.id, handle.abort_handle());
        Some(handle)
    }

    /// IDs of messages currently going through escalation, in no particular order.
    pub fn active_cases(&self) -> Vec<MessageId> {
        lock(&self.cases)
            .iter()
            .filter(|(_, handle)| !handle.is_finished())
            .map(|(id, _)| *id)
            .collect()
    }

    /// Stop all running cases. Cases don't survive a restart anyway.
    /// Returns IDs of messages whose cases got cut short.
    pub fn shutdown(&self) -> Vec<MessageId> {
        let mut stopped = Vec::new();
        for (id, handle) in lock(&self.cases).drain() {
            if !handle.is_finished() {
                handle.abort();
                stopped.push(id);
            }
        }
        stopped
    }
}

impl<C: SpoilerChannel> Drop for Escalator<C> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{platform::mock::MockChannel, types::UserId};

    const GRACE: Duration = Duration::from_secs(60);

    fn post(channel: &MockChannel, id: u64, content: &str) -> PostedMessage {
        let message = PostedMessage {
            id: MessageId(id),
            author: UserId(id + 100),
            content: content.to_string(),
            attachments: Vec::new(),
        };
        channel.post(message.clone());
        message
    }

    #[tokio::test(start_paused = true)]
    async fn no_duplicate_cases() {
        let channel = Arc::new(MockChannel::new());
        let escalator = Escalator::new(channel.clone(), GRACE);
        let message = post(&channel, 1, "oops");

        let first = escalator.flag(&message).expect("first flag starts a case");
        assert!(escalator.flag(&message).is_none());
        assert_eq!(escalator.active_cases(), vec![MessageId(1)]);

        assert_eq!(first.await.unwrap(), EscalationOutcome::Deleted);
        // Exactly one warning and one removal notice.
        assert_eq!(channel.direct_messages().len(), 2);
        assert!(escalator.active_cases().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn cases_run_independently() {
        let channel = Arc::new(MockChannel::new());
        let escalator = Escalator::new(channel.clone(), GRACE);

        let first = escalator.flag(&post(&channel, 1, "oops")).unwrap();
        tokio::time::sleep(GRACE / 2).await;
        let second = escalator.flag(&post(&channel, 2, "oops again")).unwrap();

        let mut active = escalator.active_cases();
        active.sort();
        assert_eq!(active, vec![MessageId(1), MessageId(2)]);

        // The second one gets fixed, the first one doesn't.
        tokio::time::sleep(GRACE).await;
        channel.edit(MessageId(2), "||oops again||");

        assert_eq!(first.await.unwrap(), EscalationOutcome::Deleted);
        assert_eq!(second.await.unwrap(), EscalationOutcome::Resolved);
        assert_eq!(channel.deleted(), vec![MessageId(1)]);
        assert!(channel.exists(MessageId(2)));
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_stops_everything() {
        let channel = Arc::new(MockChannel::new());
        let escalator = Escalator::new(channel.clone(), GRACE);

        let handle = escalator.flag(&post(&channel, 1, "oops")).unwrap();
        let mut stopped = escalator.shutdown();
        stopped.sort();
        assert_eq!(stopped, vec![MessageId(1)]);

        assert!(handle.await.unwrap_err().is_cancelled());
        assert!(escalator.active_cases().is_empty());
        assert!(channel.direct_messages().is_empty());
        assert!(channel.exists(MessageId(1)));
    }

    #[tokio::test(start_paused = true)]
    async fn can_reflag_after_a_case_ends() {
        let channel = Arc::new(MockChannel::new());
        let escalator = Escalator::new(channel.clone(), GRACE);
        let message = post(&channel, 1, "oops");

        let handle = escalator.flag(&message).unwrap();
        tokio::time::sleep(GRACE / 2).await;
        channel.edit(MessageId(1), "||fixed||");
        assert_eq!(handle.await.unwrap(), EscalationOutcome::Resolved);

        assert!(escalator.flag(&message).is_some());
    }
}
