use std::time::Duration;

use tokio::time::sleep;

use crate::{
    actions,
    platform::{ChannelError, SpoilerChannel},
    spoiler_checker::check_compliance,
    types::{ChannelId, MessageId, PostedMessage, UserId},
};

/// Where a case is in the warn-then-delete sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscalationState {
    /// First grace period, before any warning.
    Waiting1,
    /// The author got the warning DM.
    Warned,
    /// Second grace period, after the warning.
    Waiting2,
    /// The message got fixed or disappeared on its own.
    Resolved,
    /// We removed the message.
    Deleted,
}

/// How a case ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscalationOutcome {
    /// Fixed, or gone by other means. Nothing more to do.
    Resolved,
    /// Still not spoilered after the warning, so it got removed.
    Deleted,
    /// A Discord request failed midway. Given up on without retrying,
    /// so that nobody gets warned or punished twice.
    Abandoned,
}

/// One unspoilered message going through escalation.
#[derive(Debug, Clone)]
pub struct EscalationCase {
    pub message_id: MessageId,
    pub author: UserId,
    pub channel_id: ChannelId,
    /// Text of the message as it was when it got flagged, for the warning.
    pub flagged_content: String,
    state: EscalationState,
}

impl EscalationCase {
    pub fn new(message: &PostedMessage, channel_id: ChannelId) -> Self {
        Self {
            message_id: message.id,
            author: message.author,
            channel_id,
            flagged_content: message.content.clone(),
            state: EscalationState::Waiting1,
        }
    }

    pub fn state(&self) -> EscalationState {
        self.state
    }

    fn transition(&mut self, to: EscalationState) {
        log::debug!(
            "Message {}: {:?} -> {:?}",
            self.message_id,
            self.state,
            to
        );
        self.state = to;
    }

    fn resolve(&mut self) -> EscalationOutcome {
        self.transition(EscalationState::Resolved);
        EscalationOutcome::Resolved
    }
}

/// Walk the case through the whole sequence:
/// wait, recheck, warn, wait, recheck, delete.
///
/// Every step only happens if the recheck right before it still finds the message
/// unspoilered, and nothing gets deleted unless the warning went out.
pub async fn run_escalation(
    channel: &impl SpoilerChannel,
    case: &mut EscalationCase,
    grace_period: Duration,
) -> EscalationOutcome {
    debug_assert_eq!(case.state(), EscalationState::Waiting1);

    sleep(grace_period).await;

    if check_compliance(channel, case.message_id).await.is_compliant() {
        return case.resolve();
    }

    if let Err(e) = actions::send_warning(channel, case, grace_period).await {
        log::warn!(
            "Couldn't warn user {} about message {}, leaving it be: {e}",
            case.author,
            case.message_id
        );
        return EscalationOutcome::Abandoned;
    }
    case.transition(EscalationState::Warned);
    case.transition(EscalationState::Waiting2);

    sleep(grace_period).await;

    if check_compliance(channel, case.message_id).await.is_compliant() {
        return case.resolve();
    }

    match actions::punish(channel, case).await {
        Ok(()) => {
            case.transition(EscalationState::Deleted);
            EscalationOutcome::Deleted
        }
        Err(ChannelError::NotFound) => {
            // Someone beat us to it.
            case.resolve()
        }
        Err(e) => {
            log::warn!("Couldn't delete message {}: {e}", case.message_id);
            EscalationOutcome::Abandoned
        }
    }
}
