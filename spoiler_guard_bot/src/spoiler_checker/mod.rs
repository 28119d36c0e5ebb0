use crate::{
    platform::{ChannelError, SpoilerChannel},
    types::{MessageId, PostedMessage},
};

mod attachments;
mod text;

pub use attachments::{are_attachments_compliant, SPOILER_PREFIX};
pub use text::is_text_compliant;

/// What a message looks like right now, spoiler-wise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compliance {
    Compliant,
    NonCompliant,
    /// Couldn't get the message. Probably deleted, so nothing to hide anymore.
    Gone,
}

impl Compliance {
    /// True if there's no reason to keep bugging the author.
    pub fn is_compliant(self) -> bool {
        match self {
            Compliance::Compliant | Compliance::Gone => true,
            Compliance::NonCompliant => false,
        }
    }
}

/// Check a message we already have in hand.
pub fn is_message_compliant(message: &PostedMessage) -> bool {
    is_text_compliant(&message.content) && are_attachments_compliant(&message.attachments)
}

/// Fetch the message anew and check it. The author might have edited it since we last saw it.
pub async fn check_compliance(channel: &impl SpoilerChannel, message_id: MessageId) -> Compliance {
    let message = match channel.fetch_message(message_id).await {
        Ok(message) => message,
        Err(ChannelError::NotFound) => {
            log::info!("Message {message_id} is gone, nothing to check.");
            return Compliance::Gone;
        }
        Err(e) => {
            // Can't see it, can't judge it.
            log::warn!("Failed to fetch message {message_id}, treating it as gone: {e}");
            return Compliance::Gone;
        }
    };

    if is_message_compliant(&message) {
        Compliance::Compliant
    } else {
        Compliance::NonCompliant
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        platform::mock::MockChannel,
        types::{Attachment, UserId},
    };

    fn message(content: &str, attachments: &[&str]) -> PostedMessage {
        PostedMessage {
            id: MessageId(1),
            author: UserId(2),
            content: content.to_string(),
            attachments: attachments.iter().copied().map(Attachment::new).collect(),
        }
    }

    #[test]
    fn both_rules_must_hold() {
        assert!(is_message_compliant(&message("||a||", &["SPOILER_a.png"])));
        assert!(is_message_compliant(&message("", &[])));
        assert!(!is_message_compliant(&message("a", &["SPOILER_a.png"])));
        assert!(!is_message_compliant(&message("||a||", &["picture.png"])));
    }

    #[tokio::test]
    async fn checks_the_fresh_copy() {
        let channel = MockChannel::new();
        channel.post(message("no spoiler here", &[]));

        assert_eq!(check_compliance(&channel, MessageId(1)).await, Compliance::NonCompliant);

        channel.edit(MessageId(1), "||no spoiler here||");
        assert_eq!(check_compliance(&channel, MessageId(1)).await, Compliance::Compliant);
    }

    #[tokio::test]
    async fn checking_twice_gives_the_same_answer() {
        let channel = MockChannel::new();
        channel.post(message("oops", &["SPOILER_x.png"]));

        let first = check_compliance(&channel, MessageId(1)).await;
        let second = check_compliance(&channel, MessageId(1)).await;
        assert_eq!(first, second);
        assert_eq!(channel.fetch_count(), 2);
    }

    #[tokio::test]
    async fn missing_message_counts_as_compliant() {
        let channel = MockChannel::new();

        let result = check_compliance(&channel, MessageId(404)).await;
        assert_eq!(result, Compliance::Gone);
        assert!(result.is_compliant());
    }

    #[tokio::test]
    async fn fetch_failure_counts_as_compliant() {
        let channel = MockChannel::new();
        channel.post(message("oops", &[]));
        channel.fail_fetches();

        assert_eq!(check_compliance(&channel, MessageId(1)).await, Compliance::Gone);
    }
}
