use std::fmt::Display;

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
        pub struct $name(pub u64);

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                Display::fmt(&self.0, f)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }
    };
}

id_type!(
    /// ID of a message, unique within its channel.
    MessageId
);
id_type!(
    /// ID of a user.
    UserId
);
id_type!(
    /// ID of a channel.
    ChannelId
);

/// A file attached to a message. Only the name matters to us.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub filename: String,
}

impl Attachment {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
        }
    }
}

/// A message as it is *right now* in the channel.
///
/// Users can edit messages at any time, so don't hold on to one of these
/// for longer than a single check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostedMessage {
    pub id: MessageId,
    pub author: UserId,
    pub content: String,
    pub attachments: Vec<Attachment>,
}
