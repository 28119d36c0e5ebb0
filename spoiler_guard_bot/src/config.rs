use std::time::Duration;

use crate::types::ChannelId;

/// How long an author gets to fix their message, both before the warning
/// and between the warning and the deletion.
pub const GRACE_PERIOD: Duration = Duration::from_secs(60);

/// Environment variable with the ID of the channel to watch.
pub const CHANNEL_ID_VAR: &str = "SPOILER_CHANNEL_ID";

/// Environment variable that overrides [`GRACE_PERIOD`], in seconds. For trial runs.
pub const GRACE_SECONDS_VAR: &str = "SPOILER_GRACE_SECONDS";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not load the bot key: {0}")]
    Key(#[from] std::io::Error),
    #[error("SPOILER_CHANNEL_ID is not set")]
    NoChannel,
    #[error("{var} is not a valid {what}: {value:?}")]
    Invalid {
        var: &'static str,
        what: &'static str,
        value: String,
    },
}

/// Everything that's configurable. Read once at startup, never changed afterwards.
#[derive(Clone)]
pub struct Config {
    pub token: String,
    pub channel_id: ChannelId,
    pub grace_period: Duration,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<hidden>")
            .field("channel_id", &self.channel_id)
            .field("grace_period", &self.grace_period)
            .finish()
    }
}

impl Config {
    /// Load the bot key and read the rest from the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let token = bot_commons::load_bot_key()?;
        Self::from_parts(
            token,
            std::env::var(CHANNEL_ID_VAR).ok().as_deref(),
            std::env::var(GRACE_SECONDS_VAR).ok().as_deref(),
        )
    }

    fn from_parts(
        token: String,
        channel_id: Option<&str>,
        grace_seconds: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let channel_id = channel_id.ok_or(ConfigError::NoChannel)?.trim();
        let channel_id = match channel_id.parse::<u64>() {
            Ok(id) if id != 0 => ChannelId(id),
            _ => {
                return Err(ConfigError::Invalid {
                    var: CHANNEL_ID_VAR,
                    what: "channel ID",
                    value: channel_id.to_string(),
                })
            }
        };

        let grace_period = match grace_seconds.map(str::trim) {
            None | Some("") => GRACE_PERIOD,
            Some(seconds) => match seconds.parse::<u64>() {
                Ok(seconds) if seconds > 0 => Duration::from_secs(seconds),
                _ => {
                    return Err(ConfigError::Invalid {
                        var: GRACE_SECONDS_VAR,
                        what: "amount of seconds",
                        value: seconds.to_string(),
                    })
                }
            },
        };

        Ok(Config {
            token,
            channel_id,
            grace_period,
        })
    }
}
