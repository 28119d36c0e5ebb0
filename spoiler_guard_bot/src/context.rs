use std::sync::Arc;

use crate::{
    config::Config,
    escalation::Escalator,
    platform::{DiscordChannel, SpoilerChannel},
};

/// Everything the event handler needs, built once at startup.
pub struct AppContext<C: SpoilerChannel = DiscordChannel> {
    pub config: Config,
    pub escalator: Escalator<C>,
}

impl<C: SpoilerChannel> AppContext<C> {
    pub fn new(config: Config, channel: Arc<C>) -> Self {
        let escalator = Escalator::new(channel, config.grace_period);
        Self { config, escalator }
    }
}
