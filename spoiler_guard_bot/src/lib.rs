//! Source code for Spoiler Guard Bot, a Discord bot that keeps a spoiler channel spoilered.
//!
//! Every message posted in the watched channel has to have all of its text between
//! `||` markers and all of its attachments named `SPOILER_*`. If it doesn't, the author
//! gets a grace period to fix it, then a warning DM and another grace period, and then
//! the message is removed.

/// Various types used throughout.
mod types;

/// Configuration, read once at startup.
mod config;

/// Miscellaneous functions.
mod misc;

/// The Discord side of things.
mod platform;

/// Checks for whether a message is properly spoilered.
mod spoiler_checker;

/// Warning and punishing of unspoilered messages over time.
mod escalation;

/// Functions that perform stuff via the bot.
mod actions;

/// Stuff the event handler needs.
mod context;

/// Functions that handle events from Discord.
mod handlers;

/// Entry function that starts the bot.
mod entry;
pub use entry::*;
