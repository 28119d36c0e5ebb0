use std::fmt::{Display, Write};

/// Hash something that shouldn't end up in the logs as is, like the bot's own ID,
/// so that log lines can still be told apart.
///
/// This is just to keep things out of casual sight. It is not cryptographically secure.
///
/// If the thing can't even be formatted, a random value is returned instead.
pub fn hash_secret(secret: &impl Display) -> String {
    let mut text = String::new();
    if let Err(e) = write!(text, "{secret}") {
        log::warn!("Trouble formatting a secret, making up a random hash instead: {e}");
        return format!("{:08x}", rand::random::<u32>());
    }
    format!("{:08x}", crc32fast::hash(text.as_bytes()))
}
