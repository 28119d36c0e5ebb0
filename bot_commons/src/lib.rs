//! This crate houses functions common for my Discord bots, because some
//! things are just boilerplate and aaAAAAAAAAA

use std::future::Future;

pub mod useful_methods;

/// Initialize logging and start the `closure` in an async runtime.
/// Logging is enabled by default on level `info` unless overridden
/// by environment variable `RUST_LOG`. This uses the crate
/// [pretty_env_logger][] internally, see its documentation for more details.
///
/// [pretty_env_logger]: https://docs.rs/pretty_env_logger
///
/// # Panics
///
/// Panics if the tokio runtime can't be built.
pub fn start_everything(closure: impl Future<Output = ()>) {
    let log_level = std::env::var_os("RUST_LOG")
        .unwrap_or_else(|| std::ffi::OsString::from("info"))
        .into_string()
        .unwrap_or_else(|_| String::from("info"));

    let running_as_systemd_service = std::env::var_os("JOURNAL_STREAM").is_some();

    let mut builder = match running_as_systemd_service {
        true => pretty_env_logger::formatted_builder(),
        false => pretty_env_logger::formatted_timed_builder(),
    };

    builder.parse_filters(&log_level);

    if builder.try_init().is_err() {
        log::error!("Tried to init logger twice!");
    }

    log::info!("hi");

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to build the tokio runtime!")
        .block_on(closure);
}

/// Name of the file the bot token is read from, if `BOT_TOKEN` is not set.
/// Debug builds use a separate one so a test bot can't accidentally moderate for real.
pub const KEY_FILE: &str = match cfg!(debug_assertions) {
    true => "key_debug",
    false => "key",
};

/// Load the bot token. The `BOT_TOKEN` environment variable wins, otherwise
/// it's read from [`KEY_FILE`] in the working directory.
///
/// # Errors
///
/// Errors if there's no environment variable and the key file can't be read.
pub fn load_bot_key() -> std::io::Result<String> {
    if let Some(key) = std::env::var("BOT_TOKEN").ok().filter(|x| !x.trim().is_empty()) {
        return Ok(key.trim().to_string());
    }

    let key = std::fs::read_to_string(KEY_FILE)?;
    Ok(key.trim().to_string())
}

/// Run `f` until it finishes or Ctrl+C is pressed, whichever comes first.
/// Returns [`None`] if it got interrupted.
pub async fn make_interruptible<T>(f: impl Future<Output = T>) -> Option<T> {
    tokio::select! {
        output = f => Some(output),
        _ = tokio::signal::ctrl_c() => {
            log::info!("Got Ctrl+C, stopping...");
            None
        }
    }
}
