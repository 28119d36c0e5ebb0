use bot_commons::*;

fn main() {
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "WARN,spoiler_guard_bot=debug,bot_commons=info");
    }
    start_everything(spoiler_guard_bot::entry());
}
