// rfcval/src/logger.rs
//! Process-wide logger initialization backed by `env_logger`.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global logger once. An explicit level overrides
/// `RUST_LOG`; `None` defers to the environment. Safe to call repeatedly
/// (tests and the binary share it).
pub fn init_logger(level: Option<log::LevelFilter>) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::from_default_env();
        if let Some(level) = level {
            builder.filter_level(level);
        }
        builder.format_timestamp(None);
        let _ = builder.try_init();
    });
}
