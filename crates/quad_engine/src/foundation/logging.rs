//! Logging utilities

/// Initialize the logging system
///
/// `default_level` is used when `RUST_LOG` is not set. Diagnostics go to
/// standard error. Calling this more than once is harmless; later calls
/// are ignored.
pub fn init(default_level: &str) {
    let env = env_logger::Env::default().default_filter_or(default_level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
