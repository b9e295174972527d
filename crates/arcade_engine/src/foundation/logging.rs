//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` is used
/// (for example `"info"` or `"asteroids=debug"`). Calling this twice is
/// harmless, the second call is ignored.
pub fn init(default_filter: &str) {
    let env = env_logger::Env::default().default_filter_or(default_filter);
    if env_logger::Builder::from_env(env).try_init().is_err() {
        log::trace!("logger already initialized");
    }
}
