//! Logging utilities and structured logging support

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system with `RUST_LOG` or the default filter
pub fn init() {
    init_with_level("info");
}

/// Initialize logging with a default filter that `RUST_LOG` overrides.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_with_level(default_filter: &str) {
    let env = env_logger::Env::default().default_filter_or(default_filter);
    if env_logger::Builder::from_env(env).try_init().is_err() {
        log::debug!("Logger already initialized, keeping existing configuration");
    }
}
