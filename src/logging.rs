//! Logging initialization and configuration.
//!
//! Log output goes to stderr so rendered text on stdout stays clean.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "shell_render=info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Try to initialize the logging system.
///
/// Uses the `RUST_LOG` environment variable for filtering. If not set,
/// defaults to `shell_render=info`. Returns `Err` if logging has already
/// been initialized.
pub fn try_init() -> Result<(), tracing_subscriber::util::TryInitError> {
    install(env_filter())
}

/// Try to initialize logging with an explicit filter directive.
///
/// A bare level such as `debug` applies to this crate only. An unparsable
/// directive falls back to the default filter.
pub fn try_init_with(level: &str) -> Result<(), tracing_subscriber::util::TryInitError> {
    let directive = if level.contains('=') || level.contains(',') {
        level.to_string()
    } else {
        format!("shell_render={level}")
    };
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    install(filter)
}

fn install(filter: EnvFilter) -> Result<(), tracing_subscriber::util::TryInitError> {
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr),
        )
        .try_init()
}
