//! Tracing subscriber setup for the `campus` binary.

use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Install a compact stderr subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level is `debug` or `info`
/// depending on `debug_fallback`. Fails if a global subscriber is already
/// installed.
pub fn init_tracing(debug_fallback: bool) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if debug_fallback { "debug" } else { "info" };
        EnvFilter::new(level)
    });

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_file(false)
                .with_line_number(false),
        )
        .with(filter)
        .try_init()
}
