//! Logging initialization.
//!
//! Logs go to stderr so they never mix with table or JSON output on stdout.

use std::io;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Level used when neither `RUST_LOG` nor `--log-level` is set.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Initialize the global subscriber.
///
/// `RUST_LOG` takes precedence over the level passed on the command line.
pub fn init(level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let layer = if json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .compact()
            .with_writer(io::stderr)
            .boxed()
    };

    // A second init (tests) is harmless.
    let _ = tracing_subscriber::registry()
        .with(layer.with_filter(filter))
        .try_init();
}
