//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

const DEFAULT_FILTER: &str =
    "clickstream_core=info,clickstream_storage=info,clickstream_transport=info,clickstream_recorder=info";

/// Initialize the clickstream tracing/logging system.
///
/// Reads `CLICKSTREAM_LOG` for per-module levels, e.g.
/// `CLICKSTREAM_LOG=clickstream_storage=debug,clickstream_transport=info`.
/// Falls back to `info` for every clickstream crate when unset or invalid.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("CLICKSTREAM_LOG")
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
