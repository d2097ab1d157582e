//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset (and always in the browser).
const DEFAULT_FILTER: &str = "info";

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // JSON logs + timestamps, configurable via RUST_LOG.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}

/// Browser variant: plain text lines into the devtools console. There is no
/// environment to read and no usable system clock, so the filter is fixed and
/// timestamps are left to the console.
#[cfg(target_arch = "wasm32")]
pub fn init_browser() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(DEFAULT_FILTER))
        .without_time()
        .with_ansi(false)
        .with_target(false)
        .with_writer(crate::console::ConsoleMakeWriter)
        .try_init();
}
