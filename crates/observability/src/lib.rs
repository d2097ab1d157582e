//! Tracing/logging setup shared by the storefront binaries and the browser frontend.

/// Initialize process-wide tracing for native binaries.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Initialize tracing for the browser, forwarding events to the devtools console.
///
/// Safe to call multiple times.
#[cfg(target_arch = "wasm32")]
pub fn init_browser() {
    tracing::init_browser();
}

/// Subscriber construction (filters, layers).
pub mod tracing;

/// `console.*` sink for wasm builds.
#[cfg(target_arch = "wasm32")]
pub mod console;
