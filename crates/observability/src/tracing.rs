//! Tracing/logging initialization for processes embedding the engine.
//!
//! The auth crate only emits `tracing` events; wiring a subscriber is the
//! host process's job, and this is the shared way to do it.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// JSON output, filter driven by `RUST_LOG` (default `info`); set
/// `RUST_LOG=claimdesk_auth=debug` for the per-request decision trail. Safe
/// to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(true)
        .try_init();
}
