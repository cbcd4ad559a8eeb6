//! Process-wide tracing/logging setup.
//!
//! The ledger crates emit structured `tracing` events at mutation and storage
//! boundaries; host processes (UI shells, import tooling) and integration
//! tests call [`init`] once at startup to surface them.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// Filtering comes from `RUST_LOG`, defaulting to `info`. Safe to call
/// multiple times; subsequent calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_target(true)
        .try_init();
}
