//! Logging utilities.
//!
//! Centralizes logger initialization on the `log` facade with an
//! `env_logger` backend. Kept deliberately small.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Filter resolution order: the `filter` argument, then `RUST_LOG`, then a
/// default that keeps wgpu/naga validation chatter at warn level.
///
/// Idempotent; subsequent calls are ignored. Intended usage is early in
/// `main`.
pub fn init(filter: Option<&str>) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = filter {
            builder.parse_filters(filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.parse_filters("info,wgpu_core=warn,wgpu_hal=warn,naga=warn");
        }

        builder.init();

        log::debug!("logging initialized");
    });
}
