//! Tracing subscriber and panic hook installation.
//!
//! Library crates only emit `tracing` events. Applications call
//! [`install_tracing`] once at startup to print them; on Android they are
//! forwarded to logcat as well.

use std::sync::Once;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_FILTER: &str = "info";
#[cfg(target_os = "android")]
const ANDROID_TAG: &str = "Trellis";

static TRACING_INSTALLED: Once = Once::new();
static PANIC_HOOK_INSTALLED: Once = Once::new();

/// Installs the global tracing subscriber (idempotent).
///
/// The filter is read from `RUST_LOG`, falling back to `info`. If another
/// subscriber is already installed this does nothing.
pub fn install_tracing() {
    TRACING_INSTALLED.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        let console = fmt::layer()
            .without_time()
            .with_target(false)
            .with_filter(filter);

        #[cfg(target_os = "android")]
        let result = {
            let registry = tracing_subscriber::registry().with(console);
            if let Ok(android) = tracing_android::layer(ANDROID_TAG) {
                registry.with(android).try_init()
            } else {
                registry.try_init()
            }
        };

        #[cfg(not(target_os = "android"))]
        let result = tracing_subscriber::registry().with(console).try_init();

        if let Err(error) = result {
            tracing::warn!(%error, "tracing subscriber already installed");
        }
    });
}

/// Routes panics through `tracing` so they reach the same sinks as logs
/// (idempotent).
pub fn install_panic_hook() {
    PANIC_HOOK_INSTALLED.call_once(|| {
        std::panic::set_hook(Box::new(tracing_panic::panic_hook));
    });
}
