//! Logging initialization.
//!
//! Sets up a `tracing` subscriber with an environment-driven filter
//! (`CODEX5E_LOG`, falling back to `RUST_LOG`, falling back to `info`)
//! and bridges the standard `log` macros into `tracing`. Safe to call
//! more than once; only the first call installs the subscriber.

use std::sync::OnceLock;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Initialize logging for library consumers that want output.
///
/// Embedding applications with their own subscriber can skip this
/// entirely; the library only emits events, it never requires a
/// subscriber to be present.
pub fn init() {
    INIT.get_or_init(|| {
        let env_filter = EnvFilter::try_from_env("CODEX5E_LOG")
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let stdout_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_filter(env_filter);

        // try_init: a subscriber installed by the host application wins.
        let _ = tracing_subscriber::registry().with(stdout_layer).try_init();

        // Redirect standard `log` macros to `tracing`.
        if let Err(e) = tracing_log::LogTracer::init() {
            eprintln!("Failed to initialize LogTracer: {e}");
        }
    });
}
