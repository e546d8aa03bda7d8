//! Tracing initialization.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize tracing. Safe to call multiple times.
///
/// Intended for tests and small embedding programs; applications with their
/// own subscriber setup should skip this and configure `tracing-subscriber`
/// themselves.
pub fn init() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_target(true)
            .with_writer(std::io::stderr)
            .compact();

        if let Err(e) = builder.try_init() {
            eprintln!("Failed to initialize tracing: {}", e)
        }
    });
}
