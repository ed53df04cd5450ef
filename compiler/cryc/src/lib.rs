//! Cry command-line host.
//!
//! The evaluator consumes syntax trees, not source text, so this host loads
//! a tree serialized as JSON (see `cry_ir` with the `serde` feature), builds
//! the global environment, evaluates it, and reports the outcome.

pub mod commands;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber, once, if `RUST_LOG` is set.
///
/// `RUST_LOG=cry_eval=trace` logs every dispatched node;
/// `RUST_LOG=cry_eval=debug` logs declarations and calls.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
