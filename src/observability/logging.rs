//! Structured logging.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber for the plain binaries.
///
/// Level defaults to `greeting_recorder=info` and is overridable through
/// `RUST_LOG`.
pub fn init() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "greeting_recorder=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
