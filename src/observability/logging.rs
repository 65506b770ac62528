//! Structured logging.
//!
//! Uses `tracing` with an `EnvFilter`; `RUST_LOG` overrides the default
//! directive.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_DIRECTIVE: &str = "token_distributor=info";

/// Install the global subscriber.
pub fn init() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_DIRECTIVE.into()))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
