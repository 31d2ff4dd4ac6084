//! Structured logging.
//!
//! # Design Decisions
//! - Uses the tracing crate; the library only emits events
//! - The binary installs a `fmt` subscriber writing to stdout
//! - `RUST_LOG` takes precedence over the level passed on the command line

use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the filter from `RUST_LOG`, falling back to `default_level` for this crate.
pub fn env_filter(default_level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("cw_config_migrate={}", default_level.as_str().to_ascii_lowercase()).into()
    })
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(default_level: Level) {
    let _ = tracing_subscriber::registry()
        .with(env_filter(default_level))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init();
}
