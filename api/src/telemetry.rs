//! Tracing subscriber setup for the server binary
//!
//! `RUST_LOG` wins when set; otherwise the filter follows the environment
//! (`debug` in development, `info` elsewhere).

use anyhow::anyhow;
use sb_shared::config::Environment;
use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber
pub fn init_tracing(environment: Environment) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(environment.default_log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(environment.is_development())
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
