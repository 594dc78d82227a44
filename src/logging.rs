// SPDX-License-Identifier: MPL-2.0
//! Console logging setup.
//!
//! `RUST_LOG` takes precedence over the level chosen here, so
//! `RUST_LOG=lunar_gallery=trace` works regardless of `--debug`.

use tracing_subscriber::EnvFilter;

type InitError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Logging options collected from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingConfig {
    /// Log at debug level unless `RUST_LOG` is set.
    pub debug: bool,
}

impl TracingConfig {
    fn default_directive(self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "info"
        }
    }
}

/// Installs the global subscriber. Fails if one is already installed.
pub fn init_tracing(config: &TracingConfig) -> Result<(), InitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.debug)
        .compact()
        .try_init()
}
