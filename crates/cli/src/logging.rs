//! Logging setup for the binary.
//!
//! Debug output is a property of the installed subscriber, switched through
//! a reload handle. The handle is created once in `main` and passed to
//! whoever needs to toggle it.

use anyhow::{anyhow, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter, Registry};

/// Filter used when `RUST_LOG` is not set
const DEFAULT_DIRECTIVE: &str = "info";
const DEBUG_DIRECTIVE: &str = "debug";

/// What to log before any runtime toggling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Directive used outside debug mode (from `RUST_LOG`, or "info")
    pub base_directive: String,
    pub debug: bool,
}

impl LoggingConfig {
    /// Read the base directive from `RUST_LOG`
    pub fn from_env(debug: bool) -> Self {
        let base_directive = std::env::var(EnvFilter::DEFAULT_ENV)
            .ok()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DIRECTIVE.to_string());
        Self {
            base_directive,
            debug,
        }
    }

    /// The filter directive for a given debug state
    pub fn directive(&self, debug: bool) -> &str {
        if debug {
            DEBUG_DIRECTIVE
        } else {
            &self.base_directive
        }
    }
}

/// Installed subscriber with a switchable debug mode
pub struct Logging {
    config: LoggingConfig,
    handle: reload::Handle<EnvFilter, Registry>,
    debug: AtomicBool,
}

impl Logging {
    /// Install the global subscriber. Call once at startup.
    pub fn init(config: LoggingConfig) -> Result<Self> {
        let filter = build_filter(config.directive(config.debug))?;
        let (filter_layer, handle) = reload::Layer::new(filter);

        tracing_subscriber::registry()
            .with(filter_layer)
            .with(fmt::layer().with_target(false))
            .try_init()?;

        Ok(Self::with_handle(config, handle))
    }

    fn with_handle(config: LoggingConfig, handle: reload::Handle<EnvFilter, Registry>) -> Self {
        let debug = AtomicBool::new(config.debug);
        Self {
            config,
            handle,
            debug,
        }
    }

    pub fn is_debug(&self) -> bool {
        self.debug.load(Ordering::Relaxed)
    }

    /// Turn debug output on or off for the rest of the process
    pub fn set_debug(&self, debug: bool) -> Result<()> {
        let filter = build_filter(self.config.directive(debug))?;
        self.handle
            .reload(filter)
            .map_err(|e| anyhow!("Failed to switch log filter: {}", e))?;
        self.debug.store(debug, Ordering::Relaxed);
        Ok(())
    }
}

fn build_filter(directive: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directive).map_err(|e| anyhow!("Invalid log filter '{}': {}", directive, e))
}
