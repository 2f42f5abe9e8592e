// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging to stderr.
//!
//! `VSEND_LOG` takes an `EnvFilter` directive and wins over `-v`.

use tracing_subscriber::EnvFilter;

use crate::env;

/// Filter directive for a `-v` count, unless `env_directive` overrides it.
pub fn filter_directive(verbosity: u8, env_directive: Option<String>) -> String {
    if let Some(directive) = env_directive {
        return directive;
    }
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    level.to_string()
}

/// Installs the global subscriber. Later calls are ignored.
pub fn init(verbosity: u8) {
    let directive = filter_directive(verbosity, env::log_filter());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
