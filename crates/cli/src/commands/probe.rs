// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;
use std::path::Path;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::sync::Discovery;

use super::runtime;

/// Execute `vsend probe`.
pub fn run(config_path: Option<&Path>) -> Result<()> {
    let config = Config::load_for(config_path)?;
    let discovery = Discovery::from_config(&config);
    let runtime = runtime()?;
    runtime.block_on(run_impl(
        &discovery,
        &config.discovery.method.to_string(),
        &mut std::io::stdout().lock(),
    ))
}

pub(crate) async fn run_impl<W: Write>(
    discovery: &Discovery,
    method: &str,
    out: &mut W,
) -> Result<()> {
    match discovery.resolve().await {
        Some(endpoint) => {
            writeln!(out, "display reachable at {} ({})", endpoint, method)?;
            Ok(())
        }
        None => Err(Error::NotReachable {
            address: discovery.candidate().to_string(),
        }),
    }
}

#[cfg(test)]
#[path = "probe_tests.rs"]
mod tests;
