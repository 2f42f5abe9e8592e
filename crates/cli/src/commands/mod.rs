// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod config;
pub mod console;
pub mod preview;
pub mod probe;
pub mod send;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use std::path::Path;

use tokio::runtime::Runtime;

use vitals_core::{Codec, VitalSet};

use crate::config::Config;
use crate::error::Result;
use crate::mode::OperatingMode;
use crate::sync::{Discovery, SyncController, TcpTransport};

/// Current-thread runtime for driving the sync controller from a command.
pub fn runtime() -> Result<Runtime> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(runtime)
}

/// Default vitals rendered with the configured precision.
pub fn new_vitals(config: &Config) -> VitalSet {
    VitalSet::new(Codec::new(config.precision))
}

/// TCP transport with the configured timeouts.
pub fn tcp_transport(config: &Config) -> TcpTransport {
    TcpTransport::new(
        config.remote.connect_timeout_ms,
        config.remote.write_timeout_ms,
    )
}

/// Loads config and starts a controller against the real display.
pub fn open_session(
    runtime: &Runtime,
    config_path: Option<&Path>,
    mode: Option<OperatingMode>,
) -> Result<SyncController<TcpTransport>> {
    let config = Config::load_for(config_path)?;
    let mode = OperatingMode::detect(&config, mode);
    tracing::debug!("mode {}, display {}:{}", mode, config.remote.address, config.remote.port);
    let controller = runtime.block_on(SyncController::start(
        new_vitals(&config),
        tcp_transport(&config),
        Discovery::from_config(&config),
        mode,
    ));
    Ok(controller)
}
