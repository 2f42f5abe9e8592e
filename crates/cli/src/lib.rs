// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! vsend - edit vital signs and push them to a remote display.
//!
//! This crate provides the front-end and network side of the `vsend` CLI.
//! Value handling lives in [`vitals_core`].
//!
//! # Main Components
//!
//! - [`sync`] - Discovery, TCP transport and the sync controller
//! - [`Config`] - `vitals.toml` (mode, endpoint, timeouts, precision)
//! - [`OperatingMode`] - Buffered or immediate sending
//! - [`Error`] - Error types for all operations
//!
//! # Sending
//!
//! ```rust,ignore
//! use vsend::sync::{Discovery, SyncController, TcpTransport};
//! use vitals_core::{EditOp, VitalField, VitalSet};
//!
//! let config = Config::load_for(None)?;
//! let mut controller = SyncController::start(
//!     VitalSet::default(),
//!     TcpTransport::new(2000, 2000),
//!     Discovery::from_config(&config),
//!     OperatingMode::Buffered,
//! )
//! .await;
//! controller.apply_edit(VitalField::HeartRate, EditOp::Increment).await;
//! let event = controller.request_send().await;
//! ```

mod cli;
pub mod colors;
mod commands;
mod display;
mod env;
pub mod help;
pub mod logging;
mod mode;

pub mod config;
pub mod error;
pub mod sync;

pub use cli::{Cli, Command, ConfigCommand, EditArgs, OutputFormat};
pub use config::Config;
pub use error::{Error, Result};
pub use mode::OperatingMode;

use clap::CommandFactory;
use clap_complete::generate;

/// Run a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();
    match cli.command {
        Command::Send {
            edits,
            mode,
            output,
        } => commands::send::run(config_path, &edits, mode, output),
        Command::Preview { edits, output } => commands::preview::run(config_path, &edits, output),
        Command::Console { mode } => commands::console::run(config_path, mode),
        Command::Probe => commands::probe::run(config_path),
        Command::Config(cmd) => commands::config::run(config_path, cmd),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "vsend", &mut std::io::stdout());
            Ok(())
        }
    }
}
