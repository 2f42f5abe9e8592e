// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Operating mode selection for the sender.
//!
//! Determines whether edits are buffered until an explicit send or pushed
//! to the display as soon as they are made.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::config::Config;

/// How edits reach the display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OperatingMode {
    /// Buffered mode: edits accumulate until an explicit send.
    #[default]
    Buffered,
    /// Immediate mode: every edit sends the whole pending set.
    Immediate,
}

impl OperatingMode {
    /// Picks the mode for a session: a command-line override wins over the
    /// config file.
    pub fn detect(config: &Config, cli_override: Option<OperatingMode>) -> Self {
        cli_override.unwrap_or(config.mode)
    }

    /// Returns true if this is buffered mode.
    pub fn is_buffered(&self) -> bool {
        *self == OperatingMode::Buffered
    }

    /// Returns true if this is immediate mode.
    pub fn is_immediate(&self) -> bool {
        *self == OperatingMode::Immediate
    }
}

impl std::fmt::Display for OperatingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperatingMode::Buffered => write!(f, "buffered"),
            OperatingMode::Immediate => write!(f, "immediate"),
        }
    }
}

#[cfg(test)]
#[path = "mode_tests.rs"]
mod tests;
