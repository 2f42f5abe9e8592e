// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

use crate::sync::SendError;

/// All possible errors that can occur in the vsend library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("config file not found: {0}\n  hint: run 'vsend config init' to write a default config")]
    ConfigNotFound(String),

    #[error("config file already exists: {0}\n  hint: pass --force to overwrite it")]
    ConfigExists(String),

    #[error("display not reachable at {address}\n  hint: connect this station to the display's Wi-Fi network, then run 'vsend probe'")]
    NotReachable { address: String },

    #[error("{failed} of {attempted} sends failed; last error: {last}\n  hint: pending values were kept; check the display's Wi-Fi connection and send again")]
    SendFailed {
        attempted: usize,
        failed: usize,
        last: SendError,
    },

    #[error(transparent)]
    Vitals(#[from] vitals_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for vsend operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
