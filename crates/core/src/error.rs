// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for vitals-core operations.

use thiserror::Error;

/// All possible errors that can occur in vitals-core operations.
///
/// Editing never fails: unparseable input degrades to opaque text and
/// stepping opaque text is reported as an outcome. These errors cover
/// naming fields, configuring precision and reading payloads back.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("unknown vital sign: '{0}'\n  hint: valid fields are: BloodPressure (bp), SpO2 (spo2), HeartRate (hr), Temperature (temp), RespiratoryRate (rr)")]
    UnknownField(String),

    #[error("invalid precision for {field}: {decimals} decimal places (max {max})")]
    InvalidPrecision {
        field: &'static str,
        decimals: u8,
        max: u8,
    },

    #[error("malformed payload: {0}")]
    MalformedPayload(String),
}

/// A specialized Result type for vitals-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
