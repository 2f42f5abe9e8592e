// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Wire format for updates sent to the display.
//!
//! A payload is `Key=Value` tokens joined by `,` in field order with no
//! trailing separator and no framing:
//!
//! ```text
//! BloodPressure=121/81,SpO2=99%,HeartRate=76,Temperature=38.0,RespiratoryRate=19
//! ```
//!
//! Values are not escaped. A value containing `,` or `=` produces a payload
//! the receiver cannot split back; [`Payload::ambiguous_fields`] reports them.

use std::fmt;

use crate::error::{Error, Result};
use crate::field::VitalField;

/// Separator between tokens.
pub const FIELD_SEPARATOR: char = ',';
/// Separator between key and value.
pub const KEY_VALUE_SEPARATOR: char = '=';

/// An encoded update, ready to be written to the connection as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    bytes: Vec<u8>,
    ambiguous: Vec<VitalField>,
}

impl Payload {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns true if every byte is 7-bit ASCII.
    pub fn is_ascii(&self) -> bool {
        self.bytes.is_ascii()
    }

    /// Fields whose value contains a separator character.
    pub fn ambiguous_fields(&self) -> &[VitalField] {
        &self.ambiguous
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.bytes))
    }
}

/// Encodes `(field, text)` pairs.
///
/// Pairs are written in field order whatever order they arrive in; the
/// snapshot a `VitalSet` produces is already ordered.
pub fn encode(pairs: &[(VitalField, String)]) -> Payload {
    let mut ordered: Vec<&(VitalField, String)> = pairs.iter().collect();
    ordered.sort_by_key(|(field, _)| *field);

    let mut text = String::new();
    let mut ambiguous = Vec::new();
    for (i, (field, value)) in ordered.into_iter().enumerate() {
        if i > 0 {
            text.push(FIELD_SEPARATOR);
        }
        text.push_str(field.as_str());
        text.push(KEY_VALUE_SEPARATOR);
        text.push_str(value);
        if value.contains(&[FIELD_SEPARATOR, KEY_VALUE_SEPARATOR][..]) {
            ambiguous.push(*field);
        }
    }

    Payload {
        bytes: text.into_bytes(),
        ambiguous,
    }
}

/// Splits a payload back into `(key, value)` pairs.
///
/// Each token is split on its first `=`. Keys are returned as written and
/// are not checked against [`VitalField`].
///
/// # Errors
///
/// Returns [`Error::MalformedPayload`] for non-UTF-8 input or a token
/// without `=`.
pub fn decode(bytes: &[u8]) -> Result<Vec<(String, String)>> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| Error::MalformedPayload(format!("not valid UTF-8: {}", e)))?;
    if text.is_empty() {
        return Ok(Vec::new());
    }
    text.split(FIELD_SEPARATOR)
        .map(|token| {
            token
                .split_once(KEY_VALUE_SEPARATOR)
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .ok_or_else(|| Error::MalformedPayload(format!("token '{}' has no '='", token)))
        })
        .collect()
}

#[cfg(test)]
#[path = "wire_tests.rs"]
mod tests;
