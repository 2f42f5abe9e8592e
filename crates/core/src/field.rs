// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The closed set of vital signs shown on the remote display.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A tracked vital sign.
///
/// Declaration order is display order and wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VitalField {
    BloodPressure,
    SpO2,
    HeartRate,
    Temperature,
    RespiratoryRate,
}

impl VitalField {
    /// Number of fields.
    pub const COUNT: usize = 5;

    /// Every field, in wire order.
    pub const ALL: [VitalField; Self::COUNT] = [
        VitalField::BloodPressure,
        VitalField::SpO2,
        VitalField::HeartRate,
        VitalField::Temperature,
        VitalField::RespiratoryRate,
    ];

    /// Returns the key used on the wire and in display.
    pub fn as_str(&self) -> &'static str {
        match self {
            VitalField::BloodPressure => "BloodPressure",
            VitalField::SpO2 => "SpO2",
            VitalField::HeartRate => "HeartRate",
            VitalField::Temperature => "Temperature",
            VitalField::RespiratoryRate => "RespiratoryRate",
        }
    }

    /// Returns the short alias accepted on the command line.
    pub fn alias(&self) -> &'static str {
        match self {
            VitalField::BloodPressure => "bp",
            VitalField::SpO2 => "spo2",
            VitalField::HeartRate => "hr",
            VitalField::Temperature => "temp",
            VitalField::RespiratoryRate => "rr",
        }
    }

    /// Position of this field in [`VitalField::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Colour the display uses for this field.
    pub fn color(&self) -> FieldColor {
        match self {
            VitalField::BloodPressure => FieldColor::Red,
            VitalField::SpO2 => FieldColor::Goldenrod,
            VitalField::HeartRate => FieldColor::Green,
            VitalField::Temperature => FieldColor::Blue,
            VitalField::RespiratoryRate => FieldColor::Purple,
        }
    }
}

impl fmt::Display for VitalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VitalField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        VitalField::ALL
            .into_iter()
            .find(|field| {
                field.as_str().eq_ignore_ascii_case(wanted)
                    || field.alias().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| Error::UnknownField(s.to_string()))
    }
}

/// Display colour of a field, matching the on-screen overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldColor {
    Red,
    Goldenrod,
    Green,
    Blue,
    Purple,
}

impl FieldColor {
    /// Closest ANSI 256-colour code.
    pub fn ansi256(&self) -> u8 {
        match self {
            FieldColor::Red => 160,
            FieldColor::Goldenrod => 178,
            FieldColor::Green => 34,
            FieldColor::Blue => 33,
            FieldColor::Purple => 129,
        }
    }
}

#[cfg(test)]
#[path = "field_tests.rs"]
mod tests;
