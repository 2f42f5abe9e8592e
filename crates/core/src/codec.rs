// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-field parse, format and step rules.
//!
//! | Field           | Shape            | Text     | Step             |
//! |-----------------|------------------|----------|------------------|
//! | BloodPressure   | pair of integers | `S/D`    | both move by 1   |
//! | SpO2            | percentage       | `N%`     | ±1, precision p  |
//! | HeartRate       | scalar           | `N`      | ±1, precision p  |
//! | Temperature     | scalar           | `N.N`    | ±1, precision p  |
//! | RespiratoryRate | scalar           | `N`      | ±1, precision p  |

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::field::VitalField;
use crate::value::{Quantity, Reading, VitalValue, MAX_DECIMALS};

/// Direction of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// The signed whole-unit change this direction applies.
    pub fn delta(&self) -> i64 {
        match self {
            Direction::Up => 1,
            Direction::Down => -1,
        }
    }
}

/// Decimal places each numeric field is rendered with after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Precision {
    pub spo2: u8,
    pub heart_rate: u8,
    pub temperature: u8,
    pub respiratory_rate: u8,
}

impl Default for Precision {
    fn default() -> Self {
        Precision {
            spo2: 0,
            heart_rate: 0,
            temperature: 1,
            respiratory_rate: 0,
        }
    }
}

impl Precision {
    /// Decimal places for `field`; `None` for blood pressure, which is integral.
    pub fn decimals(&self, field: VitalField) -> Option<u8> {
        match field {
            VitalField::BloodPressure => None,
            VitalField::SpO2 => Some(self.spo2),
            VitalField::HeartRate => Some(self.heart_rate),
            VitalField::Temperature => Some(self.temperature),
            VitalField::RespiratoryRate => Some(self.respiratory_rate),
        }
    }

    /// Checks every field is within [`MAX_DECIMALS`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPrecision`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        for field in VitalField::ALL {
            if let Some(decimals) = self.decimals(field) {
                if decimals > MAX_DECIMALS {
                    return Err(Error::InvalidPrecision {
                        field: field.as_str(),
                        decimals,
                        max: MAX_DECIMALS,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Parses, formats and steps vital-sign values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Codec {
    precision: Precision,
}

impl Codec {
    pub fn new(precision: Precision) -> Self {
        Codec { precision }
    }

    /// Interprets `text` against the shape `field` expects.
    ///
    /// Never fails: text that does not match is returned verbatim as
    /// [`Reading::Opaque`]. Parsed numbers keep at least the field's
    /// precision and every decimal place the text carried.
    pub fn parse(&self, field: VitalField, text: &str) -> Reading {
        let parsed = match field {
            VitalField::BloodPressure => parse_pair(text),
            VitalField::SpO2 => self
                .parse_quantity(field, strip_percent(text))
                .map(VitalValue::Percentage),
            VitalField::HeartRate | VitalField::RespiratoryRate => self
                .parse_quantity(field, strip_percent(text))
                .map(VitalValue::ScalarNumber),
            VitalField::Temperature => self
                .parse_quantity(field, text)
                .map(VitalValue::ScalarNumber),
        };
        match parsed {
            Some(value) => Reading::Typed(value),
            None => Reading::Opaque(text.to_string()),
        }
    }

    /// Renders a reading as display and wire text.
    pub fn format(&self, reading: &Reading) -> String {
        reading.to_string()
    }

    /// Moves `value` one step in `direction`.
    ///
    /// Blood pressure moves systolic and diastolic together. Numeric fields
    /// move by one whole unit and are then rendered at the field's precision.
    /// Temperature rounds half away from zero when places are dropped; the
    /// whole-number fields truncate toward zero. No bounds are enforced.
    pub fn step(&self, field: VitalField, value: &VitalValue, direction: Direction) -> VitalValue {
        let delta = direction.delta();
        match *value {
            VitalValue::BloodPressurePair {
                systolic,
                diastolic,
            } => VitalValue::BloodPressurePair {
                systolic: systolic.saturating_add(delta),
                diastolic: diastolic.saturating_add(delta),
            },
            VitalValue::Percentage(q) => VitalValue::Percentage(self.step_quantity(field, q, delta)),
            VitalValue::ScalarNumber(q) => {
                VitalValue::ScalarNumber(self.step_quantity(field, q, delta))
            }
        }
    }

    fn step_quantity(&self, field: VitalField, q: Quantity, delta: i64) -> Quantity {
        let target = self.precision.decimals(field).unwrap_or(q.decimals());
        let moved = q.saturating_add_whole(delta);
        match field {
            VitalField::Temperature => moved.saturating_round(target),
            _ => moved.saturating_rescale(target),
        }
    }

    fn parse_quantity(&self, field: VitalField, text: &str) -> Option<Quantity> {
        let q = Quantity::parse(text)?;
        let min = self.precision.decimals(field).unwrap_or(0);
        q.checked_rescale(q.decimals().max(min))
    }
}

/// Drops one trailing `%`; a bare percent sign on a count is tolerated.
fn strip_percent(text: &str) -> &str {
    let trimmed = text.trim();
    trimmed.strip_suffix('%').unwrap_or(trimmed)
}

fn parse_pair(text: &str) -> Option<VitalValue> {
    let (systolic, diastolic) = text.split_once('/')?;
    let parse_int = |s: &str| {
        let q = Quantity::parse(s)?;
        (q.decimals() == 0 && !s.contains('.')).then_some(q.units())
    };
    Some(VitalValue::BloodPressurePair {
        systolic: parse_int(systolic)?,
        diastolic: parse_int(diastolic)?,
    })
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod tests;
