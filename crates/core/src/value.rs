// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Typed vital-sign values.
//!
//! Numbers are fixed-point decimals so that formatting a value and parsing
//! the text back yields the identical value.

use std::fmt;

/// Largest number of decimal places a [`Quantity`] may carry.
pub const MAX_DECIMALS: u8 = 6;

/// A fixed-point decimal: `units / 10^decimals`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quantity {
    units: i64,
    decimals: u8,
}

impl Quantity {
    /// Creates a quantity from raw units and a number of decimal places.
    ///
    /// `decimals` is capped at [`MAX_DECIMALS`].
    pub fn new(units: i64, decimals: u8) -> Self {
        Quantity {
            units,
            decimals: decimals.min(MAX_DECIMALS),
        }
    }

    /// Raw units (the value scaled by `10^decimals`).
    pub fn units(&self) -> i64 {
        self.units
    }

    /// Number of decimal places.
    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    /// Parses a plain decimal number such as `37`, `-1`, `+4` or `97.25`.
    ///
    /// Exponents, `inf`/`nan`, more than [`MAX_DECIMALS`] fractional digits
    /// and values overflowing `i64` are rejected.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };
        let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, ""));
        if int_part.is_empty() && frac_part.is_empty() {
            return None;
        }
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(int_part) || !all_digits(frac_part) {
            return None;
        }
        let decimals = u8::try_from(frac_part.len())
            .ok()
            .filter(|d| *d <= MAX_DECIMALS)?;

        // Accumulate toward negative so that i64::MIN is reachable.
        let mut units: i64 = 0;
        for b in int_part.bytes().chain(frac_part.bytes()) {
            units = units.checked_mul(10)?.checked_sub(i64::from(b - b'0'))?;
        }
        let units = if negative { units } else { units.checked_neg()? };
        Some(Quantity { units, decimals })
    }

    /// Re-expresses the quantity with `decimals` places, or `None` if the
    /// units would overflow. Dropping places truncates toward zero.
    pub fn checked_rescale(self, decimals: u8) -> Option<Self> {
        let decimals = decimals.min(MAX_DECIMALS);
        let units = if decimals >= self.decimals {
            self.units.checked_mul(pow10(decimals - self.decimals))?
        } else {
            self.units / pow10(self.decimals - decimals)
        };
        Some(Quantity { units, decimals })
    }

    /// Like [`Quantity::checked_rescale`] but dropping places rounds half
    /// away from zero, so `36.65` becomes `36.7` and `-0.05` becomes `-0.1`.
    pub fn checked_round(self, decimals: u8) -> Option<Self> {
        let decimals = decimals.min(MAX_DECIMALS);
        if decimals >= self.decimals {
            return self.checked_rescale(decimals);
        }
        let divisor = pow10(self.decimals - decimals);
        let mut units = self.units / divisor;
        let remainder = (self.units % divisor).unsigned_abs();
        if remainder * 2 >= divisor.unsigned_abs() {
            units += self.units.signum();
        }
        Some(Quantity { units, decimals })
    }

    /// Like [`Quantity::checked_rescale`] but saturates on overflow.
    pub fn saturating_rescale(self, decimals: u8) -> Self {
        self.checked_rescale(decimals)
            .unwrap_or_else(|| self.saturated(decimals))
    }

    /// Like [`Quantity::checked_round`] but saturates on overflow.
    pub fn saturating_round(self, decimals: u8) -> Self {
        self.checked_round(decimals)
            .unwrap_or_else(|| self.saturated(decimals))
    }

    fn saturated(self, decimals: u8) -> Self {
        let units = if self.units < 0 { i64::MIN } else { i64::MAX };
        Quantity::new(units, decimals)
    }

    /// Adds `delta` whole units (not raw units), saturating.
    pub fn saturating_add_whole(self, delta: i64) -> Self {
        let step = delta.saturating_mul(pow10(self.decimals));
        Quantity {
            units: self.units.saturating_add(step),
            decimals: self.decimals,
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.units < 0 { "-" } else { "" };
        let magnitude = self.units.unsigned_abs();
        if self.decimals == 0 {
            return write!(f, "{sign}{magnitude}");
        }
        let scale = pow10(self.decimals).unsigned_abs();
        write!(
            f,
            "{sign}{}.{:0width$}",
            magnitude / scale,
            magnitude % scale,
            width = usize::from(self.decimals)
        )
    }
}

fn pow10(exp: u8) -> i64 {
    10_i64.pow(u32::from(exp))
}

/// A well-typed value of one vital sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VitalValue {
    /// Systolic over diastolic, shown as `S/D`.
    BloodPressurePair { systolic: i64, diastolic: i64 },
    /// A percentage, shown with a `%` suffix.
    Percentage(Quantity),
    /// A bare number with fixed decimal places.
    ScalarNumber(Quantity),
}

impl fmt::Display for VitalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VitalValue::BloodPressurePair {
                systolic,
                diastolic,
            } => write!(f, "{systolic}/{diastolic}"),
            VitalValue::Percentage(q) => write!(f, "{q}%"),
            VitalValue::ScalarNumber(q) => write!(f, "{q}"),
        }
    }
}

/// What is stored for a field: a typed value, or text that did not parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Reading {
    Typed(VitalValue),
    /// Manually entered text kept verbatim. Cannot be stepped.
    Opaque(String),
}

impl Reading {
    /// Returns the typed value, if any.
    pub fn value(&self) -> Option<&VitalValue> {
        match self {
            Reading::Typed(v) => Some(v),
            Reading::Opaque(_) => None,
        }
    }

    /// Returns true if this reading is opaque text.
    pub fn is_opaque(&self) -> bool {
        matches!(self, Reading::Opaque(_))
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reading::Typed(v) => write!(f, "{v}"),
            Reading::Opaque(text) => f.write_str(text),
        }
    }
}

impl From<VitalValue> for Reading {
    fn from(value: VitalValue) -> Self {
        Reading::Typed(value)
    }
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
