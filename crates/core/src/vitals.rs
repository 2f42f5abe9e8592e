// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Confirmed and pending vital-sign state.
//!
//! A [`VitalSet`] keeps two tables over the fixed [`VitalField`] set:
//! `confirmed` (what the remote display last accepted) and `pending` (the
//! edit buffer). Edits touch only `pending`; [`VitalSet::promote`] copies
//! `pending` into `confirmed` after a successful transmission.

use std::ops::{Index, IndexMut};

use serde::Serialize;

use crate::codec::{Codec, Direction};
use crate::field::VitalField;
use crate::value::Reading;

/// Text shown for each field before any edit.
pub const DEFAULT_VITALS: [(VitalField, &str); VitalField::COUNT] = [
    (VitalField::BloodPressure, "120/80"),
    (VitalField::SpO2, "98%"),
    (VitalField::HeartRate, "75"),
    (VitalField::Temperature, "37.0"),
    (VitalField::RespiratoryRate, "18"),
];

/// One reading per field. The key set cannot change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Readings([Reading; VitalField::COUNT]);

impl Readings {
    fn defaults(codec: &Codec) -> Self {
        Readings(DEFAULT_VITALS.map(|(field, text)| codec.parse(field, text)))
    }

    /// Iterates `(field, reading)` in wire order.
    pub fn iter(&self) -> impl Iterator<Item = (VitalField, &Reading)> {
        VitalField::ALL.into_iter().zip(self.0.iter())
    }
}

impl Index<VitalField> for Readings {
    type Output = Reading;

    fn index(&self, field: VitalField) -> &Reading {
        &self.0[field.index()]
    }
}

impl IndexMut<VitalField> for Readings {
    fn index_mut(&mut self, field: VitalField) -> &mut Reading {
        &mut self.0[field.index()]
    }
}

/// An edit the front-end asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOp {
    Increment,
    Decrement,
    SetManual(String),
}

/// What an edit did to the pending buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EditOutcome {
    /// A typed value moved one step.
    Stepped,
    /// The field held opaque text; nothing changed.
    StepOnOpaque,
    /// Manual text parsed into a typed value.
    Parsed,
    /// Manual text did not parse and is stored verbatim.
    ParseFailure,
}

impl EditOutcome {
    /// Returns true if the pending buffer changed.
    pub fn changed(&self) -> bool {
        !matches!(self, EditOutcome::StepOnOpaque)
    }
}

/// Ordered `(field, text)` pairs taken from the pending buffer.
pub type Snapshot = Vec<(VitalField, String)>;

/// Confirmed and pending readings for every field.
#[derive(Debug, Clone)]
pub struct VitalSet {
    codec: Codec,
    confirmed: Readings,
    pending: Readings,
}

impl Default for VitalSet {
    fn default() -> Self {
        Self::new(Codec::default())
    }
}

impl VitalSet {
    /// Creates a set holding the default vitals, with `pending == confirmed`.
    pub fn new(codec: Codec) -> Self {
        let confirmed = Readings::defaults(&codec);
        VitalSet {
            codec,
            pending: confirmed.clone(),
            confirmed,
        }
    }

    /// Pending text for `field`.
    pub fn get_pending(&self, field: VitalField) -> String {
        self.codec.format(&self.pending[field])
    }

    /// Confirmed text for `field`.
    pub fn get_confirmed(&self, field: VitalField) -> String {
        self.codec.format(&self.confirmed[field])
    }

    pub fn pending(&self) -> &Readings {
        &self.pending
    }

    pub fn confirmed(&self) -> &Readings {
        &self.confirmed
    }

    /// Applies `op` to the pending value of `field`.
    pub fn apply_edit(&mut self, field: VitalField, op: EditOp) -> EditOutcome {
        let direction = match op {
            EditOp::Increment => Direction::Up,
            EditOp::Decrement => Direction::Down,
            EditOp::SetManual(text) => {
                let reading = self.codec.parse(field, &text);
                let outcome = if reading.is_opaque() {
                    EditOutcome::ParseFailure
                } else {
                    EditOutcome::Parsed
                };
                self.pending[field] = reading;
                return outcome;
            }
        };

        match self.pending[field].value().copied() {
            Some(value) => {
                let stepped = self.codec.step(field, &value, direction);
                self.pending[field] = Reading::Typed(stepped);
                EditOutcome::Stepped
            }
            None => EditOutcome::StepOnOpaque,
        }
    }

    /// Copies every pending reading into `confirmed`.
    pub fn promote(&mut self) {
        self.confirmed.clone_from(&self.pending);
    }

    /// Resets `pending` to `confirmed`, dropping unsent edits.
    pub fn discard_pending(&mut self) {
        self.pending.clone_from(&self.confirmed);
    }

    /// Pending values in wire order.
    pub fn snapshot_for_send(&self) -> Snapshot {
        self.pending
            .iter()
            .map(|(field, reading)| (field, self.codec.format(reading)))
            .collect()
    }

    /// Fields whose pending text differs from the confirmed text.
    pub fn changed_fields(&self) -> Vec<VitalField> {
        VitalField::ALL
            .into_iter()
            .filter(|field| self.get_pending(*field) != self.get_confirmed(*field))
            .collect()
    }
}

#[cfg(test)]
#[path = "vitals_tests.rs"]
mod tests;
