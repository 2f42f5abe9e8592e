// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! vitals-core: value editing and wire encoding for the vitals display.
//!
//! This crate holds the parts of the sender with no I/O: the vital-sign
//! fields, the per-field codec, the confirmed/pending store and the wire
//! encoder. The `vsend` CLI adds discovery, transport and the sync loop.

pub mod codec;
pub mod error;
pub mod field;
pub mod value;
pub mod vitals;
pub mod wire;

pub use codec::{Codec, Direction, Precision};
pub use error::{Error, Result};
pub use field::{FieldColor, VitalField};
pub use value::{Quantity, Reading, VitalValue};
pub use vitals::{EditOp, EditOutcome, Readings, Snapshot, VitalSet, DEFAULT_VITALS};
pub use wire::{decode, encode, Payload};
