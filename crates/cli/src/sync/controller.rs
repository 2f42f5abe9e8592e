// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sync controller: edits in, payloads out.
//!
//! Each send attempt walks `Idle → Encoding → Sending → Confirmed | Failed`
//! and returns to `Idle`. Only a confirmed send promotes pending values;
//! a failed one leaves both tables untouched and is not retried.

use std::fmt;

use serde::Serialize;

use vitals_core::{encode, EditOp, EditOutcome, VitalField, VitalSet};

use crate::mode::OperatingMode;

use super::discovery::Discovery;
use super::transport::{RemoteEndpoint, SendError, Transport};

/// Where the controller is within a send attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    Idle,
    Encoding,
    Sending,
    Confirmed,
    Failed,
}

impl fmt::Display for SyncState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SyncState::Idle => "idle",
            SyncState::Encoding => "encoding",
            SyncState::Sending => "sending",
            SyncState::Confirmed => "confirmed",
            SyncState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Result of one send attempt, reported to the front-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
    /// The display accepted the payload; pending is now confirmed.
    Confirmed { payload: String },
    /// The send failed; nothing was promoted.
    Failed(SendError),
}

impl SyncEvent {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, SyncEvent::Confirmed { .. })
    }

    pub fn error(&self) -> Option<&SendError> {
        match self {
            SyncEvent::Confirmed { .. } => None,
            SyncEvent::Failed(e) => Some(e),
        }
    }
}

/// What one edit did, and the send it triggered in immediate mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditReport {
    pub field: VitalField,
    pub outcome: EditOutcome,
    #[serde(skip)]
    pub send: Option<SyncEvent>,
}

/// Owns the vitals, the endpoint and the transport for one session.
pub struct SyncController<T: Transport> {
    vitals: VitalSet,
    transport: T,
    discovery: Discovery,
    endpoint: Option<RemoteEndpoint>,
    mode: OperatingMode,
    state: SyncState,
}

impl<T: Transport> SyncController<T> {
    /// Runs discovery once and returns a controller ready for edits.
    pub async fn start(
        vitals: VitalSet,
        transport: T,
        discovery: Discovery,
        mode: OperatingMode,
    ) -> Self {
        let endpoint = discovery.resolve().await;
        tracing::debug!("sync controller started in {} mode", mode);
        SyncController {
            vitals,
            transport,
            discovery,
            endpoint,
            mode,
            state: SyncState::Idle,
        }
    }

    pub fn mode(&self) -> OperatingMode {
        self.mode
    }

    pub fn state(&self) -> SyncState {
        self.state
    }

    /// The endpoint found by the last discovery, if any.
    pub fn endpoint(&self) -> Option<&RemoteEndpoint> {
        self.endpoint.as_ref()
    }

    /// The address discovery checks.
    pub fn candidate(&self) -> &RemoteEndpoint {
        self.discovery.candidate()
    }

    pub fn vitals(&self) -> &VitalSet {
        &self.vitals
    }

    pub fn pending(&self, field: VitalField) -> String {
        self.vitals.get_pending(field)
    }

    pub fn confirmed(&self, field: VitalField) -> String {
        self.vitals.get_confirmed(field)
    }

    /// Applies an edit; in immediate mode also sends the whole pending set.
    ///
    /// An edit that changed nothing (stepping opaque text) sends nothing.
    pub async fn apply_edit(&mut self, field: VitalField, op: EditOp) -> EditReport {
        let outcome = self.vitals.apply_edit(field, op);
        tracing::debug!("edit {}: {:?}", field, outcome);

        let send = if self.mode.is_immediate() && outcome.changed() {
            Some(self.request_send().await)
        } else {
            None
        };
        EditReport {
            field,
            outcome,
            send,
        }
    }

    /// Encodes the pending set and sends it as one payload.
    pub async fn request_send(&mut self) -> SyncEvent {
        self.transition(SyncState::Encoding);
        let payload = encode(&self.vitals.snapshot_for_send());
        for field in payload.ambiguous_fields() {
            tracing::warn!(
                "{} contains ',' or '='; the display may misread this update",
                field
            );
        }
        if !payload.is_ascii() {
            tracing::warn!("payload contains non-ASCII text");
        }

        let Some(endpoint) = self.endpoint.clone() else {
            let error = SendError::Unreachable(format!(
                "no display discovered at {}",
                self.discovery.candidate()
            ));
            return self.finish(Err(error), String::new());
        };

        self.transition(SyncState::Sending);
        let result = self.transport.send(&endpoint, &payload).await;
        self.finish(result, payload.to_string())
    }

    /// Re-runs discovery and replaces the endpoint. Returns true if found.
    pub async fn rediscover(&mut self) -> bool {
        self.endpoint = self.discovery.resolve().await;
        self.endpoint.is_some()
    }

    /// Drops unsent edits.
    pub fn discard_pending(&mut self) {
        self.vitals.discard_pending();
    }

    fn finish(&mut self, result: Result<(), SendError>, payload: String) -> SyncEvent {
        let event = match result {
            Ok(()) => {
                self.transition(SyncState::Confirmed);
                self.vitals.promote();
                tracing::info!("sent {} bytes: {}", payload.len(), payload);
                SyncEvent::Confirmed { payload }
            }
            Err(e) => {
                self.transition(SyncState::Failed);
                tracing::warn!("send failed: {}", e);
                SyncEvent::Failed(e)
            }
        };
        self.transition(SyncState::Idle);
        event
    }

    fn transition(&mut self, next: SyncState) {
        tracing::debug!("sync {} -> {}", self.state, next);
        self.state = next;
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
