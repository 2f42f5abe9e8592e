// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pushing vital signs to the remote display.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐     ┌─────────────┐     ┌─────────────┐
//! │    Controller    │────►│  Transport  │────►│   Display   │
//! │ (SyncController) │     │   (trait)   │     │  (TCP sink) │
//! └──────────────────┘     └─────────────┘     └─────────────┘
//!          │
//!          ▼
//! ┌──────────────────┐
//! │    Discovery     │  (probe the well-known address)
//! └──────────────────┘
//! ```
//!
//! # Features
//!
//! - One TCP connection per payload, bounded connect and write
//! - Buffered or immediate sending
//! - Pending values promoted only after a successful send
//! - Injectable transport and probe traits for testing

mod controller;
mod discovery;
mod transport;

pub use controller::{EditReport, SyncController, SyncEvent, SyncState};
pub use discovery::{AssumeReachable, Discovery, PingProbe, Probe, TcpProbe};
pub use transport::{RemoteEndpoint, SendError, SendResult, SendStage, TcpTransport, Transport};

#[cfg(test)]
pub(crate) mod test_helpers;
