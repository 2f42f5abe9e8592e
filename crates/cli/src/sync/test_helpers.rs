// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for sync module tests.

#![allow(clippy::unwrap_used)]

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use vitals_core::Payload;

use super::discovery::{Discovery, Probe};
use super::transport::{RemoteEndpoint, SendError, SendResult, Transport};

/// Mock transport for testing without real sockets.
///
/// Records every payload it is asked to send. Results are taken from a
/// queue; once the queue is empty every send succeeds.
#[derive(Clone, Default)]
pub struct MockTransport {
    sent: Arc<Mutex<Vec<(RemoteEndpoint, String)>>>,
    results: Arc<Mutex<VecDeque<SendResult<()>>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next send fail with `error`.
    pub fn fail_next(&self, error: SendError) {
        self.results.lock().unwrap().push_back(Err(error));
    }

    /// Payloads handed to the transport, as text.
    pub fn payloads(&self) -> Vec<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .map(|(_, p)| p.clone())
            .collect()
    }

    /// Endpoints the transport was asked to reach.
    pub fn endpoints(&self) -> Vec<RemoteEndpoint> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .map(|(e, _)| e.clone())
            .collect()
    }
}

impl Transport for MockTransport {
    fn send<'a>(
        &'a mut self,
        endpoint: &'a RemoteEndpoint,
        payload: &'a Payload,
    ) -> Pin<Box<dyn Future<Output = SendResult<()>> + Send + 'a>> {
        let sent = Arc::clone(&self.sent);
        let results = Arc::clone(&self.results);
        Box::pin(async move {
            sent.lock()
                .unwrap()
                .push((endpoint.clone(), payload.to_string()));
            results.lock().unwrap().pop_front().unwrap_or(Ok(()))
        })
    }
}

/// Probe with a fixed answer that counts how often it ran.
#[derive(Clone)]
pub struct StaticProbe {
    reachable: Arc<Mutex<bool>>,
    calls: Arc<AtomicUsize>,
}

impl StaticProbe {
    pub fn new(reachable: bool) -> Self {
        StaticProbe {
            reachable: Arc::new(Mutex::new(reachable)),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn set_reachable(&self, reachable: bool) {
        *self.reachable.lock().unwrap() = reachable;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Probe for StaticProbe {
    fn probe<'a>(
        &'a self,
        _endpoint: &'a RemoteEndpoint,
    ) -> Pin<Box<dyn Future<Output = bool> + Send + 'a>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let reachable = *self.reachable.lock().unwrap();
        Box::pin(async move { reachable })
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

/// The endpoint tests send to.
pub fn test_endpoint() -> RemoteEndpoint {
    RemoteEndpoint::new("192.168.4.1", 9999)
}

/// Discovery backed by a [`StaticProbe`].
pub fn static_discovery(probe: &StaticProbe) -> Discovery {
    Discovery::new(Box::new(probe.clone()), test_endpoint())
}
