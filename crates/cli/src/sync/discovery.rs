// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Display discovery.
//!
//! The display sits at a well-known address on its own network segment.
//! Discovery only answers "is it reachable"; the endpoint it yields is held
//! by the sync controller until [`super::SyncController::rediscover`] runs
//! again.

use std::future::Future;
use std::pin::Pin;
use std::process::Stdio;
use std::time::Duration;

use tokio::net::TcpStream;
use tokio::process::Command;
use tokio::time::timeout;

use crate::config::{Config, DiscoveryMethod};

use super::transport::RemoteEndpoint;

/// Reachability check against one host.
pub trait Probe: Send + Sync {
    /// Returns true if `endpoint` answers within the probe's bound.
    fn probe<'a>(
        &'a self,
        endpoint: &'a RemoteEndpoint,
    ) -> Pin<Box<dyn Future<Output = bool> + Send + 'a>>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// One ICMP echo through the system `ping` binary.
#[derive(Debug, Clone)]
pub struct PingProbe {
    timeout: Duration,
}

impl PingProbe {
    pub fn new(timeout: Duration) -> Self {
        PingProbe { timeout }
    }
}

impl Probe for PingProbe {
    fn probe<'a>(
        &'a self,
        endpoint: &'a RemoteEndpoint,
    ) -> Pin<Box<dyn Future<Output = bool> + Send + 'a>> {
        Box::pin(async move {
            let count_flag = if cfg!(windows) { "-n" } else { "-c" };
            let status = Command::new("ping")
                .arg(count_flag)
                .arg("1")
                .arg(endpoint.host())
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .kill_on_drop(true)
                .status();
            match timeout(self.timeout, status).await {
                Ok(Ok(status)) => status.success(),
                Ok(Err(e)) => {
                    tracing::warn!("failed to run ping: {}", e);
                    false
                }
                Err(_) => false,
            }
        })
    }

    fn name(&self) -> &'static str {
        "ping"
    }
}

/// Opens and immediately closes a TCP connection to the display port.
#[derive(Debug, Clone)]
pub struct TcpProbe {
    timeout: Duration,
}

impl TcpProbe {
    pub fn new(timeout: Duration) -> Self {
        TcpProbe { timeout }
    }
}

impl Probe for TcpProbe {
    fn probe<'a>(
        &'a self,
        endpoint: &'a RemoteEndpoint,
    ) -> Pin<Box<dyn Future<Output = bool> + Send + 'a>> {
        Box::pin(async move {
            let connect = TcpStream::connect((endpoint.host(), endpoint.port()));
            matches!(timeout(self.timeout, connect).await, Ok(Ok(_)))
        })
    }

    fn name(&self) -> &'static str {
        "tcp"
    }
}

/// Skips the check.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeReachable;

impl Probe for AssumeReachable {
    fn probe<'a>(
        &'a self,
        _endpoint: &'a RemoteEndpoint,
    ) -> Pin<Box<dyn Future<Output = bool> + Send + 'a>> {
        Box::pin(async { true })
    }

    fn name(&self) -> &'static str {
        "none"
    }
}

/// A configured probe aimed at the display's well-known address.
pub struct Discovery {
    probe: Box<dyn Probe>,
    candidate: RemoteEndpoint,
}

impl Discovery {
    pub fn new(probe: Box<dyn Probe>, candidate: RemoteEndpoint) -> Self {
        Discovery { probe, candidate }
    }

    /// Builds discovery from the `[remote]` and `[discovery]` sections.
    pub fn from_config(config: &Config) -> Self {
        let bound = Duration::from_millis(config.discovery.timeout_ms);
        let probe: Box<dyn Probe> = match config.discovery.method {
            DiscoveryMethod::Ping => Box::new(PingProbe::new(bound)),
            DiscoveryMethod::Tcp => Box::new(TcpProbe::new(bound)),
            DiscoveryMethod::None => Box::new(AssumeReachable),
        };
        let candidate = RemoteEndpoint::new(config.remote.address.clone(), config.remote.port);
        Discovery::new(probe, candidate)
    }

    /// The address discovery checks.
    pub fn candidate(&self) -> &RemoteEndpoint {
        &self.candidate
    }

    /// Runs the probe; `Some` if the display answered.
    pub async fn resolve(&self) -> Option<RemoteEndpoint> {
        let reachable = self.probe.probe(&self.candidate).await;
        if reachable {
            tracing::info!("display reachable at {} ({})", self.candidate, self.probe.name());
            Some(self.candidate.clone())
        } else {
            tracing::warn!(
                "display not reachable at {} ({})",
                self.candidate,
                self.probe.name()
            );
            None
        }
    }
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
