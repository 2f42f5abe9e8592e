// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Payload delivery to the display.
//!
//! Each send is one connection: connect, write the whole payload, close.
//! Nothing is read back. [`TcpTransport`] is the real client; tests swap in
//! a recording mock behind the same [`Transport`] trait.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio::time::timeout;

use vitals_core::Payload;

/// Where the display listens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteEndpoint {
    host: String,
    port: u16,
}

impl RemoteEndpoint {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        RemoteEndpoint {
            host: host.into(),
            port,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

impl fmt::Display for RemoteEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}

/// Step of a send that ran out of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendStage {
    Connect,
    Write,
}

impl fmt::Display for SendStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SendStage::Connect => write!(f, "connecting"),
            SendStage::Write => write!(f, "writing"),
        }
    }
}

/// Why a send failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SendError {
    /// No endpoint was discovered, or the connection was refused.
    #[error("display unreachable: {0}")]
    Unreachable(String),

    /// The connection broke while writing.
    #[error("send failed: {0}")]
    Io(String),

    /// Connect or write exceeded its bound.
    #[error("timed out after {after_ms}ms while {stage}")]
    Timeout { stage: SendStage, after_ms: u64 },
}

/// Result type for transport operations.
pub type SendResult<T> = Result<T, SendError>;

/// One-shot payload delivery.
pub trait Transport: Send + Sync {
    /// Deliver `payload` to `endpoint` over a fresh connection.
    fn send<'a>(
        &'a mut self,
        endpoint: &'a RemoteEndpoint,
        payload: &'a Payload,
    ) -> Pin<Box<dyn Future<Output = SendResult<()>> + Send + 'a>>;
}

/// Tokio TCP client with bounded connect and write.
#[derive(Debug, Clone)]
pub struct TcpTransport {
    connect_timeout_ms: u64,
    write_timeout_ms: u64,
}

impl TcpTransport {
    /// Bounds are in milliseconds.
    pub fn new(connect_timeout_ms: u64, write_timeout_ms: u64) -> Self {
        TcpTransport {
            connect_timeout_ms,
            write_timeout_ms,
        }
    }
}

impl Transport for TcpTransport {
    fn send<'a>(
        &'a mut self,
        endpoint: &'a RemoteEndpoint,
        payload: &'a Payload,
    ) -> Pin<Box<dyn Future<Output = SendResult<()>> + Send + 'a>> {
        Box::pin(async move {
            let connect = TcpStream::connect((endpoint.host(), endpoint.port()));
            let mut stream = match timeout(Duration::from_millis(self.connect_timeout_ms), connect)
                .await
            {
                Ok(Ok(stream)) => stream,
                Ok(Err(e)) => {
                    return Err(SendError::Unreachable(format!("{}: {}", endpoint, e)));
                }
                Err(_) => {
                    return Err(SendError::Timeout {
                        stage: SendStage::Connect,
                        after_ms: self.connect_timeout_ms,
                    });
                }
            };

            let write = async {
                stream.write_all(payload.as_bytes()).await?;
                // Signal end of payload; the receiver reads until EOF.
                stream.shutdown().await
            };
            match timeout(Duration::from_millis(self.write_timeout_ms), write).await {
                Ok(Ok(())) => Ok(()),
                Ok(Err(e)) => Err(SendError::Io(e.to_string())),
                Err(_) => Err(SendError::Timeout {
                    stage: SendStage::Write,
                    after_ms: self.write_timeout_ms,
                }),
            }
        })
    }
}
