// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use yare::parameterized;

#[test]
fn test_error_config_not_found_display() {
    let err = Error::ConfigNotFound("/tmp/vitals.toml".to_string());
    let msg = err.to_string();
    assert!(msg.contains("config file not found: /tmp/vitals.toml"));
    assert!(msg.contains("hint: run 'vsend config init'"));
}

#[test]
fn test_error_not_reachable_display() {
    let err = Error::NotReachable {
        address: "192.168.4.1:9999".to_string(),
    };
    let msg = err.to_string();
    assert!(msg.contains("192.168.4.1:9999"));
    assert!(msg.contains("Wi-Fi"));
}

#[test]
fn test_error_send_failed_display() {
    let err = Error::SendFailed {
        attempted: 3,
        failed: 1,
        last: SendError::Io("connection reset".to_string()),
    };
    let msg = err.to_string();
    assert!(msg.starts_with("1 of 3 sends failed"));
    assert!(msg.contains("send failed: connection reset"));
    assert!(msg.contains("\n  hint:"));
}

#[test]
fn test_error_from_vitals_is_transparent() {
    let inner = vitals_core::Error::UnknownField("pulse".to_string());
    let expected = inner.to_string();
    let err: Error = inner.into();
    assert_eq!(err.to_string(), expected);
}

#[parameterized(
    config = { Error::Config("bad".to_string()), "config error: bad" },
    exists = { Error::ConfigExists("vitals.toml".to_string()), "already exists" },
)]
fn test_error_messages(err: Error, needle: &str) {
    assert!(err.to_string().contains(needle), "{err}");
}

#[test]
fn test_error_from_io() {
    let err: Error = std::io::Error::other("disk full").into();
    assert_eq!(err.to_string(), "io error: disk full");
}
