// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::config::RemoteConfig;
use crate::sync::test_helpers::{static_discovery, test_endpoint, StaticProbe};
use tokio::net::TcpListener;

#[tokio::test]
async fn resolve_reachable_yields_candidate() {
    let probe = StaticProbe::new(true);
    let discovery = static_discovery(&probe);
    assert_eq!(discovery.resolve().await, Some(test_endpoint()));
    assert_eq!(probe.calls(), 1);
}

#[tokio::test]
async fn resolve_unreachable_yields_none() {
    let probe = StaticProbe::new(false);
    let discovery = static_discovery(&probe);
    assert_eq!(discovery.resolve().await, None);
}

#[tokio::test]
async fn assume_reachable_always_answers() {
    assert!(AssumeReachable.probe(&test_endpoint()).await);
    assert_eq!(AssumeReachable.name(), "none");
}

#[tokio::test]
async fn tcp_probe_finds_listener() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let probe = TcpProbe::new(Duration::from_millis(500));
    assert!(probe.probe(&RemoteEndpoint::new("127.0.0.1", port)).await);
}

#[tokio::test]
async fn tcp_probe_reports_closed_port() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    let probe = TcpProbe::new(Duration::from_millis(500));
    assert!(!probe.probe(&RemoteEndpoint::new("127.0.0.1", port)).await);
}

#[test]
fn from_config_targets_remote_address() {
    let config = Config {
        remote: RemoteConfig {
            address: "10.1.2.3".to_string(),
            port: 4242,
            ..RemoteConfig::default()
        },
        ..Config::default()
    };
    let discovery = Discovery::from_config(&config);
    assert_eq!(discovery.candidate(), &RemoteEndpoint::new("10.1.2.3", 4242));
}

#[tokio::test]
async fn from_config_with_no_probe_is_reachable() {
    let mut config = Config::default();
    config.discovery.method = DiscoveryMethod::None;
    let discovery = Discovery::from_config(&config);
    assert_eq!(
        discovery.resolve().await,
        Some(RemoteEndpoint::new("192.168.4.1", 9999))
    );
}
