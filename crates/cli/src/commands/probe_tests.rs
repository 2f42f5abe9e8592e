// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use crate::sync::test_helpers::{static_discovery, StaticProbe};

#[tokio::test]
async fn test_probe_reachable() {
    let probe = StaticProbe::new(true);
    let mut out = Vec::new();
    run_impl(&static_discovery(&probe), "ping", &mut out)
        .await
        .unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "display reachable at 192.168.4.1:9999 (ping)\n"
    );
}

#[tokio::test]
async fn test_probe_unreachable() {
    let probe = StaticProbe::new(false);
    let mut out = Vec::new();
    let err = run_impl(&static_discovery(&probe), "ping", &mut out)
        .await
        .unwrap_err();
    assert!(out.is_empty());
    assert!(err.to_string().contains("192.168.4.1:9999"));
    assert!(err.to_string().contains("hint:"));
}
