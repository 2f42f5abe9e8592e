// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn test_detect_buffered_by_default() {
    let config = Config::default();
    let mode = OperatingMode::detect(&config, None);
    assert_eq!(mode, OperatingMode::Buffered);
    assert!(mode.is_buffered());
    assert!(!mode.is_immediate());
    assert_eq!(mode.to_string(), "buffered");
}

#[test]
fn test_detect_immediate_from_config() {
    let config = Config {
        mode: OperatingMode::Immediate,
        ..Config::default()
    };
    let mode = OperatingMode::detect(&config, None);
    assert_eq!(mode, OperatingMode::Immediate);
    assert!(mode.is_immediate());
    assert_eq!(mode.to_string(), "immediate");
}

#[test]
fn test_cli_override_wins() {
    let config = Config {
        mode: OperatingMode::Immediate,
        ..Config::default()
    };
    assert_eq!(
        OperatingMode::detect(&config, Some(OperatingMode::Buffered)),
        OperatingMode::Buffered
    );
}

#[test]
fn test_mode_deserializes_snake_case() {
    #[derive(serde::Deserialize)]
    struct Wrapper {
        mode: OperatingMode,
    }
    let parsed: Wrapper = toml::from_str("mode = \"immediate\"").unwrap();
    assert_eq!(parsed.mode, OperatingMode::Immediate);
}
