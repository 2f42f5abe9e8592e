// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use tempfile::TempDir;
use yare::parameterized;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.mode, OperatingMode::Buffered);
    assert_eq!(config.remote.address, "192.168.4.1");
    assert_eq!(config.remote.port, 9999);
    assert_eq!(config.remote.connect_timeout_ms, 2_000);
    assert_eq!(config.remote.write_timeout_ms, 2_000);
    assert_eq!(config.discovery.method, DiscoveryMethod::Ping);
    assert_eq!(config.discovery.timeout_ms, 1_000);
    assert_eq!(config.precision, Precision::default());
    assert!(config.validate().is_ok());
}

#[test]
fn test_init_and_load_config() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("vitals.toml");
    init_config(&path, false).unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_init_refuses_to_overwrite() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("vitals.toml");
    std::fs::write(&path, "mode = \"immediate\"\n").unwrap();

    let err = init_config(&path, false).unwrap_err();
    assert!(err.to_string().contains("already exists"));
    assert!(err.to_string().contains("--force"));

    init_config(&path, true).unwrap();
    assert_eq!(Config::load(&path).unwrap().mode, OperatingMode::Buffered);
}

#[test]
fn test_partial_file_uses_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("vitals.toml");
    std::fs::write(
        &path,
        "mode = \"immediate\"\n\n[remote]\naddress = \"10.0.0.7\"\n\n[precision]\nspo2 = 1\n",
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.mode, OperatingMode::Immediate);
    assert_eq!(config.remote.address, "10.0.0.7");
    assert_eq!(config.remote.port, 9999);
    assert_eq!(config.precision.spo2, 1);
    assert_eq!(config.precision.temperature, 1);
    assert_eq!(config.discovery.method, DiscoveryMethod::Ping);
}

#[test]
fn test_discovery_method_parsing() {
    let config: Config = toml::from_str("[discovery]\nmethod = \"none\"\n").unwrap();
    assert_eq!(config.discovery.method, DiscoveryMethod::None);
    assert_eq!(config.discovery.method.to_string(), "none");
}

#[test]
fn test_config_load_missing_file() {
    let temp = TempDir::new().unwrap();
    let err = Config::load(&temp.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, Error::ConfigNotFound(_)));
    assert!(err.to_string().contains("vsend config init"));
}

#[parameterized(
    unknown_key = { "colour = \"red\"\n" },
    bad_mode = { "mode = \"sometimes\"\n" },
    bad_port_type = { "[remote]\nport = \"x\"\n" },
)]
fn test_config_parse_errors(content: &str) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("vitals.toml");
    std::fs::write(&path, content).unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(err.to_string().contains("failed to parse config"), "{err}");
}

#[parameterized(
    empty_address = { "[remote]\naddress = \" \"\n", "address" },
    zero_port = { "[remote]\nport = 0\n", "port" },
    zero_connect_timeout = { "[remote]\nconnect_timeout_ms = 0\n", "timeouts" },
    zero_probe_timeout = { "[discovery]\ntimeout_ms = 0\n", "discovery.timeout_ms" },
    precision_too_high = { "[precision]\ntemperature = 9\n", "Temperature" },
)]
fn test_config_validation_errors(content: &str, needle: &str) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("vitals.toml");
    std::fs::write(&path, content).unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(err.to_string().contains(needle), "{err}");
}

#[test]
fn test_save_and_reload_roundtrip() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("vitals.toml");
    let config = Config {
        mode: OperatingMode::Immediate,
        remote: RemoteConfig {
            address: "display.local".to_string(),
            port: 7000,
            connect_timeout_ms: 500,
            write_timeout_ms: 750,
        },
        discovery: DiscoveryConfig {
            method: DiscoveryMethod::Tcp,
            timeout_ms: 300,
        },
        precision: Precision {
            spo2: 1,
            ..Precision::default()
        },
    };
    config.save(&path).unwrap();
    assert_eq!(Config::load(&path).unwrap(), config);
}

#[test]
fn test_resolve_path_precedence() {
    let flag = Some(PathBuf::from("flag.toml"));
    let env = Some(PathBuf::from("env.toml"));

    assert_eq!(
        resolve_path(flag.clone(), env.clone()),
        ConfigPath::Explicit(PathBuf::from("flag.toml"))
    );
    assert_eq!(
        resolve_path(None, env),
        ConfigPath::Explicit(PathBuf::from("env.toml"))
    );
    let default = resolve_path(None, None);
    assert_eq!(default, ConfigPath::Default(PathBuf::from(DEFAULT_CONFIG_FILE)));
    assert_eq!(default.path(), Path::new("vitals.toml"));
}

#[test]
fn test_load_for_explicit_missing_path_fails() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope.toml");
    assert!(Config::load_for(Some(&missing)).is_err());
}
