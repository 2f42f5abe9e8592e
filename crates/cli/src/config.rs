// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sender configuration.
//!
//! Configuration is stored in `vitals.toml` and includes:
//! - `mode`: buffered or immediate sending
//! - `[remote]`: where the display listens and how long to wait for it
//! - `[discovery]`: how the display is found before the first send
//! - `[precision]`: decimal places per numeric vital sign

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use vitals_core::Precision;

use crate::error::{Error, Result};
use crate::mode::OperatingMode;

/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "vitals.toml";

/// Sender configuration stored in `vitals.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Whether edits wait for an explicit send (default: buffered).
    pub mode: OperatingMode,
    /// Display endpoint and transport timeouts.
    pub remote: RemoteConfig,
    /// How the display is discovered.
    pub discovery: DiscoveryConfig,
    /// Decimal places per numeric field.
    pub precision: Precision,
}

/// Display endpoint configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RemoteConfig {
    /// Host name or IP address of the display (default: "192.168.4.1").
    pub address: String,
    /// TCP port the display listens on (default: 9999).
    pub port: u16,
    /// Max time to wait for the connection in milliseconds (default: 2000).
    pub connect_timeout_ms: u64,
    /// Max time to wait for the payload write in milliseconds (default: 2000).
    pub write_timeout_ms: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        RemoteConfig {
            address: default_address(),
            port: 9999,
            connect_timeout_ms: 2_000,
            write_timeout_ms: 2_000,
        }
    }
}

fn default_address() -> String {
    "192.168.4.1".to_string()
}

/// How reachability is checked before sending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscoveryMethod {
    /// One ICMP echo via the system `ping` binary.
    #[default]
    Ping,
    /// Open and immediately close a TCP connection to the display port.
    Tcp,
    /// Skip the check and assume the display is reachable.
    None,
}

impl std::fmt::Display for DiscoveryMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiscoveryMethod::Ping => write!(f, "ping"),
            DiscoveryMethod::Tcp => write!(f, "tcp"),
            DiscoveryMethod::None => write!(f, "none"),
        }
    }
}

/// Discovery configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiscoveryConfig {
    /// Probe used to find the display (default: ping).
    pub method: DiscoveryMethod,
    /// Max time a probe may take in milliseconds (default: 1000).
    pub timeout_ms: u64,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        DiscoveryConfig {
            method: DiscoveryMethod::Ping,
            timeout_ms: 1_000,
        }
    }
}

impl Config {
    /// Loads and validates configuration from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::ConfigNotFound(path.display().to_string()));
            }
            Err(e) => return Err(Error::Config(format!("failed to read config: {}", e))),
        };
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the config the command line points at.
    ///
    /// An explicit path (flag or `VSEND_CONFIG`) must exist. The default
    /// `./vitals.toml` is optional and falls back to built-in defaults.
    pub fn load_for(explicit: Option<&Path>) -> Result<Self> {
        match resolve_path(explicit.map(Path::to_path_buf), crate::env::config_path()) {
            ConfigPath::Explicit(path) => Config::load(&path),
            ConfigPath::Default(path) if path.exists() => Config::load(&path),
            ConfigPath::Default(_) => Ok(Config::default()),
        }
    }

    /// Checks values serde cannot.
    pub fn validate(&self) -> Result<()> {
        if self.remote.address.trim().is_empty() {
            return Err(Error::Config("remote.address cannot be empty".to_string()));
        }
        if self.remote.port == 0 {
            return Err(Error::Config("remote.port cannot be 0".to_string()));
        }
        if self.remote.connect_timeout_ms == 0 || self.remote.write_timeout_ms == 0 {
            return Err(Error::Config(
                "remote timeouts must be greater than 0".to_string(),
            ));
        }
        if self.discovery.timeout_ms == 0 {
            return Err(Error::Config(
                "discovery.timeout_ms must be greater than 0".to_string(),
            ));
        }
        self.precision.validate()?;
        Ok(())
    }

    /// Saves configuration to `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_toml()?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Serializes configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))
    }
}

/// Where the config is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigPath {
    /// Named on the command line or by `VSEND_CONFIG`.
    Explicit(PathBuf),
    /// `./vitals.toml`.
    Default(PathBuf),
}

impl ConfigPath {
    pub fn path(&self) -> &Path {
        match self {
            ConfigPath::Explicit(p) | ConfigPath::Default(p) => p,
        }
    }
}

/// Picks the config path: flag, then environment, then the default file.
pub fn resolve_path(flag: Option<PathBuf>, env: Option<PathBuf>) -> ConfigPath {
    match flag.or(env) {
        Some(path) => ConfigPath::Explicit(path),
        None => ConfigPath::Default(PathBuf::from(DEFAULT_CONFIG_FILE)),
    }
}

/// Write a default config file to `path`.
pub fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(Error::ConfigExists(path.display().to_string()));
    }
    Config::default().save(path)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
