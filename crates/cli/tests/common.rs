// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::io::Read;
use std::net::TcpListener;
use std::path::PathBuf;
use std::thread::JoinHandle;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// `vsend` with a clean environment for config and color.
pub fn vsend() -> Command {
    let mut cmd = cargo_bin_cmd!("vsend");
    cmd.env_remove("VSEND_CONFIG")
        .env_remove("VSEND_LOG")
        .env_remove("COLOR")
        .env("NO_COLOR", "1");
    cmd
}

/// A local stand-in for the display: accepts `count` connections and
/// returns what each one wrote.
pub struct Display {
    pub port: u16,
    handle: JoinHandle<Vec<String>>,
}

impl Display {
    pub fn start(count: usize) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let handle = std::thread::spawn(move || {
            let mut payloads = Vec::new();
            for stream in listener.incoming().take(count) {
                let mut text = String::new();
                stream.unwrap().read_to_string(&mut text).unwrap();
                payloads.push(text);
            }
            payloads
        });
        Display { port, handle }
    }

    pub fn received(self) -> Vec<String> {
        self.handle.join().unwrap()
    }
}

/// A port with nothing listening on it.
pub fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

/// Writes a `vitals.toml` that skips discovery and targets `port`.
pub fn write_config(temp: &TempDir, port: u16, extra: &str) -> PathBuf {
    let path = temp.path().join("vitals.toml");
    std::fs::write(
        &path,
        format!(
            "{extra}\n[remote]\naddress = \"127.0.0.1\"\nport = {port}\nconnect_timeout_ms = 1000\nwrite_timeout_ms = 1000\n\n[discovery]\nmethod = \"none\"\n"
        ),
    )
    .unwrap();
    path
}
