// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use tempfile::TempDir;

#[test]
fn test_show_prints_all_sections() {
    let mut out = Vec::new();
    run_show(&Config::default(), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("mode = \"buffered\""));
    assert!(text.contains("[remote]"));
    assert!(text.contains("address = \"192.168.4.1\""));
    assert!(text.contains("[discovery]"));
    assert!(text.contains("[precision]"));
}

#[test]
fn test_init_writes_and_reports() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("vitals.toml");
    let mut out = Vec::new();

    run_init(&path, false, &mut out).unwrap();

    assert!(path.exists());
    assert!(String::from_utf8(out).unwrap().starts_with("wrote "));
    assert!(run_init(&path, false, &mut Vec::new()).is_err());
    run_init(&path, true, &mut Vec::new()).unwrap();
}
