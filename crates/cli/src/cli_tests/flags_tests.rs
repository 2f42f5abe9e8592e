// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use std::collections::{HashMap, HashSet};

/// Test that only allowed long-form flags have short forms,
/// all allowed short forms are correctly mapped, and all
/// entries in the allowed set are actually used somewhere.
#[test]
fn test_flag_consistency() {
    use clap::CommandFactory;

    let allowed: HashMap<char, &str> = [('v', "verbose"), ('m', "mode"), ('o', "output")]
        .into_iter()
        .collect();

    let cmd = Cli::command();
    let mut errors = Vec::new();
    let mut used_shorts = HashSet::new();

    check_command_flags(&cmd, &allowed, &mut errors, &mut used_shorts);

    for (short_char, long_name) in &allowed {
        if !used_shorts.contains(short_char) {
            errors.push(format!(
                "-{} (--{}) is in allowed set but never used",
                short_char, long_name
            ));
        }
    }

    assert!(
        errors.is_empty(),
        "Flag consistency violations:\n{}",
        errors.join("\n")
    );
}

fn check_command_flags(
    cmd: &clap::Command,
    allowed: &HashMap<char, &str>,
    errors: &mut Vec<String>,
    used_shorts: &mut HashSet<char>,
) {
    for arg in cmd.get_arguments() {
        let Some(short_char) = arg.get_short() else {
            continue;
        };
        let long = arg.get_long();
        if matches!((short_char, long), ('h', Some("help")) | ('V', Some("version"))) {
            continue;
        }
        used_shorts.insert(short_char);

        match (allowed.get(&short_char), long) {
            (Some(expected), Some(actual)) if actual != *expected => errors.push(format!(
                "{}: -{} maps to --{} but should map to --{}",
                cmd.get_name(),
                short_char,
                actual,
                expected
            )),
            (Some(expected), None) => errors.push(format!(
                "{}: -{} has no long form, expected --{}",
                cmd.get_name(),
                short_char,
                expected
            )),
            (None, _) => errors.push(format!(
                "{}: -{} (--{}) is not an allowed short flag",
                cmd.get_name(),
                short_char,
                long.unwrap_or("(none)")
            )),
            _ => {}
        }
    }

    for subcmd in cmd.get_subcommands() {
        check_command_flags(subcmd, allowed, errors, used_shorts);
    }
}

#[test]
fn test_cli_debug_assert() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
