// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs and value parsers for CLI commands.

use clap::{Arg, ArgAction, ArgMatches, Args, FromArgMatches};

use vitals_core::{EditOp, VitalField};

/// Parse a field key or alias (`HeartRate`, `hr`, ...).
pub fn parse_field(s: &str) -> Result<VitalField, String> {
    s.parse::<VitalField>().map_err(|e| e.to_string())
}

/// Parse `FIELD=VALUE`. The value is kept as typed, including any `=`.
pub fn parse_assignment(s: &str) -> Result<(VitalField, String), String> {
    let (field, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{}'", s))?;
    Ok((parse_field(field)?, value.to_string()))
}

const SET: &str = "set";
const UP: &str = "up";
const DOWN: &str = "down";

/// Edits shared by `send` and `preview`, kept in the order they were typed.
///
/// `--up hr --set hr=80` ends at 80 while `--set hr=80 --up hr` ends at 81.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditArgs {
    ops: Vec<(VitalField, EditOp)>,
}

impl EditArgs {
    /// Edits in application order.
    pub fn ops(&self) -> Vec<(VitalField, EditOp)> {
        self.ops.clone()
    }
}

impl Args for EditArgs {
    fn augment_args(cmd: clap::Command) -> clap::Command {
        cmd.arg(
            Arg::new(SET)
                .long(SET)
                .value_name("FIELD=VALUE")
                .action(ArgAction::Append)
                .value_parser(parse_assignment)
                .help("Set a field to typed text, e.g. bp=120/80 (repeatable)"),
        )
        .arg(
            Arg::new(UP)
                .long(UP)
                .value_name("FIELD")
                .action(ArgAction::Append)
                .value_parser(parse_field)
                .help("Step a field up by one (repeatable)"),
        )
        .arg(
            Arg::new(DOWN)
                .long(DOWN)
                .value_name("FIELD")
                .action(ArgAction::Append)
                .value_parser(parse_field)
                .help("Step a field down by one (repeatable)"),
        )
    }

    fn augment_args_for_update(cmd: clap::Command) -> clap::Command {
        Self::augment_args(cmd)
    }
}

impl FromArgMatches for EditArgs {
    fn from_arg_matches(matches: &ArgMatches) -> Result<Self, clap::Error> {
        let mut indexed: Vec<(usize, (VitalField, EditOp))> = Vec::new();
        if let (Some(indices), Some(values)) = (
            matches.indices_of(SET),
            matches.get_many::<(VitalField, String)>(SET),
        ) {
            let ops = values.map(|(field, text)| (*field, EditOp::SetManual(text.clone())));
            indexed.extend(indices.zip(ops));
        }
        for (id, op) in [(UP, EditOp::Increment), (DOWN, EditOp::Decrement)] {
            if let (Some(indices), Some(values)) =
                (matches.indices_of(id), matches.get_many::<VitalField>(id))
            {
                indexed.extend(indices.zip(values.map(|field| (*field, op.clone()))));
            }
        }
        indexed.sort_by_key(|(index, _)| *index);
        Ok(EditArgs {
            ops: indexed.into_iter().map(|(_, op)| op).collect(),
        })
    }

    fn update_from_arg_matches(&mut self, matches: &ArgMatches) -> Result<(), clap::Error> {
        *self = Self::from_arg_matches(matches)?;
        Ok(())
    }
}
