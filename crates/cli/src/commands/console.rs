// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line-oriented editing session.
//!
//! Reads one command per line until `quit` or end of input. Bad input is
//! reported and the session carries on.

use std::io::Write;
use std::path::Path;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use vitals_core::{EditOp, VitalField};

use crate::cli::parse_field;
use crate::colors;
use crate::display::{format_edit, format_event, format_vitals_table, UNSENT_MARKER};
use crate::error::Result;
use crate::mode::OperatingMode;
use crate::sync::{SyncController, Transport};

use super::{open_session, runtime};

const HELP: &str = "\
Commands:
  up FIELD           Step a field up by one
  down FIELD         Step a field down by one
  set FIELD VALUE    Set a field to typed text
  send               Send pending values to the display
  show               Show confirmed and pending values
  discard            Drop unsent edits
  probe              Look for the display again
  help               Show this list
  quit               Leave the console
Fields: bp, spo2, hr, temp, rr (or the full names)";

/// One parsed console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Edit(VitalField, EditOp),
    Send,
    Show,
    Discard,
    Probe,
    Help,
    Quit,
}

/// Parses a console line. Blank lines and `#` comments yield `None`.
pub fn parse_command(line: &str) -> std::result::Result<Option<ConsoleCommand>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "up" => ConsoleCommand::Edit(field_arg(verb, rest)?, EditOp::Increment),
        "down" => ConsoleCommand::Edit(field_arg(verb, rest)?, EditOp::Decrement),
        "set" => {
            let (field, value) = rest
                .split_once(char::is_whitespace)
                .ok_or_else(|| "usage: set FIELD VALUE".to_string())?;
            ConsoleCommand::Edit(
                parse_field(field)?,
                EditOp::SetManual(value.trim().to_string()),
            )
        }
        "send" => ConsoleCommand::Send,
        "show" => ConsoleCommand::Show,
        "discard" => ConsoleCommand::Discard,
        "probe" => ConsoleCommand::Probe,
        "help" | "?" => ConsoleCommand::Help,
        "quit" | "exit" => ConsoleCommand::Quit,
        other => return Err(format!("unknown command '{}' (try 'help')", other)),
    };
    Ok(Some(command))
}

fn field_arg(verb: &str, rest: &str) -> std::result::Result<VitalField, String> {
    if rest.is_empty() {
        return Err(format!("usage: {} FIELD", verb));
    }
    parse_field(rest)
}

/// Execute `vsend console` on stdin and stdout.
pub fn run(config_path: Option<&Path>, mode: Option<OperatingMode>) -> Result<()> {
    let runtime = runtime()?;
    let mut controller = open_session(&runtime, config_path, mode)?;
    let color = colors::should_colorize();
    let input = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout().lock();
    runtime.block_on(run_impl(&mut controller, input, color, &mut stdout))
}

pub(crate) async fn run_impl<T, R, W>(
    controller: &mut SyncController<T>,
    input: R,
    color: bool,
    out: &mut W,
) -> Result<()>
where
    T: Transport,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    match controller.endpoint() {
        Some(endpoint) => writeln!(out, "{} mode, display at {}", controller.mode(), endpoint)?,
        None => writeln!(
            out,
            "{} mode, display not reachable at {} (edits are kept; try 'probe')",
            controller.mode(),
            controller.candidate()
        )?,
    }
    show(controller, color, out)?;
    out.flush()?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Ok(None) => {}
            Ok(Some(ConsoleCommand::Quit)) => break,
            Ok(Some(command)) => execute(controller, command, color, out).await?,
            Err(message) => writeln!(out, "error: {}", message)?,
        }
        out.flush()?;
    }

    let unsent = controller.vitals().changed_fields();
    if !unsent.is_empty() {
        tracing::warn!("leaving console with {} unsent field(s)", unsent.len());
        writeln!(out, "{} field(s) were not sent", unsent.len())?;
    }
    Ok(())
}

async fn execute<T: Transport, W: Write>(
    controller: &mut SyncController<T>,
    command: ConsoleCommand,
    color: bool,
    out: &mut W,
) -> Result<()> {
    match command {
        ConsoleCommand::Edit(field, op) => {
            let report = controller.apply_edit(field, op).await;
            match format_edit(&report, controller.vitals()) {
                Some(line) => writeln!(out, "{}", line)?,
                None => {
                    let pending = controller.pending(field);
                    if controller.vitals().changed_fields().contains(&field) {
                        writeln!(out, "{}: {} {}", field, pending, UNSENT_MARKER)?;
                    } else {
                        writeln!(out, "{}: {}", field, pending)?;
                    }
                }
            }
            if let Some(event) = &report.send {
                writeln!(out, "{}", format_event(event))?;
            }
        }
        ConsoleCommand::Send => {
            let event = controller.request_send().await;
            writeln!(out, "{}", format_event(&event))?;
        }
        ConsoleCommand::Show => show(controller, color, out)?,
        ConsoleCommand::Discard => {
            controller.discard_pending();
            writeln!(out, "discarded unsent edits")?;
        }
        ConsoleCommand::Probe => {
            if controller.rediscover().await {
                writeln!(out, "display reachable at {}", controller.candidate())?;
            } else {
                writeln!(out, "display not reachable at {}", controller.candidate())?;
            }
        }
        ConsoleCommand::Help => writeln!(out, "{}", HELP)?,
        ConsoleCommand::Quit => {}
    }
    Ok(())
}

fn show<T: Transport, W: Write>(
    controller: &SyncController<T>,
    color: bool,
    out: &mut W,
) -> Result<()> {
    for line in format_vitals_table(controller.vitals(), color) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;
