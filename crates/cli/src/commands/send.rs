// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;
use std::path::Path;

use vitals_core::{EditOp, VitalField};

use crate::cli::{EditArgs, OutputFormat};
use crate::colors;
use crate::display::{
    fields_json, format_edit, format_event, format_vitals_table, SendJson, SessionJson,
};
use crate::error::{Error, Result};
use crate::mode::OperatingMode;
use crate::sync::{SendError, SyncController, SyncEvent, Transport};

use super::{open_session, runtime};

/// Execute `vsend send`.
pub fn run(
    config_path: Option<&Path>,
    edits: &EditArgs,
    mode: Option<OperatingMode>,
    output: OutputFormat,
) -> Result<()> {
    let runtime = runtime()?;
    let mut controller = open_session(&runtime, config_path, mode)?;
    let color = output == OutputFormat::Text && colors::should_colorize();
    let mut stdout = std::io::stdout().lock();
    runtime.block_on(run_impl(
        &mut controller,
        edits.ops(),
        output,
        color,
        &mut stdout,
    ))
}

/// Applies `ops` in order and sends per the controller's mode.
///
/// Buffered sessions send once after the last edit. Immediate sessions
/// send on every edit that changed a value, and once at the end if none
/// did.
pub(crate) async fn run_impl<T: Transport, W: Write>(
    controller: &mut SyncController<T>,
    ops: Vec<(VitalField, EditOp)>,
    output: OutputFormat,
    color: bool,
    out: &mut W,
) -> Result<()> {
    let mut reports = Vec::with_capacity(ops.len());
    let mut events = Vec::new();
    for (field, op) in ops {
        let report = controller.apply_edit(field, op).await;
        if let Some(event) = &report.send {
            events.push(event.clone());
        }
        reports.push(report);
    }
    if controller.mode().is_buffered() || events.is_empty() {
        events.push(controller.request_send().await);
    }

    match output {
        OutputFormat::Text => {
            for report in &reports {
                if let Some(line) = format_edit(report, controller.vitals()) {
                    writeln!(out, "{}", line)?;
                }
            }
            for event in &events {
                writeln!(out, "{}", format_event(event))?;
            }
            for line in format_vitals_table(controller.vitals(), color) {
                writeln!(out, "{}", line)?;
            }
        }
        OutputFormat::Json => {
            let report = SessionJson {
                mode: Some(controller.mode().to_string()),
                endpoint: controller.endpoint().map(ToString::to_string),
                edits: reports,
                sends: events.iter().map(SendJson::from).collect(),
                payload: None,
                fields: fields_json(controller.vitals()),
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        }
    }

    check_sends(controller, &events)
}

/// Turns failed sends into the command's error.
fn check_sends<T: Transport>(controller: &SyncController<T>, events: &[SyncEvent]) -> Result<()> {
    let failures: Vec<&SendError> = events.iter().filter_map(SyncEvent::error).collect();
    let Some(last) = failures.last() else {
        return Ok(());
    };
    if controller.endpoint().is_none() {
        return Err(Error::NotReachable {
            address: controller.candidate().to_string(),
        });
    }
    Err(Error::SendFailed {
        attempted: events.len(),
        failed: failures.len(),
        last: (*last).clone(),
    })
}

#[cfg(test)]
#[path = "send_tests.rs"]
mod tests;
