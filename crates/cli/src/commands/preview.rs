// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;
use std::path::Path;

use vitals_core::{encode, EditOp, VitalField, VitalSet};

use crate::cli::{EditArgs, OutputFormat};
use crate::colors;
use crate::config::Config;
use crate::display::{fields_json, format_edit, format_vitals_table, SessionJson};
use crate::error::Result;
use crate::sync::EditReport;

use super::new_vitals;

/// Execute `vsend preview`. Never touches the network.
pub fn run(config_path: Option<&Path>, edits: &EditArgs, output: OutputFormat) -> Result<()> {
    let config = Config::load_for(config_path)?;
    let mut vitals = new_vitals(&config);
    let color = output == OutputFormat::Text && colors::should_colorize();
    run_impl(
        &mut vitals,
        edits.ops(),
        output,
        color,
        &mut std::io::stdout().lock(),
    )
}

pub(crate) fn run_impl<W: Write>(
    vitals: &mut VitalSet,
    ops: Vec<(VitalField, EditOp)>,
    output: OutputFormat,
    color: bool,
    out: &mut W,
) -> Result<()> {
    let reports: Vec<EditReport> = ops
        .into_iter()
        .map(|(field, op)| EditReport {
            field,
            outcome: vitals.apply_edit(field, op),
            send: None,
        })
        .collect();
    let payload = encode(&vitals.snapshot_for_send());

    match output {
        OutputFormat::Text => {
            for report in &reports {
                if let Some(line) = format_edit(report, vitals) {
                    writeln!(out, "{}", line)?;
                }
            }
            for line in format_vitals_table(vitals, color) {
                writeln!(out, "{}", line)?;
            }
            writeln!(out)?;
            writeln!(out, "payload ({} bytes): {}", payload.len(), payload)?;
            for field in payload.ambiguous_fields() {
                writeln!(
                    out,
                    "warning: {} contains ',' or '='; the display may misread it",
                    field
                )?;
            }
        }
        OutputFormat::Json => {
            let report = SessionJson {
                mode: None,
                endpoint: None,
                edits: reports,
                sends: Vec::new(),
                payload: Some(payload.to_string()),
                fields: fields_json(vitals),
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "preview_tests.rs"]
mod tests;
