// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text and JSON rendering of vitals, edits and sends.

use serde::Serialize;

use vitals_core::{EditOutcome, VitalField, VitalSet};

use crate::colors;
use crate::sync::{EditReport, SyncEvent};

/// Width of the field-name column; fits `RespiratoryRate`.
const FIELD_WIDTH: usize = 16;
/// Width of the confirmed column.
const VALUE_WIDTH: usize = 12;

/// Marker shown next to a pending value that has not been sent.
pub const UNSENT_MARKER: &str = "*";

/// Render confirmed and pending values side by side.
///
/// ```text
/// Field            Confirmed    Pending
/// BloodPressure    120/80       121/81 *
/// SpO2             98%          98%
/// ```
pub fn format_vitals_table(vitals: &VitalSet, color: bool) -> Vec<String> {
    let mut lines = vec![format!(
        "{:<FIELD_WIDTH$} {:<VALUE_WIDTH$} {}",
        "Field", "Confirmed", "Pending"
    )];
    let changed = vitals.changed_fields();

    for field in VitalField::ALL {
        let name = format!("{:<FIELD_WIDTH$}", field.as_str());
        let confirmed = format!("{:<VALUE_WIDTH$}", vitals.get_confirmed(field));
        let pending = vitals.get_pending(field);
        let unsent = changed.contains(&field);

        let line = if color {
            let name = colors::field(field, &name);
            if unsent {
                format!(
                    "{} {} {}",
                    name,
                    confirmed,
                    colors::pending(&format!("{} {}", pending, UNSENT_MARKER))
                )
            } else {
                format!("{} {} {}", name, confirmed, pending)
            }
        } else if unsent {
            format!("{} {} {} {}", name, confirmed, pending, UNSENT_MARKER)
        } else {
            format!("{} {} {}", name, confirmed, pending)
        };
        lines.push(line);
    }
    lines
}

/// One line about an edit, when there is something worth saying.
pub fn format_edit(report: &EditReport, vitals: &VitalSet) -> Option<String> {
    match report.outcome {
        EditOutcome::Stepped | EditOutcome::Parsed => None,
        EditOutcome::StepOnOpaque => Some(format!(
            "{} holds text '{}'; step skipped",
            report.field,
            vitals.get_pending(report.field)
        )),
        EditOutcome::ParseFailure => Some(format!(
            "{}: '{}' is not a recognised value; it will be sent as typed",
            report.field,
            vitals.get_pending(report.field)
        )),
    }
}

/// One line per send attempt.
pub fn format_event(event: &SyncEvent) -> String {
    match event {
        SyncEvent::Confirmed { payload } => format!("sent: {}", payload),
        SyncEvent::Failed(e) => format!("send failed: {}", e),
    }
}

/// One field in JSON output.
#[derive(Debug, Serialize)]
pub struct FieldJson {
    pub field: VitalField,
    pub confirmed: String,
    pub pending: String,
    pub unsent: bool,
}

/// One send attempt in JSON output.
#[derive(Debug, Serialize)]
pub struct SendJson {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&SyncEvent> for SendJson {
    fn from(event: &SyncEvent) -> Self {
        match event {
            SyncEvent::Confirmed { payload } => SendJson {
                ok: true,
                payload: Some(payload.clone()),
                error: None,
            },
            SyncEvent::Failed(e) => SendJson {
                ok: false,
                payload: None,
                error: Some(e.to_string()),
            },
        }
    }
}

/// JSON report for `send` and `preview`.
#[derive(Debug, Serialize)]
pub struct SessionJson {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    pub edits: Vec<EditReport>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sends: Vec<SendJson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
    pub fields: Vec<FieldJson>,
}

/// Field rows for JSON output.
pub fn fields_json(vitals: &VitalSet) -> Vec<FieldJson> {
    let changed = vitals.changed_fields();
    VitalField::ALL
        .into_iter()
        .map(|field| FieldJson {
            field,
            confirmed: vitals.get_confirmed(field),
            pending: vitals.get_pending(field),
            unsent: changed.contains(&field),
        })
        .collect()
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
