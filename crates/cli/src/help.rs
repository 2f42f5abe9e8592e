// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let color = |code: u8| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));
    let header = color(colors::codes::HEADER);
    let literal = color(colors::codes::LITERAL);
    let context = color(colors::codes::CONTEXT);

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(context)
        .valid(context)
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header_vitals}
  {send}        Apply edits and send the vitals to the display
  {preview}     Apply edits and show the payload without sending
  {console}     Interactive editing session

{header_setup}
  {probe}       Check whether the display is reachable
  {config}      Manage configuration
  {completion}  Generate shell completions

{header_fields}
  {fields}
",
        header_vitals = colors::header("Vitals:"),
        header_setup = colors::header("Setup:"),
        header_fields = colors::header("Fields:"),
        send = colors::literal("send"),
        preview = colors::literal("preview"),
        console = colors::literal("console"),
        probe = colors::literal("probe"),
        config = colors::literal("config"),
        completion = colors::literal("completion"),
        fields = fields(),
    )
}

/// `bp (BloodPressure), spo2 (SpO2), ...`, each alias in its display color.
fn fields() -> String {
    vitals_core::VitalField::ALL
        .iter()
        .map(|field| {
            format!(
                "{} {}",
                colors::field(*field, field.alias()),
                colors::context(&format!("({})", field.as_str()))
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  vsend config init      Write ./vitals.toml
  vsend probe            Check the display is reachable
  vsend send --up hr     Raise heart rate by one and send
  vsend console          Edit interactively",
    )
}
