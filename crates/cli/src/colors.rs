// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities for help and vitals output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use vitals_core::VitalField;

use crate::env;

/// ANSI 256-color codes for help and table chrome.
pub mod codes {
    /// Section headers: pastel cyan/steel blue
    pub const HEADER: u8 = 74;
    /// Commands/literals: light grey
    pub const LITERAL: u8 = 250;
    /// Default values/context: medium grey
    pub const CONTEXT: u8 = 245;
    /// Unsent edits
    pub const PENDING: u8 = 214;
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

/// Format a 256-color ANSI escape sequence for foreground color.
fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

const RESET: &str = "\x1b[0m";

fn paint(code: u8, text: &str) -> String {
    format!("{}{}{}", fg256(code), text, RESET)
}

/// Apply header color (section titles) to text.
pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

/// Apply literal color (commands, options) to text.
pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

/// Apply context color (default values, hints) to text.
pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

/// Apply the pending-edit color to text.
pub fn pending(text: &str) -> String {
    paint(codes::PENDING, text)
}

/// Paint `text` in the color the display uses for `field`.
pub fn field(field: VitalField, text: &str) -> String {
    paint(field.color().ansi256(), text)
}

/// Colorize an examples help block.
///
/// Lines ending in `:` are headers. In other lines the command runs up to
/// the first run of two spaces and is colored as a literal; the
/// description after it is left plain.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }

    let mut lines = Vec::new();
    for line in text.lines() {
        let trimmed = line.trim_start();
        let indent = &line[..line.len() - trimmed.len()];
        if trimmed.ends_with(':') {
            lines.push(format!("{}{}", indent, header(trimmed)));
        } else if let Some(end) = trimmed.find("  ") {
            let (cmd, desc) = trimmed.split_at(end);
            lines.push(format!("{}{}{}", indent, literal(cmd), desc));
        } else {
            lines.push(line.to_string());
        }
    }
    lines.join("\n")
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
