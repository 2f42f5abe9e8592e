// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use std::path::PathBuf;

use crate::colors;
use crate::help;
use crate::mode::OperatingMode;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

pub use args::{parse_assignment, parse_field, EditArgs};

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "vsend")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Edit vital signs and push them to a remote display")]
#[command(
    long_about = "Edit vital signs and push them to a remote display.\n\n\
    Values are stepped or typed locally, then sent as one text payload over TCP \
    to the display on the training network."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
pub struct Cli {
    /// Config file (default: ./vitals.toml, or $VSEND_CONFIG)
    #[arg(long, global = true, value_name = "path")]
    pub config: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply edits and send the vitals to the display
    #[command(after_help = colors::examples("\
Examples:
  vsend send                              Send the default vitals
  vsend send --up hr --up hr              Raise heart rate by 2 and send
  vsend send --set bp=135/90 --down spo2  Set blood pressure, lower SpO2
  vsend send --set temp=38.4 -m immediate One send per edit
  vsend send --up rr -o json              Report the result as JSON"))]
    Send {
        #[command(flatten)]
        edits: EditArgs,

        /// Override the configured mode
        #[arg(long, short = 'm', value_enum)]
        mode: Option<OperatingMode>,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Apply edits and show the payload without sending
    #[command(after_help = colors::examples("\
Examples:
  vsend preview --set bp=abc    Show how opaque text is sent
  vsend preview --up temp       Show the stepped temperature"))]
    Preview {
        #[command(flatten)]
        edits: EditArgs,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Interactive editing session reading commands from stdin
    Console {
        /// Override the configured mode
        #[arg(long, short = 'm', value_enum)]
        mode: Option<OperatingMode>,
    },

    /// Check whether the display is reachable
    Probe,

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the effective configuration as TOML
    Show,

    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
