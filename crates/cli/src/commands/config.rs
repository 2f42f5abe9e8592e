// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;
use std::path::Path;

use crate::cli::ConfigCommand;
use crate::config::{init_config, resolve_path, Config};
use crate::env;
use crate::error::Result;

/// Execute a config subcommand.
pub fn run(config_path: Option<&Path>, cmd: ConfigCommand) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    match cmd {
        ConfigCommand::Show => run_show(&Config::load_for(config_path)?, &mut stdout),
        ConfigCommand::Init { force } => {
            let target = resolve_path(config_path.map(Path::to_path_buf), env::config_path());
            run_init(target.path(), force, &mut stdout)
        }
    }
}

fn run_show<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    write!(out, "{}", config.to_toml()?)?;
    Ok(())
}

fn run_init<W: Write>(path: &Path, force: bool, out: &mut W) -> Result<()> {
    init_config(path, force)?;
    writeln!(out, "wrote {}", path.display())?;
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
