//! # Completions Command
//!
//! Prints a completion script for bash, zsh, fish, elvish or PowerShell.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Command;
use clap_complete::{generate, Shell};

/// Writes the completion script for `shell` to stdout.
/// `cmd` is the top-level CLI command (`Cli::command()`).
pub fn execute(shell: Shell, cmd: &mut Command) -> Result<()> {
    let mut stdout = io::stdout().lock();
    write_script(shell, cmd, &mut stdout)?;
    stdout.flush().context("Failed to write completions")?;
    Ok(())
}

/// Writes the completion script for `shell` to `out`.
pub fn write_script<W: Write>(shell: Shell, cmd: &mut Command, out: &mut W) -> Result<()> {
    let bin_name = cmd
        .get_bin_name()
        .unwrap_or_else(|| cmd.get_name())
        .to_string();
    generate(shell, cmd, bin_name, out);
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;
    use crate::cli::Cli;

    fn script(shell: Shell) -> String {
        let mut buf = Vec::new();
        write_script(shell, &mut Cli::command(), &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_bash_script_mentions_subcommands() {
        let out = script(Shell::Bash);
        assert!(out.contains("daybook"));
        for sub in ["add", "cal", "search", "delete"] {
            assert!(out.contains(sub), "missing {sub}");
        }
    }

    #[test]
    fn test_fish_script_not_empty() {
        assert!(!script(Shell::Fish).is_empty());
    }
}
