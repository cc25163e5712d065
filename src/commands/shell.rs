//! # Shell Command
//!
//! Interactive loop over one loaded calendar. Each input line is split like a
//! POSIX shell would and parsed with the regular subcommand definitions.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use owo_colors::OwoColorize;

use crate::{
    cli::{self, Commands},
    session::Session,
    ui,
};

const PROMPT: &str = "daybook> ";

const SHELL_HELP: &str = "\
Session commands:
  save     Write the task file now
  exit     Save changes and leave (also: quit, end of input)";

/// One shell line: a subcommand without the program name
#[derive(Parser, Debug)]
#[command(name = "daybook", no_binary_name = true, disable_version_flag = true)]
#[command(after_help = SHELL_HELP)]
struct ShellLine {
    #[command(subcommand)]
    command: Commands,
}

/// What the loop should do after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellAction {
    Continue,
    Exit,
}

/// Executes the shell command on stdin. Prompts only when stdin is a terminal.
pub fn execute(session: &mut Session) -> Result<()> {
    let stdin = io::stdin();
    let prompt = stdin.is_terminal();
    run(session, stdin.lock(), prompt)
}

/// Runs the loop until `exit`/`quit` or end of input, then saves if needed.
pub fn run<R: BufRead>(session: &mut Session, mut input: R, prompt: bool) -> Result<()> {
    let mut line = String::new();

    loop {
        if prompt {
            print!("{PROMPT}");
            io::stdout().flush().context("Failed to write prompt")?;
        }

        line.clear();
        let read = input
            .read_line(&mut line)
            .context("Failed to read shell input")?;
        if read == 0 {
            if prompt {
                println!();
            }
            break;
        }

        if run_line(session, &line)? == ShellAction::Exit {
            break;
        }
    }

    println!("Saving and exiting...");
    session.save_if_dirty()
}

/// Handles one input line. Parse, command and `save` errors are printed and
/// the loop goes on.
pub fn run_line(session: &mut Session, line: &str) -> Result<ShellAction> {
    let trimmed = line.trim();

    match trimmed {
        "" => return Ok(ShellAction::Continue),
        "exit" | "quit" => return Ok(ShellAction::Exit),
        "save" => {
            match session.save() {
                Ok(()) => ui::print_success(&format!("Saved {}", session.path().display())),
                Err(err) => print_error(&format!("{err:#}")),
            }
            return Ok(ShellAction::Continue);
        }
        _ => {}
    }

    let Some(words) = shlex::split(trimmed) else {
        print_error("unbalanced quotes in input");
        return Ok(ShellAction::Continue);
    };

    let parsed = match ShellLine::try_parse_from(words) {
        Ok(parsed) => parsed,
        Err(err) => {
            // Covers `help` and `--help` too, which clap reports as errors
            if let Err(io_err) = err.print() {
                debug!("failed to print parse error: {io_err}");
            }
            return Ok(ShellAction::Continue);
        }
    };

    debug!("shell command: {}", parsed.command.name());

    if let Err(err) = cli::dispatch(session, parsed.command) {
        print_error(&format!("{err:#}"));
    }

    Ok(ShellAction::Continue)
}

fn print_error(message: &str) {
    eprintln!("{} {message}", "error:".red().bold());
}
