//! # daybook CLI
//!
//! Command-line interface for the daybook calendar and task keeper.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;

use daybook::{cli::Cli, logging, Config};

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.global.file)?;
    let _logger = logging::init(cli.global.verbose, config.log_level())?;

    daybook::cli::run(cli.command, &config)
}
