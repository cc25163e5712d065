//! # CLI Definition
//!
//! The clap command tree shared by the `daybook` binary and the interactive
//! shell, plus the dispatch from parsed commands to command implementations.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use crate::{
    commands::{self, AddArgs, CalArgs, ConfigArgs, DateArgs, DeleteArgs, SearchArgs, UpdateArgs},
    config::Config,
    session::Session,
};

const GLOBAL_HELP: &str = "\
Files:
  ~/.config/daybook/config   Global configuration (data_file, log_level)
  tasks.txt                  Default task file in the current directory

Task File Format:
  [YEAR] 2025                Starts the tasks of a year
  12 25 Christmas Day        <month> <day> <description>

Getting Started:
  daybook init 2025                        Create an empty task file
  daybook add 2025 12 25 Christmas Day     Add a task
  daybook cal 2025 12                      Show December with marked days
  daybook shell                            Work interactively

Learn more:
  daybook <COMMAND> --help   Show detailed help for a command";

#[derive(Parser)]
#[command(name = "daybook")]
#[command(author = "Dominic Rodemer")]
#[command(version)]
#[command(about = "Plain-text calendar and task keeper for the terminal")]
#[command(
    long_about = "daybook keeps dated tasks in a single plain-text file. Tasks belong to a \
calendar day and are numbered 1..N per day; deleting a task renumbers the rest.

Calendars can be printed as month grids with days that have tasks marked, tasks can be \
listed per day, month or year, and searched by keyword. The task file is loaded on every \
command and written back only when something changed."
)]
#[command(after_help = GLOBAL_HELP)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Flags accepted by every subcommand
#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    /// Task file to use instead of the configured one
    #[arg(long, short = 'f', global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Year, month and day as positional arguments
#[derive(Args, Debug, Clone, Copy)]
pub struct DateInput {
    /// Year (1 or later)
    #[arg(value_parser = clap::value_parser!(i32).range(1..))]
    pub year: i32,

    /// Month (1-12)
    #[arg(value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: u32,

    /// Day of month (1-31, checked against the month)
    #[arg(value_parser = clap::value_parser!(u32).range(1..=31))]
    pub day: u32,
}

impl From<DateInput> for DateArgs {
    fn from(input: DateInput) -> Self {
        Self {
            year: input.year,
            month: input.month,
            day: input.day,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new task file starting with an empty year
    #[command(
        long_about = "Create a new task file holding an empty calendar for YEAR.\n\n\
The file is written to the path given by --file, the data_file config option, \
or tasks.txt in the current directory. Fails if the file already exists.",
        after_help = "Examples:\n  \
daybook init 2025\n  \
daybook --file ~/notes/tasks.txt init 2026"
    )]
    Init {
        /// Starting year
        #[arg(value_parser = clap::value_parser!(i32).range(1..))]
        year: i32,
    },

    /// Add a task to a date
    #[command(
        long_about = "Add a task to a date.\n\n\
The task is appended to the day and gets the next free number. The words of the \
description are joined with single spaces; quote the description to keep spacing.",
        after_help = "Examples:\n  \
daybook add 2025 12 25 Christmas Day\n  \
daybook add 2026 1 1 \"New Year's Day\""
    )]
    Add {
        #[command(flatten)]
        date: DateInput,

        /// Task description
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        description: Vec<String>,
    },

    /// Show the tasks of a date
    #[command(after_help = "Examples:\n  \
daybook show 2025 12 25")]
    Show {
        #[command(flatten)]
        date: DateInput,
    },

    /// Show the tasks of the current date
    Today,

    /// List every day with tasks in a month
    #[command(after_help = "Examples:\n  \
daybook month 2025 12")]
    Month {
        /// Year (1 or later)
        #[arg(value_parser = clap::value_parser!(i32).range(1..))]
        year: i32,

        /// Month (1-12)
        #[arg(value_parser = clap::value_parser!(u32).range(1..=12))]
        month: u32,
    },

    /// List every day with tasks in a year
    #[command(after_help = "Examples:\n  \
daybook year 2025")]
    Year {
        /// Year (1 or later)
        #[arg(value_parser = clap::value_parser!(i32).range(1..))]
        year: i32,
    },

    /// Print month calendars with days that have tasks marked
    #[command(
        long_about = "Print calendar grids, one per month, weeks starting on Sunday.\n\n\
Days with one or more tasks are marked with '*'. Without arguments the current \
month is shown; with only a year all twelve months are shown.",
        after_help = "Examples:\n  \
daybook cal                 Current month\n  \
daybook cal 2025            Whole year\n  \
daybook cal 2025 12         December 2025"
    )]
    Cal {
        /// Year (1 or later)
        #[arg(value_parser = clap::value_parser!(i32).range(1..))]
        year: Option<i32>,

        /// Month (1-12)
        #[arg(value_parser = clap::value_parser!(u32).range(1..=12), requires = "year")]
        month: Option<u32>,
    },

    /// Replace the description of a task
    #[command(after_help = "Examples:\n  \
daybook update 2025 12 25 2 Dinner at 7")]
    Update {
        #[command(flatten)]
        date: DateInput,

        /// Task number as shown by `daybook show`
        id: u32,

        /// New description
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        description: Vec<String>,
    },

    /// Delete a task from a date
    #[command(
        long_about = "Delete a task from a date.\n\n\
Without ID the tasks of the date are listed with their numbers. Remaining tasks \
are renumbered after a delete, so list again before deleting another one.",
        after_help = "Examples:\n  \
daybook delete 2025 12 25         List tasks to pick from\n  \
daybook delete 2025 12 25 1       Delete task 1"
    )]
    Delete {
        #[command(flatten)]
        date: DateInput,

        /// Task number to delete
        id: Option<u32>,
    },

    /// Find tasks containing a keyword
    #[command(
        long_about = "Find tasks whose description contains KEYWORD.\n\n\
Matching ignores ASCII letter case. Results are listed by date.",
        after_help = "Examples:\n  \
daybook search dinner\n  \
daybook search \"new year\""
    )]
    Search {
        /// Keyword (several words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        keyword: Vec<String>,
    },

    /// Work interactively with the task file loaded once
    #[command(
        long_about = "Start an interactive session.\n\n\
Each line is a daybook command without the program name, for example \
`add 2025 12 25 Christmas Day`. Changes are kept in memory and written when the \
session ends with `exit`, `quit` or end of input; `save` writes immediately."
    )]
    Shell,

    /// Print a shell completion script
    #[command(after_help = "Examples:\n  \
daybook completions bash > ~/.local/share/bash-completion/completions/daybook\n  \
daybook completions zsh > ~/.zfunc/_daybook")]
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show or create the global configuration
    #[command(after_help = "Examples:\n  \
daybook config             Show effective settings\n  \
daybook config --init      Create ~/.config/daybook/config")]
    Config {
        /// Create the config file with commented defaults if missing
        #[arg(long)]
        init: bool,
    },
}

impl Commands {
    /// Subcommand name as typed on the command line
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Init { .. } => "init",
            Self::Add { .. } => "add",
            Self::Show { .. } => "show",
            Self::Today => "today",
            Self::Month { .. } => "month",
            Self::Year { .. } => "year",
            Self::Cal { .. } => "cal",
            Self::Update { .. } => "update",
            Self::Delete { .. } => "delete",
            Self::Search { .. } => "search",
            Self::Shell => "shell",
            Self::Completions { .. } => "completions",
            Self::Config { .. } => "config",
        }
    }
}

/// Runs a top-level command. Commands working on tasks open a session and
/// save it afterwards if they changed anything.
pub fn run(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Init { year } => commands::init(config, year),
        Commands::Completions { shell } => commands::completions(shell, &mut Cli::command()),
        Commands::Config { init } => commands::config(config, ConfigArgs { init }),
        Commands::Shell => {
            let mut session = Session::open(config)?;
            commands::shell(&mut session)
        }
        command => {
            let mut session = Session::open(config)?;
            dispatch(&mut session, command)?;
            session.save_if_dirty()
        }
    }
}

/// Runs a command against an open session without saving.
pub fn dispatch(session: &mut Session, command: Commands) -> Result<()> {
    match command {
        Commands::Add { date, description } => commands::add(
            session,
            &AddArgs {
                date: date.into(),
                description: commands::join_words(&description),
            },
        ),

        Commands::Show { date } => commands::show(session, &date.into()),

        Commands::Today => commands::today(session),

        Commands::Month { year, month } => commands::month(session, year, month),

        Commands::Year { year } => commands::year(session, year),

        Commands::Cal { year, month } => commands::cal(session, &CalArgs { year, month }),

        Commands::Update {
            date,
            id,
            description,
        } => commands::update(
            session,
            &UpdateArgs {
                date: date.into(),
                id,
                description: commands::join_words(&description),
            },
        ),

        Commands::Delete { date, id } => commands::delete(
            session,
            &DeleteArgs {
                date: date.into(),
                id,
            },
        ),

        Commands::Search { keyword } => commands::search(
            session,
            &SearchArgs {
                keyword: commands::join_words(&keyword),
            },
        ),

        other @ (Commands::Init { .. }
        | Commands::Shell
        | Commands::Completions { .. }
        | Commands::Config { .. }) => {
            anyhow::bail!("'{}' is not available inside the shell", other.name())
        }
    }
}
