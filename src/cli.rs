use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Calendar grids, timeline positions and date labels as JSON.
#[derive(Parser)]
#[command(
    name = "timeline-slider",
    version,
    about = "Calendar grids, timeline positions and date labels"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Format a timestamp or date string with a token pattern.
    Format {
        /// Milliseconds since the epoch, or a date string.
        date: String,
        /// Token pattern, e.g. "yyyy-MM-dd EE hh:mm:ss".
        #[arg(short, long)]
        pattern: Option<String>,
    },
    /// List consecutive days starting (or ending) today.
    Recent {
        /// Number of days.
        count: usize,
        /// End the run today instead of starting it today.
        #[arg(long)]
        before: bool,
    },
    /// Print the calendar grid of a month, or of every month of a year.
    Calendar {
        year: i32,
        #[arg(short, long)]
        month: Option<u32>,
        /// Put Monday in the first column.
        #[arg(long)]
        monday: bool,
    },
    /// List the dates of a month or year in calendar order.
    List {
        year: i32,
        #[arg(short, long)]
        month: Option<u32>,
    },
    /// Print every day of a year with its timeline position.
    Positions {
        year: i32,
        /// Date to mark (YYYY-MM-DD); repeatable.
        #[arg(long = "mark")]
        marks: Vec<String>,
    },
    /// Describe how far a "YYYY-MM-DD HH:mm" time is from now.
    Relative { datetime: String },
    /// Print the first and last date of a month or year.
    Range {
        year: i32,
        #[arg(short, long)]
        month: Option<u32>,
    },
    /// Write a default configuration file.
    InitConfig {
        /// Destination; defaults to the user config directory.
        path: Option<PathBuf>,
    },
}
