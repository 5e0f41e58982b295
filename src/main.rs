mod cli;

use std::process;

use anyhow::{Context, Result};
use chrono::{Local, Utc};
use clap::Parser;
use serde::Serialize;
use timeline_slider::config::Config;
use timeline_slider::utils::date::Direction;
use timeline_slider::{
    calendar_to_list, format_date, logger, month_grid, month_range, recent_days, relative_time, year_grid_with_start,
    year_positions, DateInput,
};

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("❌ Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };
    logger::init(&config.logging, cli.verbose)?;

    match cli.command {
        Command::Format { date, pattern } => {
            let pattern = pattern.unwrap_or_else(|| config.display.pattern.clone());
            let input = match date.parse::<i64>() {
                Ok(millis) => DateInput::Timestamp(millis),
                Err(_) => DateInput::Text(date),
            };
            println!("{}", format_date(&input, Some(&pattern))?);
        }
        Command::Recent { count, before } => {
            let direction = if before { Direction::Before } else { Direction::Forward };
            print_json(&recent_days(count, direction, Local::now().date_naive())?)?;
        }
        Command::Calendar { year, month, monday } => {
            let monday = monday || config.display.week_starts_monday;
            match month {
                Some(month) => print_json(&month_grid(year, month, monday))?,
                None => print_json(&year_grid_with_start(year, monday))?,
            }
        }
        Command::List { year, month } => print_json(&calendar_to_list(year, month))?,
        Command::Positions { year, marks } => print_json(&year_positions(year, marks.as_slice()))?,
        Command::Relative { datetime } => {
            let offset = config.relative.offset()?;
            println!("{}", relative_time(&datetime, Utc::now(), offset)?);
        }
        Command::Range { year, month } => print_json(&month_range(year, month))?,
        Command::InitConfig { path } => {
            let path = match path {
                Some(path) => path,
                None => Config::get_default_config_path()?,
            };
            Config::generate_default_config(path)?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}
