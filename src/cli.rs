use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use dreamspell_calendar::GregorianDate;

/// Dreamspell 13-Moon calendar converter.
#[derive(Parser)]
#[command(
    name = "dreamspell",
    version,
    about = "13-Moon calendar and 260-day kin count converter"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML preference file.
    #[arg(short, long, global = true, default_value = "dreamspell.toml")]
    pub config: PathBuf,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Show the full reading for a date.
    Show(ShowArgs),
    /// Show just the galactic signature for a date (birth-kin lookup).
    Kin(KinArgs),
    /// List the moon start dates of a 13-Moon year.
    Year(YearArgs),
}

/// Arguments for the `show` subcommand.
#[derive(clap::Args)]
pub struct ShowArgs {
    /// Date to convert, YYYY-MM-DD. Defaults to today.
    #[arg(value_parser = parse_cli_date)]
    pub date: Option<GregorianDate>,

    /// Also print an oracle reading for the date.
    #[arg(long)]
    pub oracle: bool,

    /// Free-text intention passed to the oracle.
    #[arg(long, requires = "oracle")]
    pub intention: Option<String>,
}

/// Arguments for the `kin` subcommand.
#[derive(clap::Args)]
pub struct KinArgs {
    /// Date to convert, YYYY-MM-DD. Defaults to the configured birthday.
    #[arg(value_parser = parse_cli_date)]
    pub date: Option<GregorianDate>,
}

/// Arguments for the `year` subcommand.
#[derive(clap::Args)]
pub struct YearArgs {
    /// Gregorian year anchoring the cycle (its July 26). Defaults to the
    /// cycle containing today.
    pub year: Option<i32>,
}

/// Parses a `YYYY-MM-DD` string into a [`GregorianDate`].
pub fn parse_cli_date(s: &str) -> Result<GregorianDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(GregorianDate::from)
        .map_err(|e| format!("invalid date {s:?} (expected YYYY-MM-DD): {e}"))
}
