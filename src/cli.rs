use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Zemen Ethiopian/Gregorian calendar converter.
#[derive(Parser)]
#[command(
    name = "zemen",
    version,
    about = "Convert dates between the Ethiopian and Gregorian calendars"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert a Gregorian date to the Ethiopian calendar.
    ToEthiopic(ToEthiopicArgs),
    /// Convert an Ethiopian date to the Gregorian calendar.
    ToGregorian(ToGregorianArgs),
    /// Print a full localized Ethiopian date line.
    Format(FormatArgs),
}

/// Arguments for the `to-ethiopic` subcommand.
#[derive(clap::Args)]
pub struct ToEthiopicArgs {
    /// Gregorian date as YEAR [MONTH [DAY]]; month and day default to 1.
    /// Omit entirely to convert today's date.
    #[arg(value_names = ["YEAR", "MONTH", "DAY"], num_args = 0..=3, allow_negative_numbers = true)]
    pub date: Vec<i32>,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `to-gregorian` subcommand.
#[derive(clap::Args)]
pub struct ToGregorianArgs {
    /// Ethiopian date as YEAR [MONTH [DAY]]; month and day default to 1.
    #[arg(value_names = ["YEAR", "MONTH", "DAY"], num_args = 1..=3, required = true, allow_negative_numbers = true)]
    pub date: Vec<i32>,

    /// Override the Ethiopic era from config (amete-mihret or amete-alem).
    #[arg(short, long)]
    pub era: Option<String>,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `format` subcommand.
#[derive(clap::Args)]
pub struct FormatArgs {
    /// Date as YEAR [MONTH [DAY]]; month and day default to 1.
    #[arg(value_names = ["YEAR", "MONTH", "DAY"], num_args = 1..=3, required = true, allow_negative_numbers = true)]
    pub date: Vec<i32>,

    /// Treat the input date as Gregorian instead of Ethiopian.
    #[arg(short, long)]
    pub gregorian: bool,

    /// Override the locale from config (am or en).
    #[arg(short, long)]
    pub locale: Option<String>,

    /// Override the Ethiopic era from config (amete-mihret or amete-alem).
    #[arg(short, long)]
    pub era: Option<String>,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
