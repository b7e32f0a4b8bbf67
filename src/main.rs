mod cli;
mod config;
mod convert;
mod format_cmd;
mod logging;
mod to_ethiopic;
mod to_gregorian;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::ToEthiopic(args) => to_ethiopic::run(args),
        Command::ToGregorian(args) => to_gregorian::run(args),
        Command::Format(args) => format_cmd::run(args),
    }
}
