//! to-ethiopic command: Gregorian -> Ethiopian conversion.

use anyhow::Result;
use tracing::{info, info_span};

use zemen_calendar::{SystemClock, greg_to_eth, today_gregorian};

use crate::cli::ToEthiopicArgs;
use crate::config;
use crate::convert;

/// Run the Gregorian-to-Ethiopian conversion.
pub fn run(args: ToEthiopicArgs) -> Result<()> {
    let _cmd = info_span!("to_ethiopic").entered();
    let config = config::load(args.config.as_deref())?;

    let greg = match convert::gregorian_from_args(&args.date, config.convert.strict)? {
        Some(date) => date,
        None => {
            info!("no date given, using the system clock");
            today_gregorian(&SystemClock)
        }
    };
    info!(
        year = greg.year(),
        month = greg.month(),
        day = greg.day(),
        "converting Gregorian date"
    );

    let eth = greg_to_eth(greg);
    println!("{}-{:02}-{:02}", eth.year(), eth.month(), eth.day());
    Ok(())
}
