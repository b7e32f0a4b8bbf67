//! to-gregorian command: Ethiopian -> Gregorian conversion.

use anyhow::Result;
use tracing::{info, info_span};

use zemen_calendar::GregorianDate;

use crate::cli::ToGregorianArgs;
use crate::config;
use crate::convert;

/// Run the Ethiopian-to-Gregorian conversion.
pub fn run(args: ToGregorianArgs) -> Result<()> {
    let _cmd = info_span!("to_gregorian").entered();
    let config = config::load(args.config.as_deref())?;

    let era = convert::parse_era(args.era.as_deref().unwrap_or(&config.format.era))?;
    let eth = convert::ethiopic_from_args(&args.date, config.convert.strict)?;
    info!(
        year = eth.year(),
        month = eth.month(),
        day = eth.day(),
        ?era,
        "converting Ethiopian date"
    );

    let greg = GregorianDate::from_jdn(eth.to_jdn(era));
    println!("{}-{:02}-{:02}", greg.year(), greg.month(), greg.day());
    Ok(())
}
