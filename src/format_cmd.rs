//! format command: full localized Ethiopian date line.

use anyhow::Result;
use tracing::{info, info_span};

use zemen_locale::{full_date_from_gregorian, full_ethiopic_date};

use crate::cli::FormatArgs;
use crate::config;
use crate::convert;

/// Run the date formatter.
pub fn run(args: FormatArgs) -> Result<()> {
    let _cmd = info_span!("format").entered();
    let config = config::load(args.config.as_deref())?;

    let locale = convert::parse_locale(args.locale.as_deref().unwrap_or(&config.format.locale))?;
    let era = convert::parse_era(args.era.as_deref().unwrap_or(&config.format.era))?;
    let strict = config.convert.strict;

    let line = if args.gregorian {
        let greg = convert::gregorian_from_args(&args.date, strict)?
            .expect("clap enforces at least the year argument");
        info!(
            year = greg.year(),
            month = greg.month(),
            day = greg.day(),
            "formatting from Gregorian date"
        );
        full_date_from_gregorian(greg, locale)
    } else {
        let eth = convert::ethiopic_from_args(&args.date, strict)?;
        info!(
            year = eth.year(),
            month = eth.month(),
            day = eth.day(),
            "formatting Ethiopian date"
        );
        full_ethiopic_date(eth, era, locale)
    };

    println!("{line}");
    Ok(())
}
