//! Human-readable Ethiopic date lines.
//!
//! Thin formatting glue over the conversion core: weekday via the JDN,
//! names via the injected [`Locale`] tables.

use zemen_calendar::{Era, EthiopicDate, GregorianDate, greg_to_eth};

use crate::names::Locale;

/// Formats an Ethiopic date as a full localized line, e.g.
/// `ሰኞ፣ ታኅሣሥ 22 ቀን 2016 ዓ/ም`.
///
/// Out-of-range month values from a permissive date fall back to the
/// numeric month so formatting stays total like the arithmetic.
pub fn full_ethiopic_date(date: EthiopicDate, era: Era, locale: &Locale) -> String {
    let weekday = date.weekday(era) as usize;
    let day_name = locale
        .day_name(weekday)
        .expect("weekday is always 0..=6");
    let month = (date.month() as usize)
        .checked_sub(1)
        .and_then(|i| locale.month_name(i))
        .map_or_else(|| date.month().to_string(), str::to_string);
    format!(
        "{day_name}{} {month} {}{} {} {}",
        locale.separator,
        date.day(),
        locale.day_marker,
        date.year(),
        locale.era_suffix(era)
    )
}

/// Converts a Gregorian date to the Ethiopic calendar (Amete Mihret) and
/// formats it as a full localized line.
pub fn full_date_from_gregorian(date: GregorianDate, locale: &Locale) -> String {
    full_ethiopic_date(greg_to_eth(date), Era::AmeteMihret, locale)
}
