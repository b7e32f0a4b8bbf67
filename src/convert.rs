//! Pure conversion helpers: CLI/TOML values -> crate API types.

use anyhow::{Context, Result, bail};

use zemen_calendar::{Era, EthiopicDate, GregorianDate};
use zemen_locale::{AMHARIC, ENGLISH, Locale};

/// Parses an era name string into the corresponding enum variant.
pub fn parse_era(s: &str) -> Result<Era> {
    match s.to_lowercase().as_str() {
        "amete-mihret" | "am" => Ok(Era::AmeteMihret),
        "amete-alem" | "aa" => Ok(Era::AmeteAlem),
        other => bail!("unknown era: {other:?} (expected amete-mihret or amete-alem)"),
    }
}

/// Parses a locale name string into the corresponding name tables.
pub fn parse_locale(s: &str) -> Result<&'static Locale> {
    match s.to_lowercase().as_str() {
        "am" | "amharic" => Ok(&AMHARIC),
        "en" | "english" => Ok(&ENGLISH),
        other => bail!("unknown locale: {other:?} (expected am or en)"),
    }
}

/// Splits positional `YEAR [MONTH [DAY]]` arguments, defaulting month
/// and day to 1 as the library's callers traditionally do.
fn split_ymd(date: &[i32]) -> Result<(i32, u8, u8)> {
    let year = *date.first().context("missing year argument")?;
    let month = date.get(1).copied().unwrap_or(1);
    let day = date.get(2).copied().unwrap_or(1);
    let month = u8::try_from(month).with_context(|| format!("month does not fit: {month}"))?;
    let day = u8::try_from(day).with_context(|| format!("day does not fit: {day}"))?;
    Ok((year, month, day))
}

/// Builds an Ethiopic date from positional arguments.
///
/// With `strict`, out-of-range month/day values are rejected; otherwise
/// they pass through the arithmetic unchecked.
pub fn ethiopic_from_args(date: &[i32], strict: bool) -> Result<EthiopicDate> {
    let (year, month, day) = split_ymd(date)?;
    if strict {
        EthiopicDate::new(year, month, day).context("invalid Ethiopian date")
    } else {
        Ok(EthiopicDate::new_unchecked(year, month, day))
    }
}

/// Builds a Gregorian date from positional arguments, or `None` when no
/// arguments were given (the caller substitutes the current date).
pub fn gregorian_from_args(date: &[i32], strict: bool) -> Result<Option<GregorianDate>> {
    if date.is_empty() {
        return Ok(None);
    }
    let (year, month, day) = split_ymd(date)?;
    let date = if strict {
        GregorianDate::new(year, month, day).context("invalid Gregorian date")?
    } else {
        GregorianDate::new_unchecked(year, month, day)
    };
    Ok(Some(date))
}
