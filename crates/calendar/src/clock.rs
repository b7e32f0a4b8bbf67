//! Injectable time source for the "use current date" default.
//!
//! The conversion arithmetic never reads the clock; callers that want a
//! today-default go through [`Clock`] so tests can substitute a fixed
//! date.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::convert::greg_to_eth;
use crate::ethiopic::EthiopicDate;
use crate::gregorian::GregorianDate;
use crate::jdn::{Jdn, UNIX_EPOCH_JDN};

/// Source of the current calendar date.
pub trait Clock {
    /// Returns the current date in the Gregorian calendar.
    fn today(&self) -> GregorianDate;
}

/// [`Clock`] backed by the system clock.
///
/// Whole days since the Unix epoch are bridged onto the JDN scale; the
/// date is derived in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> GregorianDate {
        let days = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => (elapsed.as_secs() / 86_400) as i64,
            // Clock set before 1970: round toward the previous midnight.
            Err(e) => -(e.duration().as_secs().div_ceil(86_400) as i64),
        };
        GregorianDate::from_jdn(Jdn::new(UNIX_EPOCH_JDN + days))
    }
}

/// [`Clock`] returning a fixed date, for tests and reproducible runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub GregorianDate);

impl Clock for FixedClock {
    fn today(&self) -> GregorianDate {
        self.0
    }
}

/// Returns the current date in the Gregorian calendar.
pub fn today_gregorian(clock: &impl Clock) -> GregorianDate {
    clock.today()
}

/// Returns the current date in the Ethiopic calendar (Amete Mihret).
pub fn today_ethiopic(clock: &impl Clock) -> EthiopicDate {
    greg_to_eth(clock.today())
}
