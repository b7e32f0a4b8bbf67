//! Julian Day Number newtype, the calendar-agnostic pivot.

use std::ops::{Add, Sub};

/// JDN of the Unix epoch, Gregorian January 1, 1970.
pub const UNIX_EPOCH_JDN: i64 = 2_440_588;

/// A Julian Day Number: a continuous integer day count with no calendar
/// identity of its own.
///
/// The stored value is the integer (noon-based) day number; fractional
/// intermediates from the Gregorian closed form are resolved before a
/// `Jdn` is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Jdn(i64);

impl Jdn {
    /// Wraps a raw day count.
    pub fn new(jdn: i64) -> Self {
        Self(jdn)
    }

    /// Returns the inner day count.
    pub fn get(self) -> i64 {
        self.0
    }

    /// Returns the day of week, 0 = Monday .. 6 = Sunday.
    ///
    /// `rem_euclid` keeps the mapping correct for negative day counts
    /// (proleptic dates before the JDN epoch).
    pub fn weekday(self) -> u8 {
        self.0.rem_euclid(7) as u8
    }
}

impl Add<i64> for Jdn {
    type Output = Jdn;
    fn add(self, days: i64) -> Jdn {
        Jdn(self.0 + days)
    }
}

impl Sub<i64> for Jdn {
    type Output = Jdn;
    fn sub(self, days: i64) -> Jdn {
        Jdn(self.0 - days)
    }
}

impl Sub<Jdn> for Jdn {
    type Output = i64;
    fn sub(self, other: Jdn) -> i64 {
        self.0 - other.0
    }
}
