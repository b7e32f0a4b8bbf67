//! Gregorian dates and the Gregorian <-> JDN transforms (Meeus closed
//! form, proleptic in both directions).

use crate::error::CalendarError;
use crate::jdn::Jdn;

/// Days in each month, index 1..=12; February handled separately.
const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A date in the proleptic Gregorian calendar.
///
/// Field order gives chronological ordering for the derived `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianDate {
    year: i32,
    month: u8,
    day: u8,
}

/// Returns true if the given Gregorian year is a leap year: divisible by
/// 4, except centuries not divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
}

/// Returns the number of days in the given month of the given year.
///
/// Out-of-range months fall back to 30 so the permissive path stays
/// total.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        1..=12 => DAYS_PER_MONTH[month as usize],
        _ => 30,
    }
}

impl GregorianDate {
    /// Creates a validated Gregorian date.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in
    /// 1..=12, or [`CalendarError::InvalidDay`] if `day` is out of range
    /// for the month (February length depends on the leap year).
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month, max: 12 });
        }
        let max_day = days_in_month(year, month);
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Creates a Gregorian date without range checks.
    ///
    /// Out-of-range month/day values are not rejected; they pass through
    /// the conversion arithmetic and yield a mathematically derived
    /// result.
    pub fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Returns the year (astronomical numbering: 1 BCE is year 0).
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12 for validated dates).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month.
    pub fn day(self) -> u8 {
        self.day
    }

    /// Converts this date to its Julian Day Number.
    ///
    /// January and February are folded to months 13/14 of the prior year
    /// so every leap day sits at the end of the adjusted year, then the
    /// standard closed form applies with the Gregorian century
    /// correction. Valid proleptically for any year.
    pub fn to_jdn(self) -> Jdn {
        let (y, m) = if self.month <= 2 {
            (i64::from(self.year) - 1, i64::from(self.month) + 12)
        } else {
            (i64::from(self.year), i64::from(self.month))
        };
        let a = (y as f64 / 100.0).floor();
        let b = 2.0 - a + (a / 4.0).floor();
        let jd = (365.25 * (y as f64 + 4716.0)).floor()
            + (30.6001 * (m as f64 + 1.0)).floor()
            + f64::from(self.day)
            + b
            - 1524.5;
        // jd is the half-integer midnight value; the stored JDN is the
        // noon-based integer.
        Jdn::new((jd + 0.5) as i64)
    }

    /// Converts a Julian Day Number to a Gregorian date. Exact inverse
    /// of [`GregorianDate::to_jdn`] for valid dates.
    pub fn from_jdn(jdn: Jdn) -> Self {
        let z = jdn.get();
        // Century correction: add back the leap days the Gregorian rule
        // removes, except in years divisible by 400.
        let alpha = ((z as f64 - 1_867_216.25) / 36_524.25).floor() as i64;
        let a = z + 1 + alpha - alpha.div_euclid(4);
        let b = a + 1524;
        let c = ((b as f64 - 122.1) / 365.25).floor() as i64;
        let d = (365.25 * c as f64).floor() as i64;
        let e = ((b - d) as f64 / 30.6001).floor() as i64;
        let day = b - d - (30.6001 * e as f64).floor() as i64;
        let month = if e < 14 { e - 1 } else { e - 13 };
        let year = if month > 2 { c - 4716 } else { c - 4715 };
        Self {
            year: year as i32,
            month: month as u8,
            day: day as u8,
        }
    }

    /// Returns the day of week, 0 = Monday .. 6 = Sunday.
    pub fn weekday(self) -> u8 {
        self.to_jdn().weekday()
    }

    /// Returns the next day, wrapping December 31 into January 1 of the
    /// following year.
    pub fn next(self) -> Self {
        if self.day < days_in_month(self.year, self.month) {
            Self {
                day: self.day + 1,
                ..self
            }
        } else if self.month < 12 {
            Self {
                year: self.year,
                month: self.month + 1,
                day: 1,
            }
        } else {
            Self {
                year: self.year + 1,
                month: 1,
                day: 1,
            }
        }
    }
}
