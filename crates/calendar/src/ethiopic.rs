//! Ethiopic dates and the Ethiopic <-> JDN transforms.

use crate::era::{ETHIOPIC_CYCLE_DAYS, Era};
use crate::error::CalendarError;
use crate::jdn::Jdn;

/// A date in the Ethiopic calendar: 12 months of 30 days followed by
/// Pagume, a 13th month of 5 days (6 in leap years).
///
/// Field order gives chronological ordering for the derived `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EthiopicDate {
    year: i32,
    month: u8,
    day: u8,
}

/// Returns true if the given Ethiopic year has a 6th day of Pagume.
///
/// The Ethiopic leap rule is a plain 4-year cycle with no century
/// exception: years congruent to 3 mod 4 are leap.
pub fn is_leap_year(year: i32) -> bool {
    year.rem_euclid(4) == 3
}

/// Returns the number of days in the given month of the given year.
///
/// Months 1..=12 always have 30 days; month 13 (Pagume) has 5 or 6.
/// The year only matters for month 13. Out-of-range months fall back to
/// 30 so the permissive path stays total.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        13 => {
            if is_leap_year(year) {
                6
            } else {
                5
            }
        }
        _ => 30,
    }
}

impl EthiopicDate {
    /// Creates a validated Ethiopic date.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in
    /// 1..=13, or [`CalendarError::InvalidDay`] if `day` is out of range
    /// for the month (Pagume length depends on the leap year).
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(1..=13).contains(&month) {
            return Err(CalendarError::InvalidMonth { month, max: 13 });
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

    /// Creates an Ethiopic date without range checks.
    ///
    /// Out-of-range month/day values are not rejected; they pass through
    /// the conversion arithmetic and yield a mathematically derived
    /// result (month 14 day 1 lands 30 days after month 13 day 1).
    pub fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=13 for validated dates).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month.
    pub fn day(self) -> u8 {
        self.day
    }

    /// Converts this date to its Julian Day Number under the given era.
    ///
    /// Accumulates the era epoch, 365 days per elapsed year plus one per
    /// elapsed 4-year cycle, 30 days per elapsed month, and the elapsed
    /// days of the current month. `div_euclid` keeps the leap count
    /// flooring for years before the epoch.
    pub fn to_jdn(self, era: Era) -> Jdn {
        let year = i64::from(self.year);
        let month = i64::from(self.month);
        let day = i64::from(self.day);
        Jdn::new(
            era.epoch() + 365 + 365 * (year - 1) + year.div_euclid(4) + 30 * (month - 1) + day - 1,
        )
    }

    /// Converts a Julian Day Number to an Ethiopic date under the given
    /// era. Exact inverse of [`EthiopicDate::to_jdn`] for valid dates.
    pub fn from_jdn(jdn: Jdn, era: Era) -> Self {
        let rel = jdn.get() - era.epoch();
        let cycle = rel.div_euclid(ETHIOPIC_CYCLE_DAYS);
        let r = rel.rem_euclid(ETHIOPIC_CYCLE_DAYS);
        // r == 1460 is the cycle's leap day: Pagume 6 of the cycle's
        // last year. Without the r/1460 correction the plain division
        // by 365 would start year 4 one day early.
        let doy = r % 365 + 365 * (r / 1460);
        let year = 4 * cycle + r / 365 - r / 1460;
        Self {
            year: year as i32,
            month: (doy / 30 + 1) as u8,
            day: (doy % 30 + 1) as u8,
        }
    }

    /// Returns the day of week (0 = Monday .. 6 = Sunday) under the
    /// given era.
    pub fn weekday(self, era: Era) -> u8 {
        self.to_jdn(era).weekday()
    }

    /// Returns the next day, wrapping Pagume into Meskerem 1 of the
    /// following year.
    pub fn next(self) -> Self {
        if self.day < days_in_month(self.year, self.month) {
            Self {
                day: self.day + 1,
                ..self
            }
        } else if self.month < 13 {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        let date = EthiopicDate::new(2016, 4, 22).unwrap();
        assert_eq!(date.year(), 2016);
        assert_eq!(date.month(), 4);
        assert_eq!(date.day(), 22);
    }

    #[test]
    fn new_invalid_month_zero() {
        assert_eq!(
            EthiopicDate::new(2016, 0, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 0, max: 13 }
        );
    }

    #[test]
    fn new_invalid_month_14() {
        assert_eq!(
            EthiopicDate::new(2016, 14, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 14, max: 13 }
        );
    }

    #[test]
    fn new_day_31_rejected() {
        assert_eq!(
            EthiopicDate::new(2016, 1, 31).unwrap_err(),
            CalendarError::InvalidDay {
                day: 31,
                month: 1,
                max_day: 30,
            }
        );
    }

    #[test]
    fn pagume_6_only_in_leap_years() {
        // 2015 % 4 == 3: leap, Pagume has 6 days.
        assert!(EthiopicDate::new(2015, 13, 6).is_ok());
        // 2016 is not leap.
        assert_eq!(
            EthiopicDate::new(2016, 13, 6).unwrap_err(),
            CalendarError::InvalidDay {
                day: 6,
                month: 13,
                max_day: 5,
            }
        );
    }

    #[test]
    fn leap_cycle_rule() {
        for year in 1..=20 {
            assert_eq!(is_leap_year(year), year % 4 == 3, "year {year}");
        }
        assert!(is_leap_year(-1));
        assert!(!is_leap_year(0));
    }

    #[test]
    fn days_in_month_table() {
        for month in 1..=12 {
            assert_eq!(days_in_month(2016, month), 30);
        }
        assert_eq!(days_in_month(2015, 13), 6);
        assert_eq!(days_in_month(2016, 13), 5);
    }

    #[test]
    fn epoch_day_one() {
        let jdn = EthiopicDate::new(1, 1, 1).unwrap().to_jdn(Era::AmeteMihret);
        assert_eq!(jdn.get(), 1_724_221);
    }

    #[test]
    fn from_jdn_epoch_day_one() {
        let date = EthiopicDate::from_jdn(Jdn::new(1_724_221), Era::AmeteMihret);
        assert_eq!(date, EthiopicDate::new(1, 1, 1).unwrap());
    }

    #[test]
    fn from_jdn_cycle_leap_day() {
        // Years 1 and 2 have 365 days, year 3 is leap with 366; the last
        // day of the first cycle is Pagume 6 of year 3.
        let epoch = EthiopicDate::new(1, 1, 1).unwrap().to_jdn(Era::AmeteMihret);
        let date = EthiopicDate::from_jdn(epoch + 1095, Era::AmeteMihret);
        assert_eq!(date, EthiopicDate::new(3, 13, 6).unwrap());
        let date = EthiopicDate::from_jdn(epoch + 1096, Era::AmeteMihret);
        assert_eq!(date, EthiopicDate::new(4, 1, 1).unwrap());
    }

    #[test]
    fn amete_alem_same_day() {
        let am = EthiopicDate::new(2016, 1, 1).unwrap().to_jdn(Era::AmeteMihret);
        let aa = EthiopicDate::new(7516, 1, 1).unwrap().to_jdn(Era::AmeteAlem);
        assert_eq!(am, aa);
    }

    #[test]
    fn permissive_month_14_is_30_days_after_month_13() {
        let era = Era::AmeteMihret;
        let m13 = EthiopicDate::new_unchecked(2016, 13, 1).to_jdn(era);
        let m14 = EthiopicDate::new_unchecked(2016, 14, 1).to_jdn(era);
        assert_eq!(m14 - m13, 30);
    }

    #[test]
    fn next_within_month() {
        let date = EthiopicDate::new(2016, 1, 15).unwrap();
        assert_eq!(date.next(), EthiopicDate::new(2016, 1, 16).unwrap());
    }

    #[test]
    fn next_month_boundary() {
        let date = EthiopicDate::new(2016, 1, 30).unwrap();
        assert_eq!(date.next(), EthiopicDate::new(2016, 2, 1).unwrap());
    }

    #[test]
    fn next_year_wrap_non_leap() {
        let date = EthiopicDate::new(2016, 13, 5).unwrap();
        assert_eq!(date.next(), EthiopicDate::new(2017, 1, 1).unwrap());
    }

    #[test]
    fn next_year_wrap_leap() {
        let date = EthiopicDate::new(2015, 13, 5).unwrap();
        assert_eq!(date.next(), EthiopicDate::new(2015, 13, 6).unwrap());
        assert_eq!(date.next().next(), EthiopicDate::new(2016, 1, 1).unwrap());
    }

    #[test]
    fn ord_chronological() {
        let a = EthiopicDate::new(2015, 13, 6).unwrap();
        let b = EthiopicDate::new(2016, 1, 1).unwrap();
        assert!(a < b);
    }

    #[test]
    fn copy_trait() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<EthiopicDate>();
    }
}
