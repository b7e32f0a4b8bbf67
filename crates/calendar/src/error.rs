//! Error types for the zemen-calendar crate.

/// Error type for the strict (validating) date constructors.
///
/// The conversion arithmetic itself is total and never fails; these
/// errors are only produced by [`crate::EthiopicDate::new`] and
/// [`crate::GregorianDate::new`] before any arithmetic runs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the calendar's range
    /// (1..=13 Ethiopic, 1..=12 Gregorian).
    #[error("invalid month: {month} (must be 1..={max})")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
        /// The largest valid month number for the calendar.
        max: u8,
    },

    /// Returned when a day number exceeds the number of days in the given
    /// month of the given year.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_month() {
        let err = CalendarError::InvalidMonth { month: 14, max: 13 };
        assert_eq!(err.to_string(), "invalid month: 14 (must be 1..=13)");
    }

    #[test]
    fn error_invalid_day() {
        let err = CalendarError::InvalidDay {
            day: 7,
            month: 13,
            max_day: 6,
        };
        assert_eq!(err.to_string(), "invalid day: 7 for month 13 (max 6)");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_partial_eq() {
        let a = CalendarError::InvalidMonth { month: 0, max: 12 };
        let b = CalendarError::InvalidMonth { month: 0, max: 12 };
        assert_eq!(a, b);

        let c = CalendarError::InvalidMonth { month: 13, max: 12 };
        assert_ne!(a, c);
    }
}
