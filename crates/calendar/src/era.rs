//! Ethiopic era epochs and shared cycle constants.

/// JDN of the day before Meskerem 1, year 1 Amete Mihret ("year of mercy").
pub const JD_EPOCH_OFFSET_AMETE_MIHRET: i64 = 1_723_856;

/// JDN of the day before Meskerem 1, year 1 Amete Alem ("year of the world").
///
/// Amete Alem counts from the traditional creation date, 5500 years before
/// Amete Mihret: year `y` AM is year `y + 5500` AA for the same day.
pub const JD_EPOCH_OFFSET_AMETE_ALEM: i64 = -285_019;

/// JDN of the day before January 1, year 1 CE in the proleptic Gregorian
/// calendar. Kept for epoch cross-checks; the Gregorian transforms
/// themselves use the Meeus closed form and never reference it.
pub const JD_EPOCH_OFFSET_GREGORIAN: i64 = 1_721_426;

/// Days in one Ethiopic leap cycle: four years of 365 days plus one leap
/// day, with no century exception.
pub const ETHIOPIC_CYCLE_DAYS: i64 = 1461;

/// Ethiopic calendar era, selecting the JDN epoch displacement used by
/// [`crate::EthiopicDate::to_jdn`] and [`crate::EthiopicDate::from_jdn`].
///
/// The era is a parameter on both directions so the forward and inverse
/// transforms stay symmetric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Era {
    /// The incarnation era, in common use today.
    #[default]
    AmeteMihret,
    /// The "year of the world" era, 5500 years ahead of Amete Mihret.
    AmeteAlem,
}

impl Era {
    /// Returns the JDN epoch displacement for this era.
    pub fn epoch(self) -> i64 {
        match self {
            Era::AmeteMihret => JD_EPOCH_OFFSET_AMETE_MIHRET,
            Era::AmeteAlem => JD_EPOCH_OFFSET_AMETE_ALEM,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_amete_mihret() {
        assert_eq!(Era::default(), Era::AmeteMihret);
    }

    #[test]
    fn epoch_values() {
        assert_eq!(Era::AmeteMihret.epoch(), 1_723_856);
        assert_eq!(Era::AmeteAlem.epoch(), -285_019);
    }

    #[test]
    fn amete_mihret_to_gregorian_epoch_offset() {
        // The fixed displacement between the two calendar epochs.
        assert_eq!(
            JD_EPOCH_OFFSET_AMETE_MIHRET - JD_EPOCH_OFFSET_GREGORIAN,
            2430
        );
    }

    #[test]
    fn era_gap_is_5500_years() {
        // 5500 Ethiopic years = 5500 * 365 days + 1375 leap days.
        assert_eq!(
            JD_EPOCH_OFFSET_AMETE_MIHRET - JD_EPOCH_OFFSET_AMETE_ALEM,
            5500 * 365 + 5500 / 4
        );
    }
}
