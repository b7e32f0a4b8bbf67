//! Cross-calendar composition through the JDN pivot.

use crate::era::Era;
use crate::ethiopic::EthiopicDate;
use crate::gregorian::GregorianDate;

/// Converts an Ethiopic date (Amete Mihret) to the proleptic Gregorian
/// calendar.
pub fn eth_to_greg(date: EthiopicDate) -> GregorianDate {
    GregorianDate::from_jdn(date.to_jdn(Era::AmeteMihret))
}

/// Converts a proleptic Gregorian date to the Ethiopic calendar
/// (Amete Mihret).
pub fn greg_to_eth(date: GregorianDate) -> EthiopicDate {
    EthiopicDate::from_jdn(date.to_jdn(), Era::AmeteMihret)
}
