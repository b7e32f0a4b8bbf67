//! # zemen-calendar
//!
//! Pure date arithmetic between the Ethiopic and proleptic Gregorian
//! calendars, using the Julian Day Number (JDN) as the calendar-agnostic
//! pivot (Beyene-Kudlek).
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["EthiopicDate"] -->|".to_jdn(era)"| J["Jdn"]
//!     J -->|"EthiopicDate::from_jdn"| A
//!     B["GregorianDate"] -->|".to_jdn()"| J
//!     J -->|"GregorianDate::from_jdn"| B
//!     A -->|"eth_to_greg()"| B
//!     B -->|"greg_to_eth()"| A
//!     C["Clock"] -->|"today_ethiopic()"| A
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use zemen_calendar::{EthiopicDate, GregorianDate, eth_to_greg, greg_to_eth};
//!
//! // The Ethiopian millennium
//! let eth = EthiopicDate::new(2000, 1, 1)?;
//! assert_eq!(eth_to_greg(eth), GregorianDate::new(2007, 9, 12)?);
//!
//! // ... and back
//! assert_eq!(greg_to_eth(eth_to_greg(eth)), eth);
//! ```
//!
//! All conversions are closed-form, total, and side-effect free; the only
//! I/O in the crate is the optional [`SystemClock`].
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `jdn` | Julian Day Number newtype and weekday |
//! | `era` | Ethiopic era epochs and cycle constants |
//! | `ethiopic` | Ethiopic date and Ethiopic <-> JDN transforms |
//! | `gregorian` | Gregorian date and Gregorian <-> JDN transforms |
//! | `convert` | Cross-calendar composition |
//! | `clock` | Injectable time source for today-defaults |
//! | `error` | Error types |

mod clock;
mod convert;
mod era;
mod error;
mod ethiopic;
mod gregorian;
mod jdn;

pub use clock::{Clock, FixedClock, SystemClock, today_ethiopic, today_gregorian};
pub use convert::{eth_to_greg, greg_to_eth};
pub use era::{
    ETHIOPIC_CYCLE_DAYS, Era, JD_EPOCH_OFFSET_AMETE_ALEM, JD_EPOCH_OFFSET_AMETE_MIHRET,
    JD_EPOCH_OFFSET_GREGORIAN,
};
pub use error::CalendarError;
pub use ethiopic::EthiopicDate;
pub use gregorian::GregorianDate;
pub use jdn::{Jdn, UNIX_EPOCH_JDN};

pub mod ethiopic_util {
    //! Free helpers on Ethiopic years, re-exported for callers that
    //! work outside a constructed date.
    pub use crate::ethiopic::{days_in_month, is_leap_year};
}

pub mod gregorian_util {
    //! Free helpers on Gregorian years.
    pub use crate::gregorian::{days_in_month, is_leap_year};
}
