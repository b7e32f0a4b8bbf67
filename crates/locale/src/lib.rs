//! # zemen-locale
//!
//! Localized weekday/month name tables and the full-date formatter for
//! the zemen workspace. The tables are plain value types handed to the
//! formatter by reference, so locales can be swapped without touching
//! the arithmetic core in `zemen-calendar`.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `names` | `Locale` tables (Amharic, English transliteration) |
//! | `fmt` | Full localized date line |

mod fmt;
mod names;

pub use fmt::{full_date_from_gregorian, full_ethiopic_date};
pub use names::{AMHARIC, ENGLISH, Locale};
