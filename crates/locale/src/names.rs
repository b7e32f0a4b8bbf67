//! Locale name tables as injected read-only data.
//!
//! The arithmetic core never touches these tables; formatting receives a
//! [`Locale`] by reference, so alternative locales can be supplied
//! without touching the conversions.

use zemen_calendar::Era;

/// Read-only name tables and glue glyphs for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    /// Weekday names, Monday-first, matching `Jdn::weekday` numbering.
    pub day_names: [&'static str; 7],
    /// Ethiopic month names, Meskerem through Pagume.
    pub month_names: [&'static str; 13],
    /// Separator after the weekday name.
    pub separator: &'static str,
    /// Marker between the day number and the year ("ቀን" in Amharic).
    pub day_marker: &'static str,
    /// Era suffixes, indexed by [`Locale::era_suffix`].
    pub era_suffixes: [&'static str; 2],
}

impl Locale {
    /// Returns the weekday name for a Monday-first index, or `None` if
    /// the index is out of range.
    pub fn day_name(&self, index: usize) -> Option<&'static str> {
        self.day_names.get(index).copied()
    }

    /// Returns the Ethiopic month name for a 0-based index, or `None`
    /// if the index is out of range.
    pub fn month_name(&self, index: usize) -> Option<&'static str> {
        self.month_names.get(index).copied()
    }

    /// Returns the suffix glyphs for the given era.
    pub fn era_suffix(&self, era: Era) -> &'static str {
        match era {
            Era::AmeteMihret => self.era_suffixes[0],
            Era::AmeteAlem => self.era_suffixes[1],
        }
    }
}

/// Amharic names and glyphs.
pub const AMHARIC: Locale = Locale {
    day_names: ["ሰኞ", "ማክሰኞ", "ረቡዕ", "ሐሙስ", "ዓርብ", "ቅዳሜ", "እሑድ"],
    month_names: [
        "መስከረም",
        "ጥቅምት",
        "ኅዳር",
        "ታኅሣሥ",
        "ጥር",
        "የካቲት",
        "መጋቢት",
        "ሚያዝያ",
        "ግንቦት",
        "ሰኔ",
        "ሐምሌ",
        "ነሐሴ",
        "ጳጉሜን",
    ],
    separator: "፣",
    day_marker: " ቀን",
    era_suffixes: ["ዓ/ም", "ዓ/ዓ"],
};

/// English transliterations.
pub const ENGLISH: Locale = Locale {
    day_names: [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ],
    month_names: [
        "Meskerem", "Tikimt", "Hidar", "Tahsas", "Tir", "Yekatit", "Megabit", "Miazia", "Ginbot",
        "Sene", "Hamle", "Nehase", "Pagume",
    ],
    separator: ",",
    day_marker: "",
    era_suffixes: ["E.C.", "A.A."],
};
