use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a string is not one of the twelve month names
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown month name: {0:?}")]
pub struct MonthParseError(pub String);

/// Calendar month used to filter every dashboard request.
///
/// Serializes as the English month name ("January" … "December"), which is
/// also the value sent in the `month` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Month(chrono::Month);

impl Month {
    pub const JANUARY: Month = Month(chrono::Month::January);
    pub const FEBRUARY: Month = Month(chrono::Month::February);
    pub const MARCH: Month = Month(chrono::Month::March);
    pub const APRIL: Month = Month(chrono::Month::April);
    pub const MAY: Month = Month(chrono::Month::May);
    pub const JUNE: Month = Month(chrono::Month::June);
    pub const JULY: Month = Month(chrono::Month::July);
    pub const AUGUST: Month = Month(chrono::Month::August);
    pub const SEPTEMBER: Month = Month(chrono::Month::September);
    pub const OCTOBER: Month = Month(chrono::Month::October);
    pub const NOVEMBER: Month = Month(chrono::Month::November);
    pub const DECEMBER: Month = Month(chrono::Month::December);

    /// All months in calendar order, as listed in the month selector
    pub const ALL: [Month; 12] = [
        Self::JANUARY,
        Self::FEBRUARY,
        Self::MARCH,
        Self::APRIL,
        Self::MAY,
        Self::JUNE,
        Self::JULY,
        Self::AUGUST,
        Self::SEPTEMBER,
        Self::OCTOBER,
        Self::NOVEMBER,
        Self::DECEMBER,
    ];

    /// Full English name, e.g. "March"
    pub fn name(&self) -> &'static str {
        self.0.name()
    }
}

impl Default for Month {
    fn default() -> Self {
        Self::MARCH
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Month {
    type Err = MonthParseError;

    /// Accepts exactly the full month names, no abbreviations
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|month| month.name() == s)
            .ok_or_else(|| MonthParseError(s.to_string()))
    }
}

impl Serialize for Month {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Month {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
