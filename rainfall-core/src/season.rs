//! Meteorological seasons, three months each.

use crate::error::{RainfallError, Result};
use crate::month::Month;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A three month season.
///
/// Winter of a given year is December, January and February taken from that
/// same year's dataset row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl Season {
    /// Every season, winter first.
    pub const ALL: [Season; 4] = [Season::Winter, Season::Spring, Season::Summer, Season::Fall];

    /// The season's months in chronological order.
    pub fn months(&self) -> [Month; 3] {
        match self {
            Season::Winter => [Month::December, Month::January, Month::February],
            Season::Spring => [Month::March, Month::April, Month::May],
            Season::Summer => [Month::June, Month::July, Month::August],
            Season::Fall => [Month::September, Month::October, Month::November],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Winter => "winter",
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Season {
    type Err = RainfallError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "winter" => Ok(Season::Winter),
            "spring" => Ok(Season::Spring),
            "summer" => Ok(Season::Summer),
            "fall" | "autumn" => Ok(Season::Fall),
            _ => Err(RainfallError::UnknownName {
                kind: "season",
                name: s.to_string(),
            }),
        }
    }
}
