//! Aggregation granularity: whole year, single month or season.

use crate::error::{RainfallError, Result};
use crate::month::Month;
use crate::season::Season;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which sub-aggregation narrows the monthly data before summing a year value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeMode {
    Yearly,
    Monthly,
    Seasonal,
}

impl TimeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeMode::Yearly => "yearly",
            TimeMode::Monthly => "monthly",
            TimeMode::Seasonal => "seasonal",
        }
    }
}

impl fmt::Display for TimeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeMode {
    type Err = RainfallError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yearly" => Ok(TimeMode::Yearly),
            "monthly" => Ok(TimeMode::Monthly),
            "seasonal" => Ok(TimeMode::Seasonal),
            _ => Err(RainfallError::UnknownName {
                kind: "time mode",
                name: s.to_string(),
            }),
        }
    }
}

/// A time mode together with its month or season selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    Yearly,
    Monthly(Month),
    Seasonal(Season),
}

impl Period {
    /// Combine a time mode with optional selectors.
    ///
    /// Selectors that do not belong to the time mode are ignored.
    pub fn from_parts(
        time_mode: TimeMode,
        month: Option<Month>,
        season: Option<Season>,
    ) -> Result<Self> {
        match time_mode {
            TimeMode::Yearly => Ok(Period::Yearly),
            TimeMode::Monthly => month.map(Period::Monthly).ok_or(RainfallError::MissingMonth),
            TimeMode::Seasonal => season
                .map(Period::Seasonal)
                .ok_or(RainfallError::MissingSeason),
        }
    }

    pub fn time_mode(&self) -> TimeMode {
        match self {
            Period::Yearly => TimeMode::Yearly,
            Period::Monthly(_) => TimeMode::Monthly,
            Period::Seasonal(_) => TimeMode::Seasonal,
        }
    }

    pub fn month(&self) -> Option<Month> {
        match self {
            Period::Monthly(month) => Some(*month),
            _ => None,
        }
    }

    pub fn season(&self) -> Option<Season> {
        match self {
            Period::Seasonal(season) => Some(*season),
            _ => None,
        }
    }

    /// First and last month summed into each year value.
    ///
    /// The last month may precede the first one, in which case the span wraps
    /// around the end of the calendar year.
    pub fn month_span(&self) -> (Month, Month) {
        match self {
            Period::Yearly => (Month::January, Month::December),
            Period::Monthly(month) => (*month, *month),
            Period::Seasonal(season) => {
                let months = season.months();
                (months[0], months[2])
            }
        }
    }

    /// Short human readable name, used for series labels.
    pub fn label(&self) -> String {
        match self {
            Period::Yearly => TimeMode::Yearly.to_string(),
            Period::Monthly(month) => month.name().to_string(),
            Period::Seasonal(season) => season.to_string(),
        }
    }
}
