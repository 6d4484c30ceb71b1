//! JSON payloads printed by the scalar commands.

use rainfall_core::period::{Period, TimeMode};
use rainfall_core::season::Season;
use rainfall_core::year_range::YearRange;
use serde::Serialize;

/// A statistic is either a measurement or a number of years.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(untagged)]
pub enum StatisticValue {
    Rainfall(f64),
    Years(usize),
}

/// A statistic together with the parameters it was computed for.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RainfallResponse {
    pub name: String,
    pub value: StatisticValue,
    pub begin_year: i32,
    pub end_year: i32,
    pub time_mode: TimeMode,
    pub month: Option<String>,
    pub season: Option<Season>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normal_year: Option<i32>,
}

impl RainfallResponse {
    pub fn new(name: &str, value: StatisticValue, period: Period, range: YearRange) -> Self {
        Self {
            name: name.to_string(),
            value,
            begin_year: range.begin,
            end_year: range.end,
            time_mode: period.time_mode(),
            month: period.month().map(|m| m.name().to_string()),
            season: period.season(),
            normal_year: None,
        }
    }

    pub fn with_normal_year(mut self, normal_year: i32) -> Self {
        self.normal_year = Some(normal_year);
        self
    }
}
