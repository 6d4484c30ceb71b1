//! Per month and per season series, printed as JSON arrays.

use crate::statistics::to_json;
use rainfall_core::period::TimeMode;
use rainfall_core::year_range::YearRange;
use rainfall_model::AllRainfall;

pub fn averages(all: &AllRainfall, time_mode: TimeMode, range: YearRange) -> anyhow::Result<String> {
    to_json(&all.averages(time_mode, range)?)
}

pub fn linreg_slopes(
    all: &AllRainfall,
    time_mode: TimeMode,
    range: YearRange,
) -> anyhow::Result<String> {
    to_json(&all.linreg_slopes(time_mode, range)?)
}

pub fn relative_distances(
    all: &AllRainfall,
    time_mode: TimeMode,
    normal_year: i32,
    range: YearRange,
) -> anyhow::Result<String> {
    to_json(&all.relative_distances_to_normal(time_mode, normal_year, range)?)
}
