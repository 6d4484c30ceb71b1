//! Scalar statistic commands, printed as [`RainfallResponse`] JSON.

use crate::response::{RainfallResponse, StatisticValue};
use rainfall_core::period::Period;
use rainfall_core::year_range::YearRange;
use rainfall_data::normal::normal_range;
use rainfall_model::AllRainfall;
use serde::Serialize;

pub fn average(all: &AllRainfall, period: Period, range: YearRange) -> anyhow::Result<String> {
    let value = all.query(period).average(range)?;
    to_json(&RainfallResponse::new(
        "rainfall average (mm)",
        StatisticValue::Rainfall(value),
        period,
        range,
    ))
}

pub fn normal(all: &AllRainfall, period: Period, begin_year: i32) -> anyhow::Result<String> {
    let value = all.query(period).normal(begin_year)?;
    to_json(&RainfallResponse::new(
        "rainfall normal (mm)",
        StatisticValue::Rainfall(value),
        period,
        normal_range(begin_year)?,
    ))
}

pub fn relative_distance(
    all: &AllRainfall,
    period: Period,
    range: YearRange,
    normal_year: i32,
) -> anyhow::Result<String> {
    let value = all
        .query(period)
        .relative_distance_to_normal(normal_year, range)?;
    to_json(
        &RainfallResponse::new(
            "relative distance to rainfall normal (%)",
            StatisticValue::Rainfall(value),
            period,
            range,
        )
        .with_normal_year(normal_year),
    )
}

pub fn standard_deviation(
    all: &AllRainfall,
    period: Period,
    range: YearRange,
    weigh_by_average: bool,
) -> anyhow::Result<String> {
    let value = all
        .query(period)
        .standard_deviation(range, weigh_by_average)?;
    let name = if weigh_by_average {
        "rainfall standard deviation weighted by average"
    } else {
        "rainfall standard deviation (mm)"
    };
    to_json(&RainfallResponse::new(
        name,
        StatisticValue::Rainfall(value),
        period,
        range,
    ))
}

pub fn years_below_normal(
    all: &AllRainfall,
    period: Period,
    range: YearRange,
    normal_year: i32,
) -> anyhow::Result<String> {
    let value = all.query(period).years_below_normal(normal_year, range)?;
    to_json(
        &RainfallResponse::new(
            "years below rainfall normal",
            StatisticValue::Years(value),
            period,
            range,
        )
        .with_normal_year(normal_year),
    )
}

pub fn years_above_normal(
    all: &AllRainfall,
    period: Period,
    range: YearRange,
    normal_year: i32,
) -> anyhow::Result<String> {
    let value = all.query(period).years_above_normal(normal_year, range)?;
    to_json(
        &RainfallResponse::new(
            "years above rainfall normal",
            StatisticValue::Years(value),
            period,
            range,
        )
        .with_normal_year(normal_year),
    )
}

/// Slope and R² of the regression line, fitted values left out.
#[derive(Debug, Serialize)]
struct RegressionResponse {
    #[serde(flatten)]
    slope: RainfallResponse,
    r2: f64,
}

pub fn linear_regression(
    all: &AllRainfall,
    period: Period,
    range: YearRange,
) -> anyhow::Result<String> {
    let summary = all.query(period).linear_regression(range)?;
    to_json(&RegressionResponse {
        slope: RainfallResponse::new(
            "rainfall linear regression slope (mm/year)",
            StatisticValue::Rainfall(summary.slope),
            period,
            range,
        ),
        r2: summary.r2,
    })
}

pub(crate) fn to_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
