//! Rainfall tables and the statistic queries built on them.
//!
//! A [`RainfallTable`] is the yearly series for one [`Period`] (whole year,
//! a month or a season) plus any derived columns added to it. The
//! [`RainfallQuery`] trait composes the aggregation, regression and normal
//! functions of `rainfall-data` over a table, validating year ranges first.
//! [`AllRainfall`] bundles one table per period.
//!
//! # Usage
//!
//! ```rust
//! use rainfall_core::period::Period;
//! use rainfall_core::year_range::YearRange;
//! use rainfall_model::{AllRainfall, RainfallQuery};
//!
//! let csv = "Year,Jan,Feb,Mar,Apr,May,Jun,Jul,Aug,Sep,Oct,Nov,Dec
//! 2000,100,0,0,0,0,0,0,0,0,0,0,0
//! 2001,200,0,0,0,0,0,0,0,0,0,0,0
//! 2002,300,0,0,0,0,0,0,0,0,0,0,0
//! ";
//! let all = AllRainfall::from_csv(csv, 2000, 2).unwrap();
//! let range = YearRange::new(2000, 2002).unwrap();
//!
//! let yearly = all.query(Period::Yearly);
//! assert_eq!(yearly.average(range).unwrap(), 200.0);
//! assert_eq!(yearly.standard_deviation(range, false).unwrap(), 81.65);
//! ```

mod all_rainfall;
mod columns;
mod export;
mod granularity;
mod loader;
pub mod models;
mod queries;

pub use all_rainfall::AllRainfall;
pub use granularity::{MonthlyRainfall, SeasonalRainfall, YearlyRainfall};
pub use queries::RainfallQuery;

use rainfall_core::dataset::YearValue;
use rainfall_core::error::{RainfallError, Result};
use rainfall_core::label::Label;
use rainfall_core::period::Period;
use rainfall_core::year_range::YearRange;
use std::collections::BTreeMap;

/// Yearly rainfall of one period, with optional derived columns.
///
/// Rows are sorted by year and years are unique. Derived columns hold one
/// value per row, in row order.
#[derive(Debug, Clone, PartialEq)]
pub struct RainfallTable {
    period: Period,
    round_precision: u32,
    rows: Vec<YearValue>,
    columns: BTreeMap<Label, Vec<f64>>,
}

impl RainfallTable {
    /// Build a table from rows in any order.
    ///
    /// Fails on an empty input, duplicate years or negative rainfall.
    pub(crate) fn new(period: Period, mut rows: Vec<YearValue>, round_precision: u32) -> Result<Self> {
        if rows.is_empty() {
            return Err(RainfallError::DataFormat(format!(
                "no {} rainfall rows to load",
                period.label()
            )));
        }
        rows.sort_by_key(|row| row.year);
        if let Some(pair) = rows.windows(2).find(|pair| pair[0].year == pair[1].year) {
            return Err(RainfallError::DataFormat(format!(
                "duplicate year {}",
                pair[0].year
            )));
        }
        if let Some(row) = rows.iter().find(|row| !row.value.is_finite() || row.value < 0.0) {
            return Err(RainfallError::DataFormat(format!(
                "year {}: rainfall must be a non-negative number, got {}",
                row.year, row.value
            )));
        }
        Ok(Self {
            period,
            round_precision,
            rows,
            columns: BTreeMap::new(),
        })
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn round_precision(&self) -> u32 {
        self.round_precision
    }

    pub fn rows(&self) -> &[YearValue] {
        &self.rows
    }

    pub fn first_year(&self) -> i32 {
        self.rows[0].year
    }

    pub fn last_year(&self) -> i32 {
        self.rows[self.rows.len() - 1].year
    }

    /// Rows whose year falls inside `range`.
    pub fn rows_within(&self, range: YearRange) -> Vec<YearValue> {
        self.rows
            .iter()
            .filter(|row| range.contains(row.year))
            .copied()
            .collect()
    }

    /// Check that `range` lies inside the table's years.
    pub fn validate(&self, range: YearRange) -> Result<YearRange> {
        range.within(self.first_year(), self.last_year())
    }

    /// Values of a derived column, `None` if it was never added.
    pub fn column(&self, label: Label) -> Option<&[f64]> {
        self.columns.get(&label).map(Vec::as_slice)
    }

    /// Labels of every column currently present, base columns first.
    pub fn labels(&self) -> Vec<Label> {
        let mut labels = vec![Label::Year, Label::Rainfall];
        labels.extend(self.columns.keys().copied());
        labels
    }

    fn round(&self, value: f64) -> f64 {
        rainfall_core::round_to(value, self.round_precision)
    }
}
