//! Monthly rainfall dataset parsing.
//!
//! The dataset is a CSV file with a header row, one row per year, the year in
//! the first column and the twelve monthly rainfall depths (mm) after it:
//!
//! ```text
//! Any,Precip_Acum_Gener,Precip_Acum_Febrer,...,Precip_Acum_Desembre
//! 1786,32.8,28.4,84.4,42.3,8.5,38.0,6.8,52.1,62.0,57.0,195.2,38.4
//! ```
//!
//! Extra trailing columns are ignored.

use crate::error::{RainfallError, Result};
use crate::month::{month_column, Month};
use serde::Serialize;

/// Number of columns a dataset row must have: the year plus twelve months.
pub const CSV_ROW_LENGTH: usize = 13;

/// A single yearly value of a rainfall series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearValue {
    pub year: i32,
    pub value: f64,
}

/// Rainfall depths for every month of one year.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyRow {
    pub year: i32,
    pub months: [f64; 12],
}

impl MonthlyRow {
    pub fn rainfall(&self, month: Month) -> f64 {
        self.months[month_column(month) - 1]
    }

    /// Sum the months from `first` to `last` inclusive.
    ///
    /// When `last` precedes `first` the span wraps past December, still
    /// reading every month from this same row.
    pub fn span_total(&self, first: Month, last: Month) -> f64 {
        let first = month_column(first) - 1;
        let last = month_column(last) - 1;
        if first <= last {
            self.months[first..=last].iter().sum()
        } else {
            self.months[first..].iter().sum::<f64>() + self.months[..=last].iter().sum::<f64>()
        }
    }
}

/// The raw monthly table, sorted by year with unique years.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyDataset {
    rows: Vec<MonthlyRow>,
}

impl MonthlyDataset {
    /// Parse a dataset from CSV text.
    pub fn parse(csv_data: &str) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let mut rows = Vec::new();
        for (line, result) in rdr.records().enumerate() {
            let r = result?;
            if r.len() < CSV_ROW_LENGTH {
                return Err(RainfallError::DataFormat(format!(
                    "row {} has {} columns, expected at least {}",
                    line + 1,
                    r.len(),
                    CSV_ROW_LENGTH
                )));
            }
            let year_str = r.get(0).unwrap_or("").trim();
            let year: i32 = year_str.parse().map_err(|_| {
                RainfallError::DataFormat(format!("row {}: invalid year '{}'", line + 1, year_str))
            })?;

            let mut months = [0f64; 12];
            for (i, month) in months.iter_mut().enumerate() {
                let cell = r.get(i + 1).unwrap_or("").trim();
                *month = cell.parse().map_err(|_| {
                    RainfallError::DataFormat(format!(
                        "year {}: invalid rainfall '{}' in column {}",
                        year,
                        cell,
                        i + 1
                    ))
                })?;
            }
            rows.push(MonthlyRow { year, months });
        }

        let dataset = Self::from_rows(rows)?;
        log::info!(
            "[Rainfall] dataset: Loaded {} years ({:?}-{:?})",
            dataset.rows.len(),
            dataset.first_year(),
            dataset.last_year()
        );
        Ok(dataset)
    }

    /// Build a dataset from rows in any order.
    ///
    /// Fails on an empty input, duplicate years or negative rainfall.
    pub fn from_rows(mut rows: Vec<MonthlyRow>) -> Result<Self> {
        if rows.is_empty() {
            return Err(RainfallError::DataFormat("dataset has no rows".to_string()));
        }
        rows.sort_by_key(|row| row.year);
        if let Some(pair) = rows.windows(2).find(|pair| pair[0].year == pair[1].year) {
            return Err(RainfallError::DataFormat(format!(
                "duplicate year {}",
                pair[0].year
            )));
        }
        for row in &rows {
            if let Some(value) = row.months.iter().find(|v| !v.is_finite() || **v < 0.0) {
                return Err(RainfallError::DataFormat(format!(
                    "year {}: rainfall must be a non-negative number, got {}",
                    row.year, value
                )));
            }
        }
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[MonthlyRow] {
        &self.rows
    }

    pub fn first_year(&self) -> Option<i32> {
        self.rows.first().map(|row| row.year)
    }

    pub fn last_year(&self) -> Option<i32> {
        self.rows.last().map(|row| row.year)
    }

    /// Yearly series summing the months from `first` to `last` of every row.
    pub fn rainfall_for(&self, first: Month, last: Month) -> Vec<YearValue> {
        self.rows
            .iter()
            .map(|row| YearValue {
                year: row.year,
                value: row.span_total(first, last),
            })
            .collect()
    }
}
