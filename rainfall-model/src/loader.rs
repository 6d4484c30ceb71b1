//! Building rainfall tables out of the monthly dataset.

use crate::RainfallTable;
use rainfall_core::dataset::{MonthlyDataset, YearValue};
use rainfall_core::error::Result;
use rainfall_core::period::Period;
use rainfall_core::round_to;

impl RainfallTable {
    /// Sum the period's months of every dataset row into a yearly table.
    ///
    /// Rows before `start_year` are dropped and rainfall is rounded to
    /// `round_precision` decimals.
    pub fn from_dataset(
        dataset: &MonthlyDataset,
        period: Period,
        start_year: i32,
        round_precision: u32,
    ) -> Result<Self> {
        let (first, last) = period.month_span();
        let rows: Vec<YearValue> = dataset
            .rainfall_for(first, last)
            .into_iter()
            .filter(|row| row.year >= start_year)
            .map(|row| YearValue {
                year: row.year,
                value: round_to(row.value, round_precision),
            })
            .collect();

        let table = Self::new(period, rows, round_precision)?;
        log::debug!(
            "[Rainfall] loader: Loaded {} {} rows ({}-{})",
            table.rows.len(),
            period.label(),
            table.first_year(),
            table.last_year()
        );
        Ok(table)
    }
}
