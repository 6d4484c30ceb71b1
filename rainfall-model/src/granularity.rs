//! One rainfall type per granularity: whole years, single months, seasons.

use crate::queries::RainfallQuery;
use crate::RainfallTable;
use rainfall_core::dataset::MonthlyDataset;
use rainfall_core::error::Result;
use rainfall_core::month::Month;
use rainfall_core::period::Period;
use rainfall_core::season::Season;

/// Rainfall summed over the whole calendar year.
#[derive(Debug, Clone, PartialEq)]
pub struct YearlyRainfall {
    table: RainfallTable,
}

impl YearlyRainfall {
    pub fn new(dataset: &MonthlyDataset, start_year: i32, round_precision: u32) -> Result<Self> {
        Ok(Self {
            table: RainfallTable::from_dataset(dataset, Period::Yearly, start_year, round_precision)?,
        })
    }
}

impl RainfallQuery for YearlyRainfall {
    fn table(&self) -> &RainfallTable {
        &self.table
    }

    fn table_mut(&mut self) -> &mut RainfallTable {
        &mut self.table
    }
}

/// Rainfall of a single month, one value per year.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyRainfall {
    month: Month,
    table: RainfallTable,
}

impl MonthlyRainfall {
    pub fn new(
        dataset: &MonthlyDataset,
        month: Month,
        start_year: i32,
        round_precision: u32,
    ) -> Result<Self> {
        Ok(Self {
            month,
            table: RainfallTable::from_dataset(
                dataset,
                Period::Monthly(month),
                start_year,
                round_precision,
            )?,
        })
    }

    pub fn month(&self) -> Month {
        self.month
    }
}

impl RainfallQuery for MonthlyRainfall {
    fn table(&self) -> &RainfallTable {
        &self.table
    }

    fn table_mut(&mut self) -> &mut RainfallTable {
        &mut self.table
    }
}

/// Rainfall of a three month season, one value per year.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalRainfall {
    season: Season,
    table: RainfallTable,
}

impl SeasonalRainfall {
    pub fn new(
        dataset: &MonthlyDataset,
        season: Season,
        start_year: i32,
        round_precision: u32,
    ) -> Result<Self> {
        Ok(Self {
            season,
            table: RainfallTable::from_dataset(
                dataset,
                Period::Seasonal(season),
                start_year,
                round_precision,
            )?,
        })
    }

    pub fn season(&self) -> Season {
        self.season
    }
}

impl RainfallQuery for SeasonalRainfall {
    fn table(&self) -> &RainfallTable {
        &self.table
    }

    fn table_mut(&mut self) -> &mut RainfallTable {
        &mut self.table
    }
}
