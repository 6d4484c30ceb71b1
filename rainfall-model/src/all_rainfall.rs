//! Every rainfall granularity loaded from one dataset.

use crate::granularity::{MonthlyRainfall, SeasonalRainfall, YearlyRainfall};
use crate::models::PeriodValue;
use crate::queries::RainfallQuery;
use rainfall_core::dataset::MonthlyDataset;
use rainfall_core::error::{RainfallError, Result};
use rainfall_core::month::{month_column, MONTHS};
use rainfall_core::period::{Period, TimeMode};
use rainfall_core::season::Season;
use rainfall_core::year_range::YearRange;

/// Yearly, monthly and seasonal rainfall sharing the same years.
#[derive(Debug, Clone, PartialEq)]
pub struct AllRainfall {
    start_year: i32,
    round_precision: u32,
    yearly: YearlyRainfall,
    monthly: Vec<MonthlyRainfall>,
    seasonal: Vec<SeasonalRainfall>,
}

impl AllRainfall {
    /// Load every granularity from an already parsed dataset.
    pub fn from_dataset(
        dataset: &MonthlyDataset,
        start_year: i32,
        round_precision: u32,
    ) -> Result<Self> {
        let yearly = YearlyRainfall::new(dataset, start_year, round_precision)?;
        let monthly = MONTHS
            .iter()
            .map(|month| MonthlyRainfall::new(dataset, *month, start_year, round_precision))
            .collect::<Result<Vec<_>>>()?;
        let seasonal = Season::ALL
            .iter()
            .map(|season| SeasonalRainfall::new(dataset, *season, start_year, round_precision))
            .collect::<Result<Vec<_>>>()?;

        log::info!(
            "[Rainfall] model: Loaded rainfall from {} to {} ({} monthly, {} seasonal tables)",
            yearly.first_year(),
            yearly.last_year(),
            monthly.len(),
            seasonal.len()
        );
        Ok(Self {
            start_year,
            round_precision,
            yearly,
            monthly,
            seasonal,
        })
    }

    /// Parse the monthly dataset CSV and load every granularity.
    pub fn from_csv(csv_data: &str, start_year: i32, round_precision: u32) -> Result<Self> {
        let dataset = MonthlyDataset::parse(csv_data)?;
        Self::from_dataset(&dataset, start_year, round_precision)
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    pub fn round_precision(&self) -> u32 {
        self.round_precision
    }

    pub fn first_year(&self) -> i32 {
        self.yearly.first_year()
    }

    pub fn last_year(&self) -> i32 {
        self.yearly.last_year()
    }

    /// Latest year a thirty year normal can start at.
    pub fn last_normal_year(&self) -> i32 {
        self.last_year() - rainfall_data::normal::NORMAL_SPAN_YEARS + 1
    }

    pub fn yearly(&self) -> &YearlyRainfall {
        &self.yearly
    }

    /// Queries for one period.
    pub fn query(&self, period: Period) -> &dyn RainfallQuery {
        match period {
            Period::Yearly => &self.yearly,
            Period::Monthly(month) => &self.monthly[month_column(month) - 1],
            Period::Seasonal(season) => &self.seasonal[season_index(season)],
        }
    }

    /// Mutable queries for one period, to add or remove derived columns.
    pub fn query_mut(&mut self, period: Period) -> &mut dyn RainfallQuery {
        match period {
            Period::Yearly => &mut self.yearly,
            Period::Monthly(month) => &mut self.monthly[month_column(month) - 1],
            Period::Seasonal(season) => &mut self.seasonal[season_index(season)],
        }
    }

    /// Every month (January first) or season (winter first) of a time mode.
    pub fn periods(time_mode: TimeMode) -> Result<Vec<Period>> {
        match time_mode {
            TimeMode::Yearly => Err(RainfallError::YearlyTimeMode),
            TimeMode::Monthly => Ok(MONTHS.iter().map(|m| Period::Monthly(*m)).collect()),
            TimeMode::Seasonal => Ok(Season::ALL.iter().map(|s| Period::Seasonal(*s)).collect()),
        }
    }

    /// Average rainfall of every month or season over `range`.
    pub fn averages(&self, time_mode: TimeMode, range: YearRange) -> Result<Vec<PeriodValue>> {
        self.per_period(time_mode, |query| query.average(range))
    }

    /// Regression slope of every month or season over `range`.
    pub fn linreg_slopes(&self, time_mode: TimeMode, range: YearRange) -> Result<Vec<PeriodValue>> {
        self.per_period(time_mode, |query| {
            query.linear_regression(range).map(|summary| summary.slope)
        })
    }

    /// Relative distance to normal of every month or season over `range`.
    pub fn relative_distances_to_normal(
        &self,
        time_mode: TimeMode,
        normal_year: i32,
        range: YearRange,
    ) -> Result<Vec<PeriodValue>> {
        self.per_period(time_mode, |query| {
            query.relative_distance_to_normal(normal_year, range)
        })
    }

    fn per_period<F>(&self, time_mode: TimeMode, compute: F) -> Result<Vec<PeriodValue>>
    where
        F: Fn(&dyn RainfallQuery) -> Result<f64>,
    {
        Self::periods(time_mode)?
            .into_iter()
            .map(|period| {
                Ok(PeriodValue {
                    label: period.label(),
                    value: compute(self.query(period))?,
                })
            })
            .collect()
    }
}

fn season_index(season: Season) -> usize {
    Season::ALL
        .iter()
        .position(|s| *s == season)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{fifty_years, three_years};
    use rainfall_core::label::Label;
    use rainfall_core::month::Month;

    fn range(begin: i32, end: i32) -> YearRange {
        YearRange::new(begin, end).unwrap()
    }

    #[test]
    fn loads_every_granularity() {
        let all = AllRainfall::from_dataset(&fifty_years(), 1970, 1).unwrap();
        assert_eq!(all.first_year(), 1970);
        assert_eq!(all.last_year(), 2009);
        assert_eq!(all.last_normal_year(), 1980);
        assert_eq!(
            all.query(Period::Monthly(Month::October)).period(),
            Period::Monthly(Month::October)
        );
        assert_eq!(
            all.query(Period::Seasonal(Season::Fall)).period(),
            Period::Seasonal(Season::Fall)
        );
    }

    #[test]
    fn dispatches_by_period() {
        let all = AllRainfall::from_dataset(&three_years(), 2000, 1).unwrap();
        let r = range(2000, 2002);
        assert_eq!(all.query(Period::Yearly).average(r).unwrap(), 200.0);
        assert_eq!(
            all.query(Period::Monthly(Month::January)).average(r).unwrap(),
            200.0
        );
        assert_eq!(
            all.query(Period::Seasonal(Season::Winter)).average(r).unwrap(),
            200.0
        );
        assert_eq!(
            all.query(Period::Seasonal(Season::Summer)).average(r).unwrap(),
            0.0
        );
    }

    #[test]
    fn monthly_averages_in_calendar_order() {
        let all = AllRainfall::from_dataset(&three_years(), 2000, 1).unwrap();
        let averages = all.averages(TimeMode::Monthly, range(2000, 2002)).unwrap();
        assert_eq!(averages.len(), 12);
        assert_eq!(averages[0].label, "January");
        assert_eq!(averages[0].value, 200.0);
        assert_eq!(averages[11].label, "December");
        assert_eq!(averages[11].value, 0.0);
    }

    #[test]
    fn seasonal_slopes() {
        let all = AllRainfall::from_dataset(&three_years(), 2000, 1).unwrap();
        let slopes = all.linreg_slopes(TimeMode::Seasonal, range(2000, 2002)).unwrap();
        let labels: Vec<&str> = slopes.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["winter", "spring", "summer", "fall"]);
        assert_eq!(slopes[0].value, 100.0);
        assert_eq!(slopes[1].value, 0.0);
    }

    #[test]
    fn relative_distances_per_month() {
        let all = AllRainfall::from_dataset(&fifty_years(), 1960, 1).unwrap();
        let distances = all
            .relative_distances_to_normal(TimeMode::Monthly, 1970, range(1990, 2009))
            .unwrap();
        assert_eq!(distances.len(), 12);

        let err = all
            .relative_distances_to_normal(TimeMode::Seasonal, 1981, range(1990, 2009))
            .unwrap_err();
        assert!(matches!(err, RainfallError::YearOutOfSpan { year: 2010, .. }));
    }

    #[test]
    fn yearly_time_mode_has_no_per_period_series() {
        let all = AllRainfall::from_dataset(&three_years(), 2000, 1).unwrap();
        let err = all.averages(TimeMode::Yearly, range(2000, 2002)).unwrap_err();
        assert!(matches!(err, RainfallError::YearlyTimeMode));
    }

    #[test]
    fn query_mut_adds_columns_to_one_period_only() {
        let mut all = AllRainfall::from_dataset(&fifty_years(), 1960, 1).unwrap();
        all.query_mut(Period::Monthly(Month::May)).add_savgol_filter();
        assert!(all
            .query(Period::Monthly(Month::May))
            .table()
            .column(Label::SavitzkyGolayFilter)
            .is_some());
        assert!(all
            .query(Period::Yearly)
            .table()
            .column(Label::SavitzkyGolayFilter)
            .is_none());
    }
}
