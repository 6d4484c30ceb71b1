//! Statistic queries over a rainfall table.
//!
//! Every query validates its year ranges against the table before computing
//! anything; scalar results are rounded to the table precision.

use crate::models::RegressionSummary;
use crate::RainfallTable;
use rainfall_core::dataset::YearValue;
use rainfall_core::error::Result;
use rainfall_core::label::Label;
use rainfall_core::period::Period;
use rainfall_core::year_range::YearRange;
use rainfall_data::{aggregate, normal, regression};

/// Queries shared by the yearly, monthly and seasonal rainfall types.
pub trait RainfallQuery {
    fn table(&self) -> &RainfallTable;

    fn table_mut(&mut self) -> &mut RainfallTable;

    fn period(&self) -> Period {
        self.table().period()
    }

    fn first_year(&self) -> i32 {
        self.table().first_year()
    }

    fn last_year(&self) -> i32 {
        self.table().last_year()
    }

    /// Yearly rainfall inside `range`.
    fn rainfall(&self, range: YearRange) -> Result<Vec<YearValue>> {
        let range = self.table().validate(range)?;
        Ok(self.table().rows_within(range))
    }

    /// Average rainfall over `range`.
    fn average(&self, range: YearRange) -> Result<f64> {
        let table = self.table();
        let range = table.validate(range)?;
        let average = table.round(aggregate::average(table.rows(), range));
        log::debug!(
            "[Rainfall] query: {} average {} = {}",
            table.period().label(),
            range,
            average
        );
        Ok(average)
    }

    /// Thirty year average starting at `start_year`.
    ///
    /// The whole thirty year window must be inside the table.
    fn normal(&self, start_year: i32) -> Result<f64> {
        self.average(normal::normal_range(start_year)?)
    }

    /// Population standard deviation over `range`, optionally divided by the
    /// range average.
    fn standard_deviation(&self, range: YearRange, weigh_by_average: bool) -> Result<f64> {
        let table = self.table();
        let range = table.validate(range)?;
        Ok(table.round(aggregate::standard_deviation(
            table.rows(),
            range,
            weigh_by_average,
        )))
    }

    /// Years of `range` strictly wetter than the normal starting at `normal_year`.
    fn years_above_normal(&self, normal_year: i32, range: YearRange) -> Result<usize> {
        let normal = self.normal(normal_year)?;
        let range = self.table().validate(range)?;
        Ok(aggregate::count_above(self.table().rows(), range, normal))
    }

    /// Years of `range` strictly drier than the normal starting at `normal_year`.
    fn years_below_normal(&self, normal_year: i32, range: YearRange) -> Result<usize> {
        let normal = self.normal(normal_year)?;
        let range = self.table().validate(range)?;
        Ok(aggregate::count_below(self.table().rows(), range, normal))
    }

    /// Percentage by which the average over `range` departs from the normal
    /// starting at `normal_year`.
    ///
    /// Fails with `ZeroNormal` when that normal is 0.
    fn relative_distance_to_normal(&self, normal_year: i32, range: YearRange) -> Result<f64> {
        let table = self.table();
        let normal_range = table.validate(normal::normal_range(normal_year)?)?;
        let range = table.validate(range)?;
        let distance =
            normal::relative_distance_to_normal(table.rows(), range, normal_range.begin)?;
        Ok(table.round(distance))
    }

    /// Least squares line of rainfall against year over `range`.
    fn linear_regression(&self, range: YearRange) -> Result<RegressionSummary> {
        let table = self.table();
        let range = table.validate(range)?;
        let fit = regression::linear_regression(table.rows(), range)?;
        Ok(RegressionSummary {
            r2: fit.r2,
            slope: table.round(fit.slope),
            fitted: fit
                .fitted
                .iter()
                .map(|p| YearValue {
                    year: p.year,
                    value: table.round(p.value),
                })
                .collect(),
        })
    }

    /// Standard deviation of a derived column, `None` if it is absent.
    fn column_standard_deviation(
        &self,
        label: Label,
        range: YearRange,
        weigh_by_average: bool,
    ) -> Result<Option<f64>> {
        self.table()
            .column_standard_deviation(label, range, weigh_by_average)
    }

    /// CSV text of every column for the years of `range`.
    fn export_as_csv(&self, range: YearRange) -> Result<String> {
        let range = self.table().validate(range)?;
        self.table().to_csv(range)
    }

    fn add_percentage_of_normal(&mut self, range: YearRange) -> Result<()> {
        self.table_mut().add_percentage_of_normal(range)
    }

    fn add_linear_regression(&mut self) -> Result<RegressionSummary> {
        self.table_mut().add_linear_regression()
    }

    fn add_savgol_filter(&mut self) {
        self.table_mut().add_savgol_filter()
    }

    fn add_kmeans(&mut self, clusters: usize) -> Result<usize> {
        self.table_mut().add_kmeans(clusters)
    }

    fn remove_column(&mut self, label: Label) -> bool {
        self.table_mut().remove_column(label)
    }
}
