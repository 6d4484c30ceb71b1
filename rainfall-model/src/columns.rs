//! Derived columns: percentage of normal, regression line, smoothing, clusters.
//!
//! Adding a column that already exists replaces it, so every operation here
//! can be repeated safely.

use crate::models::RegressionSummary;
use crate::RainfallTable;
use rainfall_core::dataset::YearValue;
use rainfall_core::error::{RainfallError, Result};
use rainfall_core::label::Label;
use rainfall_core::year_range::YearRange;
use rainfall_data::{aggregate, clustering, normal, regression, smoothing};

impl RainfallTable {
    /// Add every year's rainfall as a percentage of the average over `range`.
    pub fn add_percentage_of_normal(&mut self, range: YearRange) -> Result<()> {
        let range = self.validate(range)?;
        let normal = self.round(aggregate::average(&self.rows, range));
        let percentages = normal::percentage_of_normal(&self.rows, normal, range.begin)?;
        let column = percentages.iter().map(|p| self.round(p.value)).collect();
        self.columns.insert(Label::PercentageOfNormal, column);
        Ok(())
    }

    /// Add the least squares line through the whole table.
    pub fn add_linear_regression(&mut self) -> Result<RegressionSummary> {
        let fit = regression::fit(&self.rows)?;
        let column = fit.fitted.iter().map(|p| self.round(p.value)).collect();
        self.columns.insert(Label::LinearRegression, column);
        Ok(RegressionSummary {
            r2: fit.r2,
            slope: self.round(fit.slope),
            fitted: fit
                .fitted
                .iter()
                .map(|p| YearValue {
                    year: p.year,
                    value: self.round(p.value),
                })
                .collect(),
        })
    }

    /// Add a Savitzky-Golay smoothing of the whole table.
    pub fn add_savgol_filter(&mut self) {
        let values: Vec<f64> = self.rows.iter().map(|r| r.value).collect();
        let column = smoothing::savgol_filter(&values)
            .into_iter()
            .map(|v| self.round(v))
            .collect();
        self.columns.insert(Label::SavitzkyGolayFilter, column);
    }

    /// Add k-means cluster labels, returning the number of clusters formed.
    pub fn add_kmeans(&mut self, clusters: usize) -> Result<usize> {
        let values: Vec<f64> = self.rows.iter().map(|r| r.value).collect();
        let result = clustering::kmeans(&values, clusters)?;
        let column = result.labels.iter().map(|label| *label as f64).collect();
        self.columns.insert(Label::Kmeans, column);
        Ok(result.len())
    }

    /// Drop a derived column.
    ///
    /// Returns false for `Year` and `Rainfall`, which cannot be removed, and
    /// for columns that are not present.
    pub fn remove_column(&mut self, label: Label) -> bool {
        if label.is_base() {
            return false;
        }
        self.columns.remove(&label).is_some()
    }

    /// Standard deviation of a derived column over `range`.
    ///
    /// `None` when the column has not been added.
    pub fn column_standard_deviation(
        &self,
        label: Label,
        range: YearRange,
        weigh_by_average: bool,
    ) -> Result<Option<f64>> {
        let range = self.validate(range)?;
        let series = match label {
            Label::Year => {
                return Err(RainfallError::DataFormat(
                    "Year is not a measurement".to_string(),
                ))
            }
            Label::Rainfall => self.rows.clone(),
            _ => match self.column_series(label) {
                Some(series) => series,
                None => return Ok(None),
            },
        };
        Ok(Some(self.round(aggregate::standard_deviation(
            &series,
            range,
            weigh_by_average,
        ))))
    }

    fn column_series(&self, label: Label) -> Option<Vec<YearValue>> {
        let column = self.columns.get(&label)?;
        Some(
            self.rows
                .iter()
                .zip(column)
                .map(|(row, value)| YearValue {
                    year: row.year,
                    value: *value,
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{fifty_years, three_years};
    use rainfall_core::dataset::MonthlyDataset;
    use rainfall_core::month::Month;
    use rainfall_core::period::Period;

    fn yearly(dataset: MonthlyDataset, start: i32) -> RainfallTable {
        RainfallTable::from_dataset(&dataset, Period::Yearly, start, 2).unwrap()
    }

    #[test]
    fn percentage_of_normal_column() {
        let mut table = yearly(three_years(), 2000);
        table
            .add_percentage_of_normal(YearRange::new(2000, 2002).unwrap())
            .unwrap();
        assert_eq!(
            table.column(Label::PercentageOfNormal).unwrap(),
            &[50.0, 100.0, 150.0]
        );
    }

    #[test]
    fn percentage_of_zero_normal_fails() {
        let mut table =
            RainfallTable::from_dataset(&three_years(), Period::Monthly(Month::July), 2000, 2)
                .unwrap();
        let err = table
            .add_percentage_of_normal(YearRange::new(2000, 2002).unwrap())
            .unwrap_err();
        assert!(matches!(err, RainfallError::ZeroNormal { normal_year: 2000 }));
        assert!(table.column(Label::PercentageOfNormal).is_none());
    }

    #[test]
    fn linear_regression_column() {
        let mut table = yearly(three_years(), 2000);
        let summary = table.add_linear_regression().unwrap();
        assert_eq!(summary.slope, 100.0);
        assert_eq!(summary.r2, 1.0);
        assert_eq!(
            table.column(Label::LinearRegression).unwrap(),
            &[100.0, 200.0, 300.0]
        );
    }

    #[test]
    fn adding_twice_replaces_the_column() {
        let mut table = yearly(fifty_years(), 1960);
        table.add_savgol_filter();
        let first = table.column(Label::SavitzkyGolayFilter).unwrap().to_vec();
        table.add_savgol_filter();
        assert_eq!(table.column(Label::SavitzkyGolayFilter).unwrap(), first.as_slice());
        assert_eq!(
            table.labels(),
            vec![Label::Year, Label::Rainfall, Label::SavitzkyGolayFilter]
        );
    }

    #[test]
    fn kmeans_column_labels_every_year() {
        let mut table = yearly(fifty_years(), 1960);
        let clusters = table.add_kmeans(5).unwrap();
        assert_eq!(clusters, 5);
        let labels = table.column(Label::Kmeans).unwrap();
        assert_eq!(labels.len(), 50);
        assert!(labels.iter().all(|l| *l >= 0.0 && *l < 5.0));
    }

    #[test]
    fn remove_column_protects_base_columns() {
        let mut table = yearly(fifty_years(), 1960);
        table.add_savgol_filter();

        assert!(!table.remove_column(Label::Year));
        assert!(!table.remove_column(Label::Rainfall));
        assert!(table.remove_column(Label::SavitzkyGolayFilter));
        assert!(!table.remove_column(Label::SavitzkyGolayFilter));
        assert_eq!(table.labels(), vec![Label::Year, Label::Rainfall]);
    }

    #[test]
    fn standard_deviation_of_missing_column_is_none() {
        let mut table = yearly(fifty_years(), 1960);
        let range = YearRange::new(1960, 2009).unwrap();
        assert_eq!(
            table
                .column_standard_deviation(Label::SavitzkyGolayFilter, range, false)
                .unwrap(),
            None
        );
        table.add_savgol_filter();
        assert!(table
            .column_standard_deviation(Label::SavitzkyGolayFilter, range, false)
            .unwrap()
            .is_some());
    }
}
