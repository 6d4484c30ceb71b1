//! CSV export with optional derived columns.

use rainfall_core::period::Period;
use rainfall_core::year_range::YearRange;
use rainfall_data::normal::normal_range;
use rainfall_model::AllRainfall;

/// Derived columns to add before exporting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CsvOptions {
    /// Start year of the normal used for the percentage column.
    pub percentage_of_normal: Option<i32>,
    pub linear_regression: bool,
    pub savgol: bool,
    /// Number of k-means clusters.
    pub kmeans: Option<usize>,
}

/// Add the requested columns to the period's table and export `range`.
pub fn export_csv(
    all: &mut AllRainfall,
    period: Period,
    range: YearRange,
    options: &CsvOptions,
) -> anyhow::Result<String> {
    let query = all.query_mut(period);
    if let Some(normal_year) = options.percentage_of_normal {
        query.add_percentage_of_normal(normal_range(normal_year)?)?;
    }
    if options.linear_regression {
        query.add_linear_regression()?;
    }
    if options.savgol {
        query.add_savgol_filter();
    }
    if let Some(clusters) = options.kmeans {
        let formed = query.add_kmeans(clusters)?;
        log::debug!("k-means formed {} clusters", formed);
    }
    Ok(query.export_as_csv(range)?)
}
