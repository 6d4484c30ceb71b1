//! Query result models.
//!
//! All structs derive `Serialize` so the command layer can print them as JSON.

use rainfall_core::dataset::YearValue;
use serde::Serialize;

/// One value per month or season, e.g. the average rainfall of every month.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PeriodValue {
    /// Month name ("January") or season name ("winter").
    pub label: String,
    pub value: f64,
}

/// Linear regression of rainfall against year over a range.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RegressionSummary {
    /// Coefficient of determination, not rounded.
    pub r2: f64,
    /// Rainfall change per year (mm), rounded to the table precision.
    pub slope: f64,
    /// Fitted rainfall for every year of the range, rounded.
    pub fitted: Vec<YearValue>,
}
