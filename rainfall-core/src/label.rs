//! Column labels of a rainfall table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A column of a rainfall table.
///
/// `Year` and `Rainfall` are always present; the other columns are derived
/// on demand and can be dropped again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Label {
    Year,
    Rainfall,
    PercentageOfNormal,
    LinearRegression,
    SavitzkyGolayFilter,
    Kmeans,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Year => "Year",
            Label::Rainfall => "Rainfall",
            Label::PercentageOfNormal => "Percentage of normal",
            Label::LinearRegression => "Linear regression",
            Label::SavitzkyGolayFilter => "Savitzky-Golay filter",
            Label::Kmeans => "Kmeans",
        }
    }

    /// Base columns cannot be removed from a table.
    pub fn is_base(&self) -> bool {
        matches!(self, Label::Year | Label::Rainfall)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
