//! Closed year intervals.

use crate::error::{RainfallError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A closed interval of years, `begin` and `end` included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearRange {
    pub begin: i32,
    pub end: i32,
}

impl YearRange {
    /// Build a range, rejecting `begin > end`.
    pub fn new(begin: i32, end: i32) -> Result<Self> {
        if begin > end {
            return Err(RainfallError::InvalidYearRange { begin, end });
        }
        Ok(Self { begin, end })
    }

    /// Check that both bounds fall inside `[first, last]`.
    pub fn within(self, first: i32, last: i32) -> Result<Self> {
        for year in [self.begin, self.end] {
            if year < first || year > last {
                return Err(RainfallError::YearOutOfSpan { year, first, last });
            }
        }
        Ok(self)
    }

    pub fn contains(&self, year: i32) -> bool {
        self.begin <= year && year <= self.end
    }

    /// Number of calendar years covered, 0 when `begin > end`.
    pub fn years(&self) -> usize {
        if self.begin > self.end {
            return 0;
        }
        self.end.abs_diff(self.begin) as usize + 1
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.begin, self.end)
    }
}
