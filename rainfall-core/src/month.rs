//! Calendar months, as used to index dataset columns.

use crate::error::{RainfallError, Result};

pub use chrono::Month;

/// Every month in calendar order.
pub const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Position of a month's column in the dataset (the year sits at 0).
pub fn month_column(month: Month) -> usize {
    month.number_from_month() as usize
}

/// Parse a month from its English name or three letter abbreviation.
pub fn parse_month(name: &str) -> Result<Month> {
    name.trim()
        .parse::<Month>()
        .map_err(|_| RainfallError::UnknownName {
            kind: "month",
            name: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_columns_follow_calendar() {
        assert_eq!(month_column(Month::January), 1);
        assert_eq!(month_column(Month::December), 12);
        for (i, month) in MONTHS.iter().enumerate() {
            assert_eq!(month_column(*month), i + 1);
        }
    }

    #[test]
    fn parse_month_accepts_any_case() {
        assert_eq!(parse_month("may").unwrap(), Month::May);
        assert_eq!(parse_month("OCTOBER").unwrap(), Month::October);
        assert_eq!(parse_month(" Feb ").unwrap(), Month::February);
    }

    #[test]
    fn parse_month_rejects_unknown() {
        let err = parse_month("brumaire").unwrap_err();
        assert!(matches!(err, RainfallError::UnknownName { kind: "month", .. }));
    }
}
