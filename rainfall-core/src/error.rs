/// Error types for rainfall statistics
use thiserror::Error;

/// Main error type for rainfall operations
#[derive(Error, Debug)]
pub enum RainfallError {
    /// Range whose beginning comes after its end
    #[error("Invalid year range: begin year {begin} is after end year {end}")]
    InvalidYearRange { begin: i32, end: i32 },

    /// Year outside of the loaded data
    #[error("Year {year} is outside of available data ({first}-{last})")]
    YearOutOfSpan { year: i32, first: i32, last: i32 },

    /// Thirty year window that would run past the largest representable year
    #[error("A normal starting in {year} would end after the last representable year")]
    NormalStartOverflow { year: i32 },

    /// Relative distance against a normal of zero is undefined
    #[error("Rainfall normal starting in {normal_year} is zero, relative distance is undefined")]
    ZeroNormal { normal_year: i32 },

    /// Not enough points to compute a statistic
    #[error("Insufficient data (needed: {needed}, found: {found})")]
    InsufficientData { needed: usize, found: usize },

    /// Dataset does not have the expected shape
    #[error("Invalid data format: {0}")]
    DataFormat(String),

    /// Monthly time mode used without a month
    #[error("Month should be set when time mode is 'monthly'")]
    MissingMonth,

    /// Seasonal time mode used without a season
    #[error("Season should be set when time mode is 'seasonal'")]
    MissingSeason,

    /// Operation only makes sense across months or seasons
    #[error("Time mode should be either 'monthly' or 'seasonal'")]
    YearlyTimeMode,

    /// Unknown month or season name
    #[error("Unknown {kind}: {name}")]
    UnknownName { kind: &'static str, name: String },

    /// Failed to read or write CSV data
    #[error("Failed to process CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Type alias for Results using RainfallError
pub type Result<T> = std::result::Result<T, RainfallError>;
