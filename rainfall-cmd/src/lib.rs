//! Command implementations for the rainfall CLI.
//!
//! Provides subcommands computing rainfall statistics over the Barcelona
//! monthly dataset, printed as JSON, plus a CSV export of yearly values.

use clap::{Args, Subcommand};
use rainfall_core::month::{parse_month, Month};
use rainfall_core::period::{Period, TimeMode};
use rainfall_core::season::Season;
use rainfall_core::year_range::YearRange;
use rainfall_model::AllRainfall;

pub mod config;
pub mod export;
pub mod response;
pub mod series;
pub mod source;
pub mod statistics;

use config::Config;

/// Time mode and its month or season selector.
#[derive(Args, Debug, Clone)]
pub struct PeriodArgs {
    /// yearly, monthly or seasonal
    #[arg(short = 't', long, default_value = "yearly")]
    pub time_mode: TimeMode,

    /// Month to aggregate, required with the monthly time mode
    #[arg(short = 'm', long, value_parser = parse_month)]
    pub month: Option<Month>,

    /// Season to aggregate (winter, spring, summer, fall), required with the seasonal time mode
    #[arg(short = 's', long)]
    pub season: Option<Season>,
}

impl PeriodArgs {
    pub fn period(&self) -> anyhow::Result<Period> {
        Ok(Period::from_parts(self.time_mode, self.month, self.season)?)
    }
}

/// Year interval, the end defaulting to the last available year.
#[derive(Args, Debug, Clone)]
pub struct YearArgs {
    /// First year included
    #[arg(short = 'b', long)]
    pub begin_year: i32,

    /// Last year included (defaults to the most recent year available)
    #[arg(short = 'e', long)]
    pub end_year: Option<i32>,
}

impl YearArgs {
    pub fn range(&self, all: &AllRainfall) -> anyhow::Result<YearRange> {
        let end = self.end_year.unwrap_or_else(|| all.last_year());
        Ok(YearRange::new(self.begin_year, end)?)
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Average rainfall between two years
    Average {
        #[command(flatten)]
        period: PeriodArgs,
        #[command(flatten)]
        years: YearArgs,
    },

    /// Thirty year average rainfall starting at a given year
    Normal {
        #[command(flatten)]
        period: PeriodArgs,

        /// First year of the thirty year window
        #[arg(short = 'b', long)]
        begin_year: i32,
    },

    /// Percentage by which the average between two years departs from a normal
    RelativeDistance {
        #[command(flatten)]
        period: PeriodArgs,
        #[command(flatten)]
        years: YearArgs,

        /// First year of the normal
        #[arg(short = 'n', long)]
        normal_year: i32,
    },

    /// Standard deviation of rainfall between two years
    StandardDeviation {
        #[command(flatten)]
        period: PeriodArgs,
        #[command(flatten)]
        years: YearArgs,

        /// Divide the deviation by the average rainfall
        #[arg(long)]
        weigh_by_average: bool,
    },

    /// Number of years below a normal
    YearsBelowNormal {
        #[command(flatten)]
        period: PeriodArgs,
        #[command(flatten)]
        years: YearArgs,

        /// First year of the normal
        #[arg(short = 'n', long)]
        normal_year: i32,
    },

    /// Number of years above a normal
    YearsAboveNormal {
        #[command(flatten)]
        period: PeriodArgs,
        #[command(flatten)]
        years: YearArgs,

        /// First year of the normal
        #[arg(short = 'n', long)]
        normal_year: i32,
    },

    /// Linear regression slope and R² of rainfall between two years
    LinearRegression {
        #[command(flatten)]
        period: PeriodArgs,
        #[command(flatten)]
        years: YearArgs,
    },

    /// Export yearly rainfall as CSV
    Csv {
        #[command(flatten)]
        period: PeriodArgs,
        #[command(flatten)]
        years: YearArgs,

        /// Output path (prints to stdout when omitted)
        #[arg(short = 'o', long)]
        output: Option<String>,

        /// Add a percentage of the normal starting at this year
        #[arg(long)]
        percentage_of_normal: Option<i32>,

        /// Add the linear regression line
        #[arg(long)]
        linear_regression: bool,

        /// Add a Savitzky-Golay smoothing
        #[arg(long)]
        savgol: bool,

        /// Add k-means cluster labels (cluster count from the configuration)
        #[arg(long)]
        kmeans: bool,
    },

    /// Average rainfall of every month or season
    Averages {
        /// monthly or seasonal
        #[arg(short = 't', long)]
        time_mode: TimeMode,
        #[command(flatten)]
        years: YearArgs,
    },

    /// Linear regression slope of every month or season
    LinregSlopes {
        /// monthly or seasonal
        #[arg(short = 't', long)]
        time_mode: TimeMode,
        #[command(flatten)]
        years: YearArgs,
    },

    /// Relative distance to normal of every month or season
    RelativeDistances {
        /// monthly or seasonal
        #[arg(short = 't', long)]
        time_mode: TimeMode,
        #[command(flatten)]
        years: YearArgs,

        /// First year of the normal
        #[arg(short = 'n', long)]
        normal_year: i32,
    },
}

/// Load the configured dataset and run one command, printing its output.
pub async fn run(command: Command, config_path: &str) -> anyhow::Result<()> {
    let config = Config::load(config_path)?;
    let csv_data = source::read_source(&config.dataset.source).await?;
    let mut all = AllRainfall::from_csv(
        &csv_data,
        config.dataset.start_year,
        config.dataset.round_precision,
    )?;

    if let Some(output) = execute(&mut all, &config, command)? {
        println!("{}", output);
    }
    Ok(())
}

/// Run one command against loaded rainfall data.
///
/// Returns the text to print, or `None` when the output went to a file.
pub fn execute(
    all: &mut AllRainfall,
    config: &Config,
    command: Command,
) -> anyhow::Result<Option<String>> {
    let output = match command {
        Command::Average { period, years } => {
            statistics::average(all, period.period()?, years.range(all)?)?
        }
        Command::Normal { period, begin_year } => {
            statistics::normal(all, period.period()?, begin_year)?
        }
        Command::RelativeDistance {
            period,
            years,
            normal_year,
        } => statistics::relative_distance(all, period.period()?, years.range(all)?, normal_year)?,
        Command::StandardDeviation {
            period,
            years,
            weigh_by_average,
        } => statistics::standard_deviation(
            all,
            period.period()?,
            years.range(all)?,
            weigh_by_average,
        )?,
        Command::YearsBelowNormal {
            period,
            years,
            normal_year,
        } => statistics::years_below_normal(all, period.period()?, years.range(all)?, normal_year)?,
        Command::YearsAboveNormal {
            period,
            years,
            normal_year,
        } => statistics::years_above_normal(all, period.period()?, years.range(all)?, normal_year)?,
        Command::LinearRegression { period, years } => {
            statistics::linear_regression(all, period.period()?, years.range(all)?)?
        }
        Command::Csv {
            period,
            years,
            output,
            percentage_of_normal,
            linear_regression,
            savgol,
            kmeans,
        } => {
            let options = export::CsvOptions {
                percentage_of_normal,
                linear_regression,
                savgol,
                kmeans: kmeans.then_some(config.kmeans.clusters),
            };
            let range = years.range(all)?;
            let csv = export::export_csv(all, period.period()?, range, &options)?;
            return match output {
                Some(path) => {
                    std::fs::write(&path, csv)?;
                    log::info!("CSV written to {}", path);
                    Ok(None)
                }
                None => Ok(Some(csv)),
            };
        }
        Command::Averages { time_mode, years } => {
            series::averages(all, time_mode, years.range(all)?)?
        }
        Command::LinregSlopes { time_mode, years } => {
            series::linreg_slopes(all, time_mode, years.range(all)?)?
        }
        Command::RelativeDistances {
            time_mode,
            years,
            normal_year,
        } => series::relative_distances(all, time_mode, normal_year, years.range(all)?)?,
    };
    Ok(Some(output))
}
