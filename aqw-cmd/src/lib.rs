//! Command implementations for the air quality CLI.
//!
//! Every subcommand loads a dataset file into an in-memory database, runs
//! one query or tab view against it and writes the result as JSON (or CSV
//! for `records`) to stdout or `--output`.

use aqw_core::{Pollutant, SecondaryPollutant};
use clap::{Args, Subcommand};

pub mod dataset;
pub mod output;
pub mod views;

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct Common {
    /// Dataset CSV, plain or gzip-compressed (`.gz`)
    #[arg(short = 'd', long)]
    pub dataset: String,

    /// Write to this file instead of stdout
    #[arg(short = 'o', long)]
    pub output: Option<String>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Inclusive date window; both ends must be given for it to apply.
#[derive(Args, Debug, Clone)]
pub struct Window {
    /// First date (YYYY-MM-DD)
    #[arg(long, default_value = "2010-01-01")]
    pub start: String,

    /// Last date (YYYY-MM-DD)
    #[arg(long, default_value = "2010-01-31")]
    pub end: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Row count, states, cities, time zones and date span of a dataset
    Summary {
        #[command(flatten)]
        common: Common,
    },

    /// Pollutant means over time by state (tab 1)
    TimeSeries {
        #[command(flatten)]
        common: Common,

        #[arg(long, default_value = "Mountain Time Zone")]
        time_zone: String,

        /// O3, SO2, NO2 or CO (selector values such as `O3_Mean` also work)
        #[arg(short = 'p', long, default_value = "O3")]
        pollutant: Pollutant,

        #[command(flatten)]
        window: Window,
    },

    /// Ozone AQI against a second pollutant's AQI (tab 2)
    AirQuality {
        #[command(flatten)]
        common: Common,

        #[arg(short = 's', long, default_value = "Arizona")]
        state: String,

        /// CO, SO2 or NO2
        #[arg(long, default_value = "CO")]
        secondary: SecondaryPollutant,
    },

    /// State scatter and, for `--hover`, that state's daily series (tab 3)
    Drilldown {
        #[command(flatten)]
        common: Common,

        #[arg(short = 'p', long, default_value = "O3")]
        pollutant: Pollutant,

        #[command(flatten)]
        window: Window,

        /// State name as hovered on the scatter
        #[arg(long)]
        hover: Option<String>,
    },

    /// Peak hour densities per city and, for `--city`, its histograms (tab 4)
    Distribution {
        #[command(flatten)]
        common: Common,

        #[arg(short = 's', long, default_value = "Arizona")]
        state: String,

        #[arg(short = 'p', long, default_value = "O3")]
        pollutant: Pollutant,

        /// City name as clicked on the density chart
        #[arg(long)]
        city: Option<String>,
    },

    /// Export the records matching the filters as CSV
    Records {
        #[command(flatten)]
        common: Common,

        #[arg(long)]
        time_zone: Option<String>,

        #[arg(short = 's', long)]
        state: Option<String>,

        /// First date (YYYY-MM-DD)
        #[arg(long)]
        start: Option<String>,

        /// Last date (YYYY-MM-DD)
        #[arg(long)]
        end: Option<String>,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Summary { common } => views::run_summary(&common),
        Command::TimeSeries {
            common,
            time_zone,
            pollutant,
            window,
        } => views::run_time_series(&common, time_zone, pollutant, &window),
        Command::AirQuality {
            common,
            state,
            secondary,
        } => views::run_air_quality(&common, state, secondary),
        Command::Drilldown {
            common,
            pollutant,
            window,
            hover,
        } => views::run_drilldown(&common, pollutant, &window, hover),
        Command::Distribution {
            common,
            state,
            pollutant,
            city,
        } => views::run_distribution(&common, state, pollutant, city),
        Command::Records {
            common,
            time_zone,
            state,
            start,
            end,
        } => views::run_records(&common, time_zone, state, start, end),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Command,
    }

    #[test]
    fn time_series_defaults_match_dashboard() {
        let cli = TestCli::parse_from(["aqw", "time-series", "--dataset", "data.csv"]);
        let Command::TimeSeries {
            time_zone,
            pollutant,
            window,
            ..
        } = cli.command
        else {
            panic!("expected time-series");
        };
        assert_eq!(time_zone, "Mountain Time Zone");
        assert_eq!(pollutant, Pollutant::O3);
        assert_eq!(window.start, "2010-01-01");
        assert_eq!(window.end, "2010-01-31");
    }

    #[test]
    fn secondary_rejects_ozone() {
        let result = TestCli::try_parse_from([
            "aqw",
            "air-quality",
            "--dataset",
            "data.csv",
            "--secondary",
            "O3",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn pollutant_accepts_selector_value() {
        let cli = TestCli::parse_from([
            "aqw",
            "drilldown",
            "-d",
            "data.csv",
            "-p",
            "NO2_Mean",
            "--hover",
            "Utah",
        ]);
        let Command::Drilldown {
            pollutant, hover, ..
        } = cli.command
        else {
            panic!("expected drilldown");
        };
        assert_eq!(pollutant, Pollutant::NO2);
        assert_eq!(hover.as_deref(), Some("Utah"));
    }
}
