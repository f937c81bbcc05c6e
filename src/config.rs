//! Sales Board Settings
//!
//! Command line flags, each backed by a `FLASH_SALES_*` environment variable
//! that may also come from a `.env` file in the working directory.

use clap::{Args, Parser};
use jiff::tz::TimeZone;
use thiserror::Error;

use crate::format::DateFormatter;

/// Errors raised while resolving board settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configured time zone is not a known IANA name.
    #[error("unknown time zone {name:?}: {source}")]
    TimeZone {
        /// Name as configured
        name: String,

        /// Lookup error
        source: jiff::Error,
    },
}

/// How diagnostics are written to stderr.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// One line per event, for reading next to the board.
    Compact,

    /// One JSON object per event, for collecting board runs.
    Json,
}

/// Diagnostics settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Level for flash sale events such as skipped product ids and unreadable
    /// dates (trace, debug, info, warn, error). Other crates log at warn.
    #[arg(short, long, env = "FLASH_SALES_LOG", default_value = "info")]
    pub log_level: String,

    /// Diagnostics format (compact, json)
    #[arg(
        long,
        env = "FLASH_SALES_LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Compact
    )]
    pub log_format: LogFormat,
}

/// Display settings.
#[derive(Debug, Args)]
pub struct DisplayConfig {
    /// IANA time zone dates are shown in
    #[arg(long, env = "FLASH_SALES_TIME_ZONE", default_value = "UTC")]
    pub time_zone: String,
}

impl DisplayConfig {
    /// Resolves the configured time zone.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TimeZone`] if the name is not in the time zone database.
    pub fn time_zone(&self) -> Result<TimeZone, ConfigError> {
        if self.time_zone.eq_ignore_ascii_case("UTC") {
            return Ok(TimeZone::UTC);
        }

        TimeZone::get(&self.time_zone).map_err(|source| ConfigError::TimeZone {
            name: self.time_zone.clone(),
            source,
        })
    }

    /// Builds a date formatter for the configured time zone.
    ///
    /// # Errors
    ///
    /// See [`DisplayConfig::time_zone`].
    pub fn formatter(&self) -> Result<DateFormatter, ConfigError> {
        Ok(DateFormatter::new(self.time_zone()?))
    }
}

/// Flash sales board settings
#[derive(Debug, Parser)]
#[command(name = "sales_board", about = "Flash sales board", long_about = None)]
pub struct Settings {
    /// Display settings.
    #[command(flatten)]
    pub display: DisplayConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}

impl Settings {
    /// Reads board settings from the command line, falling back to
    /// `FLASH_SALES_*` variables.
    ///
    /// # Errors
    ///
    /// Returns the `clap` error for an unknown flag or an invalid value.
    pub fn load() -> Result<Self, clap::Error> {
        // a missing .env is fine
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults_apply_without_arguments() -> TestResult {
        let settings = Settings::try_parse_from(["sales_board"])?;

        assert_eq!(settings.display.time_zone, "UTC");
        assert_eq!(settings.logging.log_level, "info");
        assert_eq!(settings.logging.log_format, LogFormat::Compact);

        Ok(())
    }

    #[test]
    fn arguments_override_defaults() -> TestResult {
        let settings = Settings::try_parse_from([
            "sales_board",
            "--time-zone",
            "Asia/Kolkata",
            "--log-format",
            "json",
            "--log-level",
            "debug",
        ])?;

        assert_eq!(settings.display.time_zone, "Asia/Kolkata");
        assert_eq!(settings.logging.log_format, LogFormat::Json);
        assert_eq!(settings.logging.log_level, "debug");

        Ok(())
    }

    #[test]
    fn utc_resolves_without_database() -> TestResult {
        let display = DisplayConfig {
            time_zone: "utc".to_string(),
        };

        assert_eq!(display.time_zone()?, TimeZone::UTC);

        Ok(())
    }

    #[test]
    fn unknown_time_zone_is_an_error() {
        let display = DisplayConfig {
            time_zone: "Mars/Olympus_Mons".to_string(),
        };

        assert!(matches!(
            display.time_zone(),
            Err(ConfigError::TimeZone { name, .. }) if name == "Mars/Olympus_Mons"
        ));
    }
}
