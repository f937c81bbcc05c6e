//! Display Formatting
//!
//! Date and currency rendering for the `en-IN` locale. Dates are shown as
//! `15 Jan 2024, 10:30 am` in the formatter's time zone, currency as Indian
//! rupees with lakh and crore grouping (`₹1,29,999.00`, `₹1,23,45,67,890.12`).

use jiff::{
    Timestamp,
    civil::{Date, DateTime, Time},
    tz::TimeZone,
};
use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{
    FormattableCurrency, Formatter, LocalFormat, Locale, Money, Params, Position,
    iso::{self, Currency},
};
use thiserror::Error;
use tracing::warn;

/// Text rendered in place of a date that could not be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

/// `en-IN` long date with a 12 hour clock.
const DISPLAY_PATTERN: &str = "%-d %b %Y, %I:%M %P";

/// Value accepted by `datetime-local` inputs.
const INPUT_PATTERN: &str = "%Y-%m-%dT%H:%M";

/// Lakh and crore grouping over every digit a `Decimal` can hold.
const INDIAN_GROUPING: &[usize] = &[3, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2];

/// Thousands grouping over every digit a `Decimal` can hold.
const THOUSANDS_GROUPING: &[usize] = &[3, 3, 3, 3, 3, 3, 3, 3, 3];

const SYMBOL_FIRST: &[Position] = &[Position::Sign, Position::Symbol, Position::Amount];
const SYMBOL_LAST: &[Position] = &[Position::Sign, Position::Amount, Position::Symbol];

/// Errors raised while reading a date string.
#[derive(Debug, Error)]
pub enum DateError {
    /// The input is not an instant, a civil date-time or a civil date.
    #[error("could not parse date {input:?}: {source}")]
    Parse {
        /// Input as given
        input: String,

        /// Error from the last parse attempt
        source: jiff::Error,
    },

    /// The input is a civil time that does not exist in the time zone.
    #[error("could not place {input:?} in time zone: {source}")]
    TimeZone {
        /// Input as given
        input: String,

        /// Error from the time zone conversion
        source: jiff::Error,
    },
}

/// Parses an ISO 8601 date string into an instant.
///
/// Accepted forms, tried in order:
/// - an instant with an offset, e.g. `2024-01-15T10:30:00Z`
/// - a bare date, read as UTC midnight
/// - a civil date-time without offset, read in `tz`
///
/// # Errors
///
/// Returns [`DateError::Parse`] if none of the forms match and
/// [`DateError::TimeZone`] if a civil date-time cannot be placed in `tz`.
pub fn parse_timestamp(input: &str, tz: &TimeZone) -> Result<Timestamp, DateError> {
    let trimmed = input.trim();

    if let Ok(timestamp) = trimmed.parse::<Timestamp>() {
        return Ok(timestamp);
    }

    if is_bare_date(trimmed) {
        let date = trimmed
            .parse::<Date>()
            .map_err(|source| DateError::Parse {
                input: input.to_string(),
                source,
            })?;

        return TimeZone::UTC
            .to_timestamp(date.to_datetime(Time::midnight()))
            .map_err(|source| DateError::TimeZone {
                input: input.to_string(),
                source,
            });
    }

    let datetime = trimmed
        .parse::<DateTime>()
        .map_err(|source| DateError::Parse {
            input: input.to_string(),
            source,
        })?;

    tz.to_timestamp(datetime)
        .map_err(|source| DateError::TimeZone {
            input: input.to_string(),
            source,
        })
}

fn is_bare_date(input: &str) -> bool {
    !input.contains(['T', 't', ' '])
}

/// Renders dates in a fixed display time zone.
#[derive(Debug, Clone)]
pub struct DateFormatter {
    tz: TimeZone,
}

impl Default for DateFormatter {
    fn default() -> Self {
        Self::new(TimeZone::UTC)
    }
}

impl DateFormatter {
    /// Creates a formatter showing times in `tz`.
    pub fn new(tz: TimeZone) -> Self {
        Self { tz }
    }

    /// Display time zone
    pub fn time_zone(&self) -> &TimeZone {
        &self.tz
    }

    /// Parses `input`, reading civil date-times in the display time zone.
    ///
    /// # Errors
    ///
    /// See [`parse_timestamp`].
    pub fn parse(&self, input: &str) -> Result<Timestamp, DateError> {
        parse_timestamp(input, &self.tz)
    }

    /// Renders an instant in the `en-IN` long form.
    pub fn format_timestamp(&self, timestamp: Timestamp) -> String {
        timestamp
            .to_zoned(self.tz.clone())
            .strftime(DISPLAY_PATTERN)
            .to_string()
    }

    /// Renders a date string in the `en-IN` long form, or [`INVALID_DATE`].
    pub fn format_date(&self, input: &str) -> String {
        match self.parse(input) {
            Ok(timestamp) => self.format_timestamp(timestamp),
            Err(err) => invalid_date(&err),
        }
    }

    /// Renders a date string as a UTC `YYYY-MM-DDTHH:mm` input value, or [`INVALID_DATE`].
    pub fn format_date_for_input(&self, input: &str) -> String {
        match self.parse(input) {
            Ok(timestamp) => format_timestamp_for_input(timestamp),
            Err(err) => invalid_date(&err),
        }
    }
}

fn invalid_date(err: &DateError) -> String {
    warn!(error = %err, "rendering invalid date");

    INVALID_DATE.to_string()
}

/// Renders an instant as a UTC `YYYY-MM-DDTHH:mm` input value.
pub fn format_timestamp_for_input(timestamp: Timestamp) -> String {
    timestamp.strftime(INPUT_PATTERN).to_string()
}

/// Renders a date string in the `en-IN` long form, in UTC.
pub fn format_date(input: &str) -> String {
    DateFormatter::default().format_date(input)
}

/// Renders a date string as a UTC `YYYY-MM-DDTHH:mm` input value.
pub fn format_date_for_input(input: &str) -> String {
    DateFormatter::default().format_date_for_input(input)
}

/// Renders an amount as Indian rupees, rounded to whole paise.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    format_money(&Money::from_decimal(rounded, iso::INR))
}

/// Renders money using its currency's locale conventions.
///
/// Digit groups repeat across the whole amount, so `en-IN` amounts keep
/// crore grouping past ₹99,99,99,999 (`₹1,23,45,67,890.12`).
pub fn format_money(money: &Money<'_, Currency>) -> String {
    let currency = money.currency();
    let locale = LocalFormat::from_locale(currency.locale());

    let separator_pattern = match currency.locale() {
        Locale::EnIn => INDIAN_GROUPING,
        _ => THOUSANDS_GROUPING,
    };

    let positions = if currency.symbol_first() {
        SYMBOL_FIRST
    } else {
        SYMBOL_LAST
    };

    Formatter::money(
        money,
        Params {
            digit_separator: locale.digit_separator,
            exponent_separator: locale.exponent_separator,
            separator_pattern,
            positions,
            rounding: Some(currency.exponent()),
            symbol: Some(currency.symbol()),
            code: Some(currency.code()),
        },
    )
}

#[cfg(test)]
mod tests {
    use jiff::tz::Offset;
    use testresult::TestResult;

    use super::*;

    fn ist() -> Result<TimeZone, jiff::Error> {
        Ok(TimeZone::fixed(Offset::from_seconds(19_800)?))
    }

    #[test]
    fn parse_accepts_instants() -> TestResult {
        let timestamp = parse_timestamp("2024-01-15T10:30:00Z", &TimeZone::UTC)?;

        assert_eq!(timestamp, Timestamp::constant(1_705_314_600, 0));

        let timestamp = parse_timestamp("2024-01-15T16:00:00+05:30", &TimeZone::UTC)?;

        assert_eq!(timestamp, Timestamp::constant(1_705_314_600, 0));

        Ok(())
    }

    #[test]
    fn parse_reads_civil_datetime_in_time_zone() -> TestResult {
        let timestamp = parse_timestamp("2024-01-15T16:00:00", &ist()?)?;

        assert_eq!(timestamp, Timestamp::constant(1_705_314_600, 0));

        Ok(())
    }

    #[test]
    fn parse_reads_bare_date_as_utc_midnight() -> TestResult {
        let timestamp = parse_timestamp("2024-01-15", &ist()?)?;

        assert_eq!(timestamp, Timestamp::constant(1_705_276_800, 0));

        Ok(())
    }

    #[test]
    fn parse_rejects_garbage() {
        let result = parse_timestamp("next tuesday", &TimeZone::UTC);

        assert!(matches!(result, Err(DateError::Parse { input, .. }) if input == "next tuesday"));
    }

    #[test]
    fn format_date_uses_en_in_long_form() {
        assert_eq!(format_date("2024-01-15T10:30:00Z"), "15 Jan 2024, 10:30 am");
        assert_eq!(format_date("2024-03-05T18:05:00Z"), "5 Mar 2024, 06:05 pm");
    }

    #[test]
    fn format_date_in_display_time_zone() -> TestResult {
        let formatter = DateFormatter::new(ist()?);

        assert_eq!(
            formatter.format_date("2024-01-15T10:30:00Z"),
            "15 Jan 2024, 04:00 pm"
        );

        Ok(())
    }

    #[test]
    fn format_date_marks_invalid_input() {
        assert_eq!(format_date("not a date"), INVALID_DATE);
        assert_eq!(format_date(""), INVALID_DATE);
    }

    #[test]
    fn format_date_is_idempotent() {
        let first = format_date("2025-10-15T00:00:00Z");
        let second = format_date("2025-10-15T00:00:00Z");

        assert_eq!(first, second);
    }

    #[test]
    fn input_value_is_truncated_to_minutes_in_utc() {
        assert_eq!(
            format_date_for_input("2024-01-15T10:30:45.123Z"),
            "2024-01-15T10:30"
        );
        assert_eq!(
            format_date_for_input("2024-01-15T16:00:59+05:30"),
            "2024-01-15T10:30"
        );
    }

    #[test]
    fn input_value_ignores_display_time_zone_for_instants() -> TestResult {
        let formatter = DateFormatter::new(ist()?);

        assert_eq!(
            formatter.format_date_for_input("2024-01-15T10:30:00Z"),
            "2024-01-15T10:30"
        );

        Ok(())
    }

    #[test]
    fn input_value_marks_invalid_input() {
        assert_eq!(format_date_for_input("2024-13-45"), INVALID_DATE);
    }

    #[test]
    fn currency_uses_rupee_symbol_and_two_decimals() {
        assert_eq!(format_currency(Decimal::new(1299, 0)), "₹1,299.00");
        assert_eq!(format_currency(Decimal::new(69_950, 2)), "₹699.50");
    }

    #[test]
    fn currency_uses_lakh_grouping() {
        assert_eq!(format_currency(Decimal::new(129_999, 0)), "₹1,29,999.00");
    }

    #[test]
    fn currency_uses_crore_grouping() {
        assert_eq!(format_currency(Decimal::new(1_00_00_000, 0)), "₹1,00,00,000.00");
        assert_eq!(format_currency(Decimal::new(10_00_00_000, 0)), "₹10,00,00,000.00");
    }

    #[test]
    fn currency_keeps_grouping_past_hundred_crore() {
        assert_eq!(
            format_currency(Decimal::new(1_234_567_890_12, 2)),
            "₹1,23,45,67,890.12"
        );
        assert_eq!(
            format_currency(Decimal::new(-1_234_567_890_12, 2)),
            "-₹1,23,45,67,890.12"
        );
    }

    #[test]
    fn currency_small_amounts() {
        assert_eq!(format_currency(Decimal::new(50, 2)), "₹0.50");
        assert_eq!(format_currency(Decimal::ZERO), "₹0.00");
        assert_eq!(format_currency(Decimal::new(-50, 0)), "-₹50.00");
    }

    #[test]
    fn non_indian_currency_keeps_thousands_grouping() {
        let money = Money::from_minor(123_456_789_012_345, iso::USD);

        assert_eq!(format_money(&money), "$1,234,567,890,123.45");
    }

    #[test]
    fn currency_rounds_to_paise() {
        assert_eq!(format_currency(Decimal::new(10_005, 3)), "₹10.01");
        assert_eq!(format_currency(Decimal::new(10_004, 3)), "₹10.00");
    }

    #[test]
    fn money_formatting_matches_decimal_formatting() {
        let money = Money::from_minor(1_874_925, iso::INR);

        assert_eq!(format_money(&money), format_currency(Decimal::new(1_874_925, 2)));
    }
}
