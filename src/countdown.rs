//! Countdown

use std::fmt;

use jiff::{Timestamp, tz::TimeZone};

use crate::format::parse_timestamp;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// Time left until a sale ends, split into whole units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Remaining {
    /// The end has passed, or is exactly now.
    Expired,

    /// Time is left on the clock.
    Left {
        /// Whole days
        days: i64,

        /// Hours past the whole days, `0..24`
        hours: i64,

        /// Minutes past the whole hours, `0..60`
        minutes: i64,
    },
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Remaining::Expired => f.write_str("Expired"),
            Remaining::Left { days, hours, .. } if days > 0 => {
                write!(f, "{days}d {hours}h remaining")
            }
            Remaining::Left { hours, minutes, .. } if hours > 0 => {
                write!(f, "{hours}h {minutes}m remaining")
            }
            Remaining::Left { minutes, .. } => write!(f, "{minutes}m remaining"),
        }
    }
}

/// Computes the time left between `now` and `end`, at millisecond resolution.
pub fn remaining(end: Timestamp, now: Timestamp) -> Remaining {
    let diff = end.duration_since(now);

    if diff.as_millis() <= 0 {
        return Remaining::Expired;
    }

    let seconds = diff.as_secs();

    Remaining::Left {
        days: seconds / SECONDS_PER_DAY,
        hours: seconds / SECONDS_PER_HOUR % 24,
        minutes: seconds / SECONDS_PER_MINUTE % 60,
    }
}

/// String form of [`remaining`].
///
/// A sale whose end date cannot be parsed is treated as over and reads as `Expired`.
pub fn get_remaining_time(end: &str, now: Timestamp) -> String {
    parse_timestamp(end, &TimeZone::UTC)
        .map_or(Remaining::Expired, |end| remaining(end, now))
        .to_string()
}

#[cfg(test)]
mod tests {
    use jiff::SignedDuration;

    use super::*;

    const NOW: Timestamp = Timestamp::constant(1_760_000_000, 0);

    #[test]
    fn days_and_hours() {
        let end = NOW + SignedDuration::from_hours(2 * 24 + 3);

        assert_eq!(remaining(end, NOW).to_string(), "2d 3h remaining");
    }

    #[test]
    fn hours_and_minutes() {
        let end = NOW + SignedDuration::from_mins(5 * 60 + 42);

        assert_eq!(remaining(end, NOW).to_string(), "5h 42m remaining");
    }

    #[test]
    fn minutes_only() {
        let end = NOW + SignedDuration::from_secs(7 * 60 + 59);

        assert_eq!(remaining(end, NOW).to_string(), "7m remaining");
    }

    #[test]
    fn under_a_minute_still_counts_down() {
        let end = NOW + SignedDuration::from_secs(30);

        assert_eq!(remaining(end, NOW).to_string(), "0m remaining");
    }

    #[test]
    fn past_end_is_expired() {
        let end = NOW - SignedDuration::from_hours(1);

        assert_eq!(remaining(end, NOW), Remaining::Expired);
        assert_eq!(remaining(end, NOW).to_string(), "Expired");
    }

    #[test]
    fn exact_end_is_expired() {
        assert_eq!(remaining(NOW, NOW), Remaining::Expired);
    }

    #[test]
    fn sub_millisecond_gap_is_expired() {
        let end = NOW + SignedDuration::from_micros(500);

        assert_eq!(remaining(end, NOW), Remaining::Expired);
    }

    #[test]
    fn components_wrap() {
        let end = NOW + SignedDuration::from_secs(SECONDS_PER_DAY + 23 * SECONDS_PER_HOUR + 59 * 60);

        assert_eq!(
            remaining(end, NOW),
            Remaining::Left {
                days: 1,
                hours: 23,
                minutes: 59,
            }
        );
    }

    #[test]
    fn string_form_parses_end_date() {
        assert_eq!(
            get_remaining_time("2025-10-10T08:53:20Z", NOW),
            "1d 0h remaining"
        );
        assert_eq!(get_remaining_time("2020-01-01", NOW), "Expired");
    }

    #[test]
    fn unreadable_end_date_is_treated_as_over() {
        assert_eq!(get_remaining_time("whenever", NOW), "Expired");
        assert_eq!(get_remaining_time("", NOW), "Expired");
    }
}
