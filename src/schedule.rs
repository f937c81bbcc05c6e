//! Sale Schedule
//!
//! Derives the status a sale should be shown with from its date window. The
//! derivation is recomputed on every call; nothing is cached and no status is
//! ever written back.

use jiff::{Timestamp, tz::TimeZone};
use tracing::warn;

use crate::{format::parse_timestamp, status::Status};

/// Derives the displayed status of a sale at `now`.
///
/// `Inactive` always wins. Otherwise the sale is `Scheduled` before `start`,
/// `Expired` after `end` and `Active` in between, bounds included.
pub fn sale_status(start: Timestamp, end: Timestamp, current: Status, now: Timestamp) -> Status {
    if current == Status::Inactive {
        Status::Inactive
    } else if now < start {
        Status::Scheduled
    } else if now > end {
        Status::Expired
    } else {
        Status::Active
    }
}

/// String form of [`sale_status`], returning the status wire value.
///
/// A date that cannot be parsed never compares before or after `now`, so an
/// unreadable window falls through to `active`. Any current status other than
/// `inactive` is date-derived, including unknown values.
pub fn get_sale_status(start: &str, end: &str, current: &str, now: Timestamp) -> String {
    if current == Status::Inactive.as_str() {
        return Status::Inactive.to_string();
    }

    let start = parse_bound(start);
    let end = parse_bound(end);

    let status = if start.is_some_and(|start| now < start) {
        Status::Scheduled
    } else if end.is_some_and(|end| now > end) {
        Status::Expired
    } else {
        Status::Active
    };

    status.to_string()
}

fn parse_bound(input: &str) -> Option<Timestamp> {
    parse_timestamp(input, &TimeZone::UTC)
        .inspect_err(|err| warn!(error = %err, "sale window bound is not a date"))
        .ok()
}
