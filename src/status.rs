//! Sale Status

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Colour used for values outside the status taxonomy.
pub const DEFAULT_STATUS_COLOR: &str = "#666";

/// Errors raised when parsing a status value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatusError {
    /// The value is not one of the known status values.
    #[error("unknown sale status: {0}")]
    Unknown(String),
}

/// Lifecycle phase of a flash sale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// The sale is running.
    Active,

    /// The sale has been switched off by hand. Overrides the date window.
    Inactive,

    /// The sale window has not opened yet.
    Scheduled,

    /// The sale window has closed.
    Expired,
}

impl Status {
    /// Every status, in display order.
    pub const ALL: [Status; 4] = [
        Status::Active,
        Status::Inactive,
        Status::Scheduled,
        Status::Expired,
    ];

    /// Wire value, as stored on a sale and sent to the UI.
    pub const fn as_str(self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Inactive => "inactive",
            Status::Scheduled => "scheduled",
            Status::Expired => "expired",
        }
    }

    /// Human readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::Inactive => "Inactive",
            Status::Scheduled => "Scheduled",
            Status::Expired => "Expired",
        }
    }

    /// Hex colour used to badge the status.
    pub const fn color(self) -> &'static str {
        match self {
            Status::Active => "#52c41a",
            Status::Inactive => "#ff4d4f",
            Status::Scheduled => "#1890ff",
            Status::Expired => "#8c8c8c",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| StatusError::Unknown(s.to_string()))
    }
}

/// A `value`/`label` pair for status pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusOption {
    /// Wire value
    pub value: &'static str,

    /// Display label
    pub label: &'static str,
}

impl From<Status> for StatusOption {
    fn from(status: Status) -> Self {
        Self {
            value: status.as_str(),
            label: status.label(),
        }
    }
}

/// Options offered by status selectors, in display order.
pub static STATUS_OPTIONS: [StatusOption; 4] = [
    StatusOption {
        value: Status::Active.as_str(),
        label: Status::Active.label(),
    },
    StatusOption {
        value: Status::Inactive.as_str(),
        label: Status::Inactive.label(),
    },
    StatusOption {
        value: Status::Scheduled.as_str(),
        label: Status::Scheduled.label(),
    },
    StatusOption {
        value: Status::Expired.as_str(),
        label: Status::Expired.label(),
    },
];

/// Returns the label for a status value, or the value itself when it is unknown.
pub fn status_label(value: &str) -> &str {
    value
        .parse::<Status>()
        .map_or(value, |status| status.label())
}

/// Returns the badge colour for a status value, or [`DEFAULT_STATUS_COLOR`].
pub fn status_color(value: &str) -> &'static str {
    value
        .parse::<Status>()
        .map_or(DEFAULT_STATUS_COLOR, Status::color)
}
