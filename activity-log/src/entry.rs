use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

/// Display format for entry timestamps, e.g. `2024-07-01 3:04PM`.
pub const TIME_FORMAT: &str = "%Y-%m-%d %-I:%M%p";

/// One recorded user action. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// Pre-formatted timestamp, see [`TIME_FORMAT`]
    pub time: String,
    /// Free-text description of the action
    pub activity: String,
}

impl ActivityEntry {
    /// Create an entry stamped with the given instant
    pub fn new<Tz: TimeZone>(activity: impl Into<String>, at: DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            time: at.format(TIME_FORMAT).to_string(),
            activity: activity.into(),
        }
    }
}
