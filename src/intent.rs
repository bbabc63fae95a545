//! Structured schedule intents
//!
//! A [`ScheduleIntent`] is the UI-friendly form of a cron expression: one
//! mode plus the numbers that mode needs. Each variant carries only its own
//! payload, so switching modes never leaves stale fields behind.
//!
//! All types use camelCase JSON serialization for exchange with the host UI.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;

/// Unit of an [`ScheduleIntent::Interval`] cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntervalUnit {
    Seconds,
    Minutes,
    Hours,
}

impl fmt::Display for IntervalUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntervalUnit::Seconds => write!(f, "seconds"),
            IntervalUnit::Minutes => write!(f, "minutes"),
            IntervalUnit::Hours => write!(f, "hours"),
        }
    }
}

/// Mode selector value, one per intent variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleMode {
    Interval,
    Daily,
    Weekly,
    Monthly,
    Custom,
}

impl fmt::Display for ScheduleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleMode::Interval => write!(f, "interval"),
            ScheduleMode::Daily => write!(f, "daily"),
            ScheduleMode::Weekly => write!(f, "weekly"),
            ScheduleMode::Monthly => write!(f, "monthly"),
            ScheduleMode::Custom => write!(f, "custom"),
        }
    }
}

/// Time of day shared by the daily, weekly and monthly modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }
}

/// Structured "when to run" state, convertible to and from a cron expression
///
/// Day of week is always 0-6 with 0 = Sunday. Day of month is 1-31.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "mode",
    rename_all = "lowercase",
    rename_all_fields = "camelCase"
)]
pub enum ScheduleIntent {
    /// Every `every` units. `minute_offset` only matters for hours,
    /// `second_offset` for minutes and hours.
    Interval {
        unit: IntervalUnit,
        every: i64,
        #[serde(default)]
        minute_offset: u32,
        #[serde(default)]
        second_offset: u32,
    },
    /// Every day at a fixed time
    Daily { hour: u32, minute: u32, second: u32 },
    /// One weekday per week at a fixed time
    Weekly {
        day_of_week: u32,
        hour: u32,
        minute: u32,
        second: u32,
    },
    /// One day per month at a fixed time
    Monthly {
        day_of_month: u32,
        hour: u32,
        minute: u32,
        second: u32,
    },
    /// Opaque expression text the structured modes cannot represent
    Custom { raw: String },
}

impl ScheduleIntent {
    /// Every `every` seconds
    pub fn every_seconds(every: i64) -> Self {
        Self::Interval {
            unit: IntervalUnit::Seconds,
            every,
            minute_offset: 0,
            second_offset: 0,
        }
    }

    /// Every `every` minutes at `second_offset` past the minute
    pub fn every_minutes(every: i64, second_offset: u32) -> Self {
        Self::Interval {
            unit: IntervalUnit::Minutes,
            every,
            minute_offset: 0,
            second_offset,
        }
    }

    /// Every `every` hours at `minute_offset:second_offset` past the hour
    pub fn every_hours(every: i64, minute_offset: u32, second_offset: u32) -> Self {
        Self::Interval {
            unit: IntervalUnit::Hours,
            every,
            minute_offset,
            second_offset,
        }
    }

    pub fn daily(hour: u32, minute: u32, second: u32) -> Self {
        Self::Daily {
            hour,
            minute,
            second,
        }
    }

    pub fn weekly(day_of_week: u32, hour: u32, minute: u32, second: u32) -> Self {
        Self::Weekly {
            day_of_week,
            hour,
            minute,
            second,
        }
    }

    pub fn monthly(day_of_month: u32, hour: u32, minute: u32, second: u32) -> Self {
        Self::Monthly {
            day_of_month,
            hour,
            minute,
            second,
        }
    }

    pub fn custom(raw: impl Into<String>) -> Self {
        Self::Custom { raw: raw.into() }
    }

    /// The mode selector value for this intent
    pub fn mode(&self) -> ScheduleMode {
        match self {
            Self::Interval { .. } => ScheduleMode::Interval,
            Self::Daily { .. } => ScheduleMode::Daily,
            Self::Weekly { .. } => ScheduleMode::Weekly,
            Self::Monthly { .. } => ScheduleMode::Monthly,
            Self::Custom { .. } => ScheduleMode::Custom,
        }
    }

    /// Whether this intent is one of the structured (non-custom) modes
    pub fn is_structured(&self) -> bool {
        !matches!(self, Self::Custom { .. })
    }

    /// Time of day for the daily, weekly and monthly modes
    pub fn time_of_day(&self) -> Option<TimeOfDay> {
        match *self {
            Self::Daily {
                hour,
                minute,
                second,
            }
            | Self::Weekly {
                hour,
                minute,
                second,
                ..
            }
            | Self::Monthly {
                hour,
                minute,
                second,
                ..
            } => Some(TimeOfDay::new(hour, minute, second)),
            _ => None,
        }
    }

    /// The weekday of a weekly intent
    pub fn weekday(&self) -> Option<Weekday> {
        match self {
            Self::Weekly { day_of_week, .. } => weekday_from_cron(*day_of_week),
            _ => None,
        }
    }
}

impl ScheduleIntent {
    /// Decode an intent sent by the host as JSON
    ///
    /// Numeric fields are brought into range, so the result always builds
    /// into an expression that parses back to it.
    pub fn from_json(json: &str) -> Result<Self> {
        let intent: ScheduleIntent = serde_json::from_str(json)?;
        Ok(crate::builder::normalize(&intent))
    }

    /// Encode this intent as JSON for the host
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for ScheduleIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::builder::build(self))
    }
}

impl From<&str> for ScheduleIntent {
    fn from(expression: &str) -> Self {
        crate::parser::parse(expression)
    }
}

/// Map a cron day-of-week (0 or 7 = Sunday) to a chrono weekday
pub fn weekday_from_cron(day: u32) -> Option<Weekday> {
    match day {
        0 | 7 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}
