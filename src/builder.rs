//! Cron expression builder
//!
//! The inverse of the parser: emits the canonical cron string for an intent.
//! The seconds field is only written when it is non-zero (or when the cadence
//! itself is in seconds), so the common case stays the 5-field form.

use crate::intent::{IntervalUnit, ScheduleIntent};

/// Largest step the classifier reads back (`u32`)
pub const MAX_EVERY: i64 = u32::MAX as i64;

/// Clamp an interval count to a whole number in `1..=MAX_EVERY`
///
/// Non-finite input clamps to 1 as well.
pub fn clamp_every(every: f64) -> i64 {
    if !every.is_finite() {
        return 1;
    }
    // Saturating float-to-int cast
    (every.round() as i64).clamp(1, MAX_EVERY)
}

pub(crate) fn clamp_hour(hour: u32) -> u32 {
    hour.min(23)
}

/// Minutes, seconds and offsets
pub(crate) fn clamp_sixty(value: u32) -> u32 {
    value.min(59)
}

/// 7 is Sunday; anything else above 6 caps at Saturday
pub(crate) fn clamp_day_of_week(day: u32) -> u32 {
    if day == 7 {
        0
    } else {
        day.min(6)
    }
}

pub(crate) fn clamp_day_of_month(day: u32) -> u32 {
    day.clamp(1, 31)
}

/// Bring every numeric field of an intent into its legal range
///
/// Intents built in code or deserialized from the host can carry any
/// value; the normalized form always builds into text the parser reads
/// back as the same intent.
pub fn normalize(intent: &ScheduleIntent) -> ScheduleIntent {
    match intent {
        ScheduleIntent::Interval {
            unit,
            every,
            minute_offset,
            second_offset,
        } => {
            let every = (*every).clamp(1, MAX_EVERY);
            match unit {
                IntervalUnit::Seconds => ScheduleIntent::every_seconds(every),
                IntervalUnit::Minutes => {
                    ScheduleIntent::every_minutes(every, clamp_sixty(*second_offset))
                }
                IntervalUnit::Hours => ScheduleIntent::every_hours(
                    every,
                    clamp_sixty(*minute_offset),
                    clamp_sixty(*second_offset),
                ),
            }
        }
        ScheduleIntent::Daily {
            hour,
            minute,
            second,
        } => ScheduleIntent::daily(clamp_hour(*hour), clamp_sixty(*minute), clamp_sixty(*second)),
        ScheduleIntent::Weekly {
            day_of_week,
            hour,
            minute,
            second,
        } => ScheduleIntent::weekly(
            clamp_day_of_week(*day_of_week),
            clamp_hour(*hour),
            clamp_sixty(*minute),
            clamp_sixty(*second),
        ),
        ScheduleIntent::Monthly {
            day_of_month,
            hour,
            minute,
            second,
        } => ScheduleIntent::monthly(
            clamp_day_of_month(*day_of_month),
            clamp_hour(*hour),
            clamp_sixty(*minute),
            clamp_sixty(*second),
        ),
        ScheduleIntent::Custom { raw } => ScheduleIntent::custom(raw.clone()),
    }
}

/// Build the cron expression for an intent
///
/// Out-of-range fields are clamped first (see [`normalize`]).
///
/// # Examples
///
/// ```
/// use a3s_schedule::{build, ScheduleIntent};
///
/// assert_eq!(build(&ScheduleIntent::daily(6, 0, 0)), "0 6 * * *");
/// assert_eq!(build(&ScheduleIntent::every_minutes(15, 0)), "*/15 * * * *");
/// assert_eq!(build(&ScheduleIntent::every_seconds(10)), "*/10 * * * * *");
/// assert_eq!(build(&ScheduleIntent::monthly(15, 2, 30, 0)), "30 2 15 * *");
/// ```
pub fn build(intent: &ScheduleIntent) -> String {
    if let ScheduleIntent::Custom { raw } = intent {
        return raw.clone();
    }

    match normalize(intent) {
        ScheduleIntent::Interval {
            unit,
            every,
            minute_offset,
            second_offset,
        } => match unit {
            IntervalUnit::Seconds => format!("*/{} * * * * *", every),
            IntervalUnit::Minutes => with_seconds(second_offset, format!("*/{} * * * *", every)),
            IntervalUnit::Hours => with_seconds(
                second_offset,
                format!("{} */{} * * *", minute_offset, every),
            ),
        },
        ScheduleIntent::Daily {
            hour,
            minute,
            second,
        } => with_seconds(second, format!("{} {} * * *", minute, hour)),
        ScheduleIntent::Weekly {
            day_of_week,
            hour,
            minute,
            second,
        } => with_seconds(second, format!("{} {} * * {}", minute, hour, day_of_week)),
        ScheduleIntent::Monthly {
            day_of_month,
            hour,
            minute,
            second,
        } => with_seconds(second, format!("{} {} {} * *", minute, hour, day_of_month)),
        ScheduleIntent::Custom { raw } => raw,
    }
}

fn with_seconds(second: u32, rest: String) -> String {
    if second > 0 {
        format!("{} {}", second, rest)
    } else {
        rest
    }
}
