//! Cron expression parser
//!
//! Turns a cron string into a [`ScheduleIntent`]. Accepts 5-field or
//! 6-field syntax:
//! ```text
//! ┌───────────── second (0-59, optional)
//! │ ┌───────────── minute (0-59)
//! │ │ ┌───────────── hour (0-23)
//! │ │ │ ┌───────────── day of month (1-31)
//! │ │ │ │ ┌───────────── month (1-12)
//! │ │ │ │ │ ┌───────────── day of week (0-7, 0 and 7 = Sunday)
//! │ │ │ │ │ │
//! * * * * * *
//! ```
//!
//! Shapes are matched in a fixed priority order; anything that does not fit
//! is kept verbatim as [`ScheduleIntent::Custom`].

use crate::field::{classify, CronField};
use crate::intent::{IntervalUnit, ScheduleIntent};

const MAX_SECOND: u32 = 59;
const MAX_MINUTE: u32 = 59;
const MAX_HOUR: u32 = 23;

/// The six classified fields of an expression, seconds first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CronFields {
    pub second: CronField,
    pub minute: CronField,
    pub hour: CronField,
    pub day_of_month: CronField,
    pub month: CronField,
    pub day_of_week: CronField,
}

impl CronFields {
    /// Split and classify an expression
    ///
    /// A 5-field expression gets a synthetic `0` seconds field. Any other
    /// field count than 5 or 6 yields `None`.
    pub fn split(expression: &str) -> Option<Self> {
        let parts: Vec<&str> = expression.split_whitespace().collect();
        let parts: [&str; 6] = match parts.as_slice() {
            &[m, h, dom, mon, dow] => ["0", m, h, dom, mon, dow],
            &[s, m, h, dom, mon, dow] => [s, m, h, dom, mon, dow],
            _ => return None,
        };

        Some(Self {
            second: classify(parts[0]),
            minute: classify(parts[1]),
            hour: classify(parts[2]),
            day_of_month: classify(parts[3]),
            month: classify(parts[4]),
            day_of_week: classify(parts[5]),
        })
    }

    fn iter(&self) -> impl Iterator<Item = &CronField> {
        [
            &self.second,
            &self.minute,
            &self.hour,
            &self.day_of_month,
            &self.month,
            &self.day_of_week,
        ]
        .into_iter()
    }

    /// Whether every field is a wildcard, fixed value or step
    pub fn all_supported(&self) -> bool {
        self.iter().all(CronField::is_supported)
    }

    /// Seconds offset for shapes below one-second precision: a fixed second
    /// in range, or 0 for a wildcard. Steps do not qualify.
    fn second_offset(&self) -> Option<u32> {
        match self.second {
            CronField::Wildcard => Some(0),
            CronField::Fixed(n) => in_range(n, 0, MAX_SECOND),
            _ => None,
        }
    }

    fn fixed_time(&self) -> Option<(u32, u32, u32)> {
        let hour = self.hour.fixed().and_then(|h| in_range(h, 0, MAX_HOUR))?;
        let minute = self.minute.fixed().and_then(|m| in_range(m, 0, MAX_MINUTE))?;
        let second = self.second_offset()?;
        Some((hour, minute, second))
    }

    fn calendar_wildcards(&self) -> bool {
        self.day_of_month.is_wildcard() && self.month.is_wildcard() && self.day_of_week.is_wildcard()
    }
}

fn in_range(value: u32, min: u32, max: u32) -> Option<u32> {
    (min..=max).contains(&value).then_some(value)
}

/// Parse a cron expression into a schedule intent
///
/// Never fails: text that no structured shape can hold comes back as
/// `Custom` with the original text untouched.
///
/// # Examples
///
/// ```
/// use a3s_schedule::{parse, ScheduleIntent};
///
/// assert_eq!(parse("0 6 * * *"), ScheduleIntent::daily(6, 0, 0));
/// assert_eq!(parse("*/15 * * * *"), ScheduleIntent::every_minutes(15, 0));
/// assert_eq!(parse("0 9 * * 1"), ScheduleIntent::weekly(1, 9, 0, 0));
/// assert_eq!(parse("0 6 1,15 * *"), ScheduleIntent::custom("0 6 1,15 * *"));
/// ```
pub fn parse(expression: &str) -> ScheduleIntent {
    let Some(fields) = CronFields::split(expression) else {
        tracing::trace!(expression, "Unexpected field count, keeping as custom");
        return ScheduleIntent::custom(expression);
    };

    if !fields.all_supported() {
        tracing::trace!(expression, "Unsupported field syntax, keeping as custom");
        return ScheduleIntent::custom(expression);
    }

    let intent = match_interval_seconds(&fields)
        .or_else(|| match_interval_minutes(&fields))
        .or_else(|| match_interval_hours(&fields))
        .or_else(|| match_daily(&fields))
        .or_else(|| match_weekly(&fields))
        .or_else(|| match_monthly(&fields));

    match intent {
        Some(intent) => intent,
        None => {
            tracing::trace!(expression, "No structured shape matched, keeping as custom");
            ScheduleIntent::custom(expression)
        }
    }
}

fn match_interval_seconds(f: &CronFields) -> Option<ScheduleIntent> {
    let every = f.second.step()?;
    if !(f.minute.is_wildcard() && f.hour.is_wildcard() && f.calendar_wildcards()) {
        return None;
    }
    Some(ScheduleIntent::every_seconds(i64::from(every)))
}

fn match_interval_minutes(f: &CronFields) -> Option<ScheduleIntent> {
    let every = f.minute.step()?;
    if !(f.hour.is_wildcard() && f.calendar_wildcards()) {
        return None;
    }
    let second_offset = f.second_offset()?;
    Some(ScheduleIntent::every_minutes(i64::from(every), second_offset))
}

fn match_interval_hours(f: &CronFields) -> Option<ScheduleIntent> {
    let every = f.hour.step()?;
    if !f.calendar_wildcards() {
        return None;
    }
    let minute_offset = f.minute.fixed().and_then(|m| in_range(m, 0, MAX_MINUTE))?;
    let second_offset = f.second_offset()?;
    Some(ScheduleIntent::Interval {
        unit: IntervalUnit::Hours,
        every: i64::from(every),
        minute_offset,
        second_offset,
    })
}

fn match_daily(f: &CronFields) -> Option<ScheduleIntent> {
    if !f.calendar_wildcards() {
        return None;
    }
    let (hour, minute, second) = f.fixed_time()?;
    Some(ScheduleIntent::daily(hour, minute, second))
}

fn match_weekly(f: &CronFields) -> Option<ScheduleIntent> {
    let day = f.day_of_week.fixed()?;
    if !(f.day_of_month.is_wildcard() && f.month.is_wildcard()) {
        return None;
    }
    let day = if day == 7 { 0 } else { day };
    if day > 6 {
        return None;
    }
    let (hour, minute, second) = f.fixed_time()?;
    Some(ScheduleIntent::weekly(day, hour, minute, second))
}

fn match_monthly(f: &CronFields) -> Option<ScheduleIntent> {
    let day = f.day_of_month.fixed().and_then(|d| in_range(d, 1, 31))?;
    if !(f.month.is_wildcard() && f.day_of_week.is_wildcard()) {
        return None;
    }
    let (hour, minute, second) = f.fixed_time()?;
    Some(ScheduleIntent::monthly(day, hour, minute, second))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_daily() {
        assert_eq!(parse("0 6 * * *"), ScheduleIntent::daily(6, 0, 0));
        assert_eq!(parse("30 23 * * *"), ScheduleIntent::daily(23, 30, 0));
        assert_eq!(parse("15 30 23 * * *"), ScheduleIntent::daily(23, 30, 15));
    }

    #[test]
    fn test_parse_interval_minutes() {
        assert_eq!(parse("*/15 * * * *"), ScheduleIntent::every_minutes(15, 0));
        assert_eq!(parse("10 */5 * * * *"), ScheduleIntent::every_minutes(5, 10));
        assert_eq!(parse("* */5 * * * *"), ScheduleIntent::every_minutes(5, 0));
    }

    #[test]
    fn test_parse_interval_seconds() {
        assert_eq!(parse("*/30 * * * * *"), ScheduleIntent::every_seconds(30));
    }

    #[test]
    fn test_parse_interval_seconds_requires_wildcards() {
        assert_eq!(
            parse("*/30 5 * * * *"),
            ScheduleIntent::custom("*/30 5 * * * *")
        );
    }

    #[test]
    fn test_parse_interval_hours() {
        assert_eq!(parse("0 */2 * * *"), ScheduleIntent::every_hours(2, 0, 0));
        assert_eq!(parse("45 */6 * * *"), ScheduleIntent::every_hours(6, 45, 0));
        assert_eq!(parse("20 45 */6 * * *"), ScheduleIntent::every_hours(6, 45, 20));
    }

    #[test]
    fn test_parse_interval_hours_needs_fixed_minute() {
        assert_eq!(parse("* */2 * * *"), ScheduleIntent::custom("* */2 * * *"));
        assert_eq!(parse("*/5 */2 * * *"), ScheduleIntent::custom("*/5 */2 * * *"));
    }

    #[test]
    fn test_parse_interval_hours_rejects_out_of_range_minute() {
        assert_eq!(parse("75 */2 * * *"), ScheduleIntent::custom("75 */2 * * *"));
    }

    #[test]
    fn test_parse_weekly() {
        assert_eq!(parse("0 9 * * 1"), ScheduleIntent::weekly(1, 9, 0, 0));
        assert_eq!(parse("5 30 18 * * 5"), ScheduleIntent::weekly(5, 18, 30, 5));
    }

    #[test]
    fn test_parse_weekly_normalizes_sunday() {
        let seven = parse("0 0 * * 7");
        assert_eq!(seven, ScheduleIntent::weekly(0, 0, 0, 0));
        assert_eq!(seven, parse("0 0 * * 0"));
    }

    #[test]
    fn test_parse_weekly_out_of_range() {
        assert_eq!(parse("0 9 * * 8"), ScheduleIntent::custom("0 9 * * 8"));
    }

    #[test]
    fn test_parse_monthly() {
        assert_eq!(parse("30 2 15 * *"), ScheduleIntent::monthly(15, 2, 30, 0));
        assert_eq!(parse("0 0 1 * *"), ScheduleIntent::monthly(1, 0, 0, 0));
        assert_eq!(parse("0 0 31 * *"), ScheduleIntent::monthly(31, 0, 0, 0));
    }

    #[test]
    fn test_parse_monthly_boundaries() {
        assert_eq!(parse("30 2 32 * *"), ScheduleIntent::custom("30 2 32 * *"));
        assert_eq!(parse("30 2 0 * *"), ScheduleIntent::custom("30 2 0 * *"));
    }

    #[test]
    fn test_parse_both_days_set_is_custom() {
        assert_eq!(parse("0 9 1 * 1"), ScheduleIntent::custom("0 9 1 * 1"));
    }

    #[test]
    fn test_parse_fixed_month_is_custom() {
        assert_eq!(parse("0 0 1 1 *"), ScheduleIntent::custom("0 0 1 1 *"));
    }

    #[test]
    fn test_parse_list_syntax_is_custom() {
        assert_eq!(parse("0 6 1,15 * *"), ScheduleIntent::custom("0 6 1,15 * *"));
        assert_eq!(parse("0 9 * * 1-5"), ScheduleIntent::custom("0 9 * * 1-5"));
        assert_eq!(parse("0 9 * * MON"), ScheduleIntent::custom("0 9 * * MON"));
    }

    #[test]
    fn test_parse_wrong_field_count() {
        assert_eq!(parse("* * * *"), ScheduleIntent::custom("* * * *"));
        assert_eq!(parse("0 0 0 * * * *"), ScheduleIntent::custom("0 0 0 * * * *"));
        assert_eq!(parse("@daily"), ScheduleIntent::custom("@daily"));
        assert_eq!(parse(""), ScheduleIntent::custom(""));
    }

    #[test]
    fn test_parse_every_minute_is_custom() {
        assert_eq!(parse("* * * * *"), ScheduleIntent::custom("* * * * *"));
    }

    #[test]
    fn test_parse_out_of_range_time_is_custom() {
        assert_eq!(parse("0 24 * * *"), ScheduleIntent::custom("0 24 * * *"));
        assert_eq!(parse("60 6 * * *"), ScheduleIntent::custom("60 6 * * *"));
        assert_eq!(parse("60 0 6 * * *"), ScheduleIntent::custom("60 0 6 * * *"));
    }

    #[test]
    fn test_parse_step_second_with_fixed_time_is_custom() {
        assert_eq!(parse("*/5 0 6 * * *"), ScheduleIntent::custom("*/5 0 6 * * *"));
    }

    #[test]
    fn test_parse_keeps_original_text() {
        let raw = "  0   6  1,15 *  * ";
        assert_eq!(parse(raw), ScheduleIntent::custom(raw));
    }

    #[test]
    fn test_parse_tolerates_extra_whitespace() {
        assert_eq!(parse("  0   6 * *\t* "), ScheduleIntent::daily(6, 0, 0));
    }

    #[test]
    fn test_split_prepends_seconds() {
        let fields = CronFields::split("*/5 * * * *").unwrap();
        assert_eq!(fields.second, CronField::Fixed(0));
        assert_eq!(fields.minute, CronField::Step(5));
        assert!(fields.all_supported());
    }

    #[test]
    fn test_split_rejects_field_count() {
        assert!(CronFields::split("* * *").is_none());
    }
}
