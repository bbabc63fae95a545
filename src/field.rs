//! Cron field classification
//!
//! Each space-separated token of a cron expression is tagged with the only
//! shapes the structured editor understands:
//!
//! - `*` - wildcard
//! - `15` - fixed value
//! - `*/5` - step from the field minimum
//!
//! Lists (`1,3,5`), ranges (`1-5`), names (`MON`) and everything else are
//! `Unsupported`. They are kept verbatim by the parser but never decomposed.

use std::fmt;

/// A single classified cron field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CronField {
    /// `*` - matches every value
    Wildcard,
    /// A plain non-negative number
    Fixed(u32),
    /// `*/n` with `n >= 1`
    Step(u32),
    /// Any other syntax, kept as written
    Unsupported(String),
}

impl CronField {
    /// The fixed value, if this field is `Fixed`
    pub fn fixed(&self) -> Option<u32> {
        match self {
            Self::Fixed(n) => Some(*n),
            _ => None,
        }
    }

    /// The step, if this field is `Step`
    pub fn step(&self) -> Option<u32> {
        match self {
            Self::Step(n) => Some(*n),
            _ => None,
        }
    }

    /// Whether this field is `*`
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Wildcard)
    }

    /// Whether the structured editor can represent this field
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported(_))
    }
}

impl fmt::Display for CronField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wildcard => write!(f, "*"),
            Self::Fixed(n) => write!(f, "{}", n),
            Self::Step(n) => write!(f, "*/{}", n),
            Self::Unsupported(raw) => write!(f, "{}", raw),
        }
    }
}

/// Classify one cron field
///
/// Total: every input maps to a tag. A zero or unparseable step (`*/0`,
/// `*/x`) and numbers that overflow `u32` are `Unsupported`.
///
/// # Examples
///
/// ```
/// use a3s_schedule::{classify, CronField};
///
/// assert_eq!(classify("*"), CronField::Wildcard);
/// assert_eq!(classify("30"), CronField::Fixed(30));
/// assert_eq!(classify("*/15"), CronField::Step(15));
/// assert_eq!(classify("1-5"), CronField::Unsupported("1-5".to_string()));
/// ```
pub fn classify(text: &str) -> CronField {
    if text == "*" {
        return CronField::Wildcard;
    }

    if let Some(n) = parse_digits(text) {
        return CronField::Fixed(n);
    }

    if let Some(step) = text.strip_prefix("*/").and_then(parse_digits) {
        if step > 0 {
            return CronField::Step(step);
        }
    }

    CronField::Unsupported(text.to_string())
}

/// Parse a non-empty run of ASCII digits (no sign, no whitespace)
fn parse_digits(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_wildcard() {
        assert_eq!(classify("*"), CronField::Wildcard);
        assert!(classify("*").is_wildcard());
    }

    #[test]
    fn test_classify_fixed() {
        assert_eq!(classify("0"), CronField::Fixed(0));
        assert_eq!(classify("59"), CronField::Fixed(59));
        assert_eq!(classify("007"), CronField::Fixed(7));
        assert_eq!(classify("75"), CronField::Fixed(75));
    }

    #[test]
    fn test_classify_step() {
        assert_eq!(classify("*/1"), CronField::Step(1));
        assert_eq!(classify("*/15"), CronField::Step(15));
    }

    #[test]
    fn test_classify_zero_step_is_unsupported() {
        assert_eq!(classify("*/0"), CronField::Unsupported("*/0".to_string()));
        assert_eq!(classify("*/00"), CronField::Unsupported("*/00".to_string()));
    }

    #[test]
    fn test_classify_malformed_step() {
        assert!(!classify("*/").is_supported());
        assert!(!classify("*/x").is_supported());
        assert!(!classify("*/+5").is_supported());
        assert!(!classify("0/5").is_supported());
        assert!(!classify("10-30/5").is_supported());
    }

    #[test]
    fn test_classify_unsupported_syntax() {
        for raw in ["1,15", "1-5", "MON", "-1", "+5", "?", "L", ""] {
            assert_eq!(classify(raw), CronField::Unsupported(raw.to_string()));
        }
    }

    #[test]
    fn test_classify_overflow() {
        assert!(!classify("99999999999").is_supported());
    }

    #[test]
    fn test_accessors() {
        assert_eq!(classify("12").fixed(), Some(12));
        assert_eq!(classify("*/12").fixed(), None);
        assert_eq!(classify("*/12").step(), Some(12));
        assert_eq!(classify("*").step(), None);
    }

    #[test]
    fn test_display() {
        for raw in ["*", "5", "*/5", "1,2,3"] {
            assert_eq!(classify(raw).to_string(), raw);
        }
        assert_eq!(CronField::Fixed(7).to_string(), "7");
    }
}
