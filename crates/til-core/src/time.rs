//! Relative time formatting for post timestamps.
//!
//! Contract timestamps are block times in nanoseconds. They are truncated to
//! milliseconds before any formatting happens.

const NANOS_PER_MILLI: u64 = 1_000_000;

const SECOND_MS: f64 = 1_000.0;
const MINUTE_MS: f64 = 60.0 * SECOND_MS;
const HOUR_MS: f64 = 60.0 * MINUTE_MS;
const DAY_MS: f64 = 24.0 * HOUR_MS;
/// Mean Gregorian month
const MONTH_MS: f64 = 30.436_875 * DAY_MS;
const YEAR_MS: f64 = 12.0 * MONTH_MS;

/// Convert a nanosecond epoch timestamp to milliseconds (truncating)
pub fn nanos_to_millis(nanos: u64) -> i64 {
    (nanos / NANOS_PER_MILLI) as i64
}

/// Current wall clock time in epoch milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Current wall clock time in epoch nanoseconds
pub fn now_nanos() -> u64 {
    chrono::Utc::now()
        .timestamp_nanos_opt()
        .map(|n| n.max(0) as u64)
        .unwrap_or_default()
}

#[derive(Clone, Copy, Debug)]
enum Phrase {
    FewSeconds,
    Minute,
    Minutes,
    Hour,
    Hours,
    Day,
    Days,
    Month,
    Months,
    Year,
    Years,
}

impl Phrase {
    fn render(self, n: u64) -> String {
        match self {
            Phrase::FewSeconds => "a few seconds".to_string(),
            Phrase::Minute => "a minute".to_string(),
            Phrase::Minutes => format!("{} minutes", n),
            Phrase::Hour => "an hour".to_string(),
            Phrase::Hours => format!("{} hours", n),
            Phrase::Day => "a day".to_string(),
            Phrase::Days => format!("{} days", n),
            Phrase::Month => "a month".to_string(),
            Phrase::Months => format!("{} months", n),
            Phrase::Year => "a year".to_string(),
            Phrase::Years => format!("{} years", n),
        }
    }
}

struct Threshold {
    phrase: Phrase,
    /// Largest rounded value this phrase covers; `None` is unbounded
    limit: Option<u64>,
    /// Unit the rounded value is measured in; `None` keeps the previous one
    unit_ms: Option<f64>,
}

#[rustfmt::skip]
const THRESHOLDS: &[Threshold] = &[
    Threshold { phrase: Phrase::FewSeconds, limit: Some(44), unit_ms: Some(SECOND_MS) },
    Threshold { phrase: Phrase::Minute, limit: Some(89), unit_ms: None },
    Threshold { phrase: Phrase::Minutes, limit: Some(44), unit_ms: Some(MINUTE_MS) },
    Threshold { phrase: Phrase::Hour, limit: Some(89), unit_ms: None },
    Threshold { phrase: Phrase::Hours, limit: Some(21), unit_ms: Some(HOUR_MS) },
    Threshold { phrase: Phrase::Day, limit: Some(35), unit_ms: None },
    Threshold { phrase: Phrase::Days, limit: Some(25), unit_ms: Some(DAY_MS) },
    Threshold { phrase: Phrase::Month, limit: Some(45), unit_ms: None },
    Threshold { phrase: Phrase::Months, limit: Some(10), unit_ms: Some(MONTH_MS) },
    Threshold { phrase: Phrase::Year, limit: Some(17), unit_ms: None },
    Threshold { phrase: Phrase::Years, limit: None, unit_ms: Some(YEAR_MS) },
];

/// Humanize a duration given in milliseconds, ignoring its sign
pub fn humanize(duration_ms: i64) -> String {
    let abs = duration_ms.unsigned_abs() as f64;
    let mut value = 0u64;

    for (i, threshold) in THRESHOLDS.iter().enumerate() {
        if let Some(unit) = threshold.unit_ms {
            value = (abs / unit).round() as u64;
        }
        if threshold.limit.map_or(true, |limit| value <= limit) {
            let phrase = if value <= 1 && i > 0 {
                THRESHOLDS[i - 1].phrase
            } else {
                threshold.phrase
            };
            return phrase.render(value);
        }
    }

    // Unreachable: the last threshold is unbounded
    Phrase::Years.render(value)
}

/// Describe `then_ms` relative to `now_ms`, e.g. "5 minutes ago" or "in a minute"
pub fn from_now(then_ms: i64, now_ms: i64) -> String {
    let diff = then_ms - now_ms;
    let text = humanize(diff);
    if diff > 0 {
        format!("in {}", text)
    } else {
        format!("{} ago", text)
    }
}

/// Age of a post given its nanosecond `created_at`
pub fn post_age(created_at_nanos: u64, now_ms: i64) -> String {
    from_now(nanos_to_millis(created_at_nanos), now_ms)
}
