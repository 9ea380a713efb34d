use chrono::{DateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 12 * MONTH;
const LONG_TIME: i64 = 37 * YEAR;

/// Formats `then` relative to `now` as a human-readable string.
///
/// Returns strings like "now", "5 minutes ago", "1 week ago", "3 months ago"
/// or "2 hours from now" when `then` lies in the future.
///
/// # Arguments
/// * `then` - The instant being described
/// * `now` - The reference instant, usually `Utc::now()`
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let (diff, suffix) = if then <= now {
        (now - then, "ago")
    } else {
        (then - now, "from now")
    };
    let seconds = diff.num_seconds();

    let phrase = if seconds < 1 {
        return "now".to_string();
    } else if seconds < 2 {
        "1 second".to_string()
    } else if seconds < MINUTE {
        format!("{seconds} seconds")
    } else if seconds < 2 * MINUTE {
        "1 minute".to_string()
    } else if seconds < HOUR {
        format!("{} minutes", seconds / MINUTE)
    } else if seconds < 2 * HOUR {
        "1 hour".to_string()
    } else if seconds < DAY {
        format!("{} hours", seconds / HOUR)
    } else if seconds < 2 * DAY {
        "1 day".to_string()
    } else if seconds < WEEK {
        format!("{} days", seconds / DAY)
    } else if seconds < 2 * WEEK {
        "1 week".to_string()
    } else if seconds < MONTH {
        format!("{} weeks", seconds / WEEK)
    } else if seconds < 2 * MONTH {
        "1 month".to_string()
    } else if seconds < YEAR {
        format!("{} months", seconds / MONTH)
    } else if seconds < 18 * MONTH {
        "1 year".to_string()
    } else if seconds < 2 * YEAR {
        "2 years".to_string()
    } else if seconds < LONG_TIME {
        format!("{} years", seconds / YEAR)
    } else {
        "a long while".to_string()
    };

    format!("{phrase} {suffix}")
}
