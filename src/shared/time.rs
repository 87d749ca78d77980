use chrono::{DateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;

/// Human-readable age of `created_at` as seen at `now`.
///
/// Under a minute reads "Just now", then minutes, hours and days; anything a week
/// or older falls back to the calendar date (`YYYY-MM-DD`).
pub fn time_ago(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - created_at).num_seconds();

    if seconds < MINUTE {
        "Just now".to_string()
    } else if seconds < HOUR {
        format!("{} min ago", seconds / MINUTE)
    } else if seconds < DAY {
        let hours = seconds / HOUR;
        format!("{} hour{} ago", hours, plural(hours))
    } else if seconds < WEEK {
        let days = seconds / DAY;
        format!("{} day{} ago", days, plural(days))
    } else {
        created_at.format("%Y-%m-%d").to_string()
    }
}

fn plural(n: i64) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}
