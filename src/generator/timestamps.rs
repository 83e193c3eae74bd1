use chrono::{DateTime, Datelike, Duration, SubsecRound, Utc};
use rand::Rng;

/// Width of the generation window in days.
pub const WINDOW_DAYS: i64 = 7;

/// Random point within the last week, at millisecond precision.
///
/// Subtracts independently drawn days in `[0, 7)`, hours in `[0, 24)` and minutes
/// in `[0, 60)` from `now`, so the result always lies in `[now - 7d, now]`. The
/// combined distribution is not uniform over the window.
pub fn random_recent_timestamp<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> DateTime<Utc> {
    let days = rng.gen_range(0..WINDOW_DAYS);
    let hours = rng.gen_range(0..24);
    let minutes = rng.gen_range(0..60);

    let offset = Duration::days(days) + Duration::hours(hours) + Duration::minutes(minutes);
    (now - offset).trunc_subsecs(3)
}

/// Format timestamp relative to `now`:
/// - `"{m}m ago"` under an hour, `"{h}h ago"` under a day, `"{d}d ago"` under a week
/// - absolute otherwise: `"Jan 15"`, or `"Dec 3, 2024"` outside the current year
///
/// Units are floored, so exactly 60 minutes reads as `"1h ago"`. Future timestamps
/// count as zero elapsed.
pub fn format_relative(timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(*timestamp).max(Duration::zero());

    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 60 {
        format!("{}m ago", minutes)
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else if days < WINDOW_DAYS {
        format!("{}d ago", days)
    } else {
        format_absolute(timestamp, now)
    }
}

/// [`format_relative`] against the current time.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    format_relative(timestamp, &Utc::now())
}

fn format_absolute(timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    if timestamp.year() == now.year() {
        timestamp.format("%b %-d").to_string()
    } else {
        timestamp.format("%b %-d, %Y").to_string()
    }
}
