//! Date and time helpers shared by the service and the reminder poller.

use chrono::{Duration, Local, NaiveDateTime, NaiveTime};

/// Format used when timestamps are shown to people.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Current local wall-clock time, the reference point the poller hands to the service.
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Half-open `[start, end)` range covering the calendar day of `now`.
pub fn day_bounds(now: NaiveDateTime) -> (NaiveDateTime, NaiveDateTime) {
    let start = now.date().and_time(NaiveTime::MIN);
    let end = start.checked_add_signed(Duration::days(1)).unwrap_or(NaiveDateTime::MAX);
    (start, end)
}

/// Whether `timestamp` falls on the same calendar day as `now`.
pub fn is_same_day(timestamp: NaiveDateTime, now: NaiveDateTime) -> bool {
    timestamp.date() == now.date()
}

pub fn format_display(timestamp: NaiveDateTime) -> String {
    timestamp.format(DISPLAY_FORMAT).to_string()
}
