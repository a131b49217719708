use chrono::{DateTime, Datelike};

/// Calendar year (UTC) of a unix timestamp in milliseconds.
///
/// `None` when the timestamp is outside the range chrono can represent.
pub fn year_of_unix_millis(millis: i64) -> Option<i32> {
    DateTime::from_timestamp_millis(millis).map(|moment| moment.year())
}
