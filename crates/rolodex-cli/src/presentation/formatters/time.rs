use chrono::{DateTime, TimeZone};
use std::fmt;

/// Minute-resolution timestamp for the footer clock and the last-refreshed
/// label; seconds are deliberately omitted so the display only changes on
/// the refresh cadence.
pub fn format_clock<Tz: TimeZone>(t: DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    t.format("%Y-%m-%d %H:%M").to_string()
}

pub fn now_clock() -> String {
    format_clock(chrono::Local::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn clock_has_minute_resolution() {
        let t = Utc.with_ymd_and_hms(2026, 3, 7, 9, 5, 59).unwrap();
        assert_eq!(format_clock(t), "2026-03-07 09:05");
    }
}
