use chrono::{DateTime, Utc};

/// Countdown label in `m:ss` form.
#[must_use]
pub fn format_countdown(seconds: u32) -> String {
    let minutes = seconds / 60;
    let remainder = seconds % 60;
    format!("{minutes}:{remainder:02}")
}

/// Leaderboard date, `YYYY-MM-DD`.
#[must_use]
pub fn format_date(value: DateTime<Utc>) -> String {
    value.format("%Y-%m-%d").to_string()
}

/// Whole minutes for quiz cards, rounded up.
#[must_use]
pub fn format_minutes(seconds: u32) -> String {
    format!("{} min", seconds.div_ceil(60))
}

#[cfg(test)]
mod tests {
    use super::*;
    use prep_core::time::fixed_now;

    #[test]
    fn countdown_pads_seconds() {
        assert_eq!(format_countdown(900), "15:00");
        assert_eq!(format_countdown(65), "1:05");
        assert_eq!(format_countdown(9), "0:09");
        assert_eq!(format_countdown(0), "0:00");
    }

    #[test]
    fn date_is_calendar_day() {
        assert_eq!(format_date(fixed_now()), "2023-11-14");
    }

    #[test]
    fn minutes_round_up() {
        assert_eq!(format_minutes(900), "15 min");
        assert_eq!(format_minutes(61), "2 min");
    }
}
