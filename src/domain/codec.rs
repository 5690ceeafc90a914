//! Conversions between millisecond durations and hour/minute/second triples.

pub const MILLIS_PER_SECOND: u64 = 1_000;
pub const MILLIS_PER_MINUTE: u64 = 60 * MILLIS_PER_SECOND;
pub const MILLIS_PER_HOUR: u64 = 60 * MILLIS_PER_MINUTE;

/// Total milliseconds for the given hours, minutes and seconds.
///
/// Inputs are not range checked, so `duration_of(0, 99, 0)` is 99 minutes.
pub fn duration_of(hours: u64, minutes: u64, seconds: u64) -> u64 {
    ((hours * 60 + minutes) * 60 + seconds) * MILLIS_PER_SECOND
}

/// Whole hours contained in `millis`
pub fn hours_of(millis: u64) -> u64 {
    millis / MILLIS_PER_HOUR
}

/// Minute component (0-59) of `millis`
pub fn minutes_in_hour_of(millis: u64) -> u64 {
    (millis / MILLIS_PER_MINUTE) % 60
}

/// Second component (0-59) of `millis`
pub fn seconds_in_minute_of(millis: u64) -> u64 {
    (millis / MILLIS_PER_SECOND) % 60
}

/// Format a duration as "H:MM:SS" (e.g., "0:15:00", "1:02:03", "120:00:00")
pub fn format_hours_minutes_seconds(millis: u64) -> String {
    format!(
        "{}:{:02}:{:02}",
        hours_of(millis),
        minutes_in_hour_of(millis),
        seconds_in_minute_of(millis)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_of() {
        assert_eq!(duration_of(1, 2, 3), 3_723_000);
        assert_eq!(duration_of(0, 0, 0), 0);
        assert_eq!(duration_of(0, 0, 15), 15_000);
    }

    #[test]
    fn test_duration_of_accepts_out_of_range_fields() {
        // 99 minutes and 99 seconds are not folded into larger units first
        assert_eq!(duration_of(0, 99, 99), (99 * 60 + 99) * 1000);
        assert_eq!(duration_of(99, 99, 99), 362_439_000);
    }

    #[test]
    fn test_components_of() {
        assert_eq!(hours_of(3_723_000), 1);
        assert_eq!(minutes_in_hour_of(3_723_000), 2);
        assert_eq!(seconds_in_minute_of(3_723_000), 3);
    }

    #[test]
    fn test_components_truncate_sub_second_precision() {
        let millis = 3_723_999;
        assert_eq!(hours_of(millis), 1);
        assert_eq!(minutes_in_hour_of(millis), 2);
        assert_eq!(seconds_in_minute_of(millis), 3);
    }

    #[test]
    fn test_components_wrap_at_sixty() {
        let millis = duration_of(0, 99, 99); // 1:40:39
        assert_eq!(hours_of(millis), 1);
        assert_eq!(minutes_in_hour_of(millis), 40);
        assert_eq!(seconds_in_minute_of(millis), 39);
    }

    #[test]
    fn test_format_hours_minutes_seconds() {
        assert_eq!(format_hours_minutes_seconds(0), "0:00:00");
        assert_eq!(format_hours_minutes_seconds(15 * 60 * 1000), "0:15:00");
        assert_eq!(format_hours_minutes_seconds(3_723_000), "1:02:03");
        assert_eq!(format_hours_minutes_seconds(duration_of(120, 0, 0)), "120:00:00");
    }
}
