use thiserror::Error;
use time::macros::format_description;
use time::{Date, Weekday};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeParseError {
    #[error("Invalid time value: {0}")]
    InvalidTime(String),

    #[error("Invalid date value: {0}")]
    InvalidDate(String),
}

/// Parse a strict `YYYY-MM-DD` calendar date.
///
/// Rejects impossible dates (e.g. `2025-02-30`) instead of coercing them.
pub fn parse_date(value: &str) -> Result<Date, TimeParseError> {
    Date::parse(value, format_description!("[year]-[month]-[day]"))
        .map_err(|_| TimeParseError::InvalidDate(value.to_string()))
}

/// Format a date back to `YYYY-MM-DD`.
pub fn format_date(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_default()
}

/// ISO weekday number: 1 = Monday .. 7 = Sunday.
pub fn day_of_week(date: Date) -> u8 {
    date.weekday().number_from_monday()
}

/// Spanish day name used by the public API (`dayName`).
pub fn spanish_day_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Monday => "Lunes",
        Weekday::Tuesday => "Martes",
        Weekday::Wednesday => "Miércoles",
        Weekday::Thursday => "Jueves",
        Weekday::Friday => "Viernes",
        Weekday::Saturday => "Sábado",
        Weekday::Sunday => "Domingo",
    }
}

/// Parse `HH:mm` or `HH:mm:ss` into minutes since midnight.
///
/// Parsing is strict: empty strings, missing components, and out-of-range
/// hours or minutes are errors rather than silently becoming zero.
pub fn time_to_minutes(value: &str) -> Result<u16, TimeParseError> {
    let parts: Vec<&str> = value.split(':').collect();
    if parts.len() < 2 || parts.len() > 3 {
        return Err(TimeParseError::InvalidTime(value.to_string()));
    }

    let hours: u16 = parts[0]
        .parse()
        .map_err(|_| TimeParseError::InvalidTime(value.to_string()))?;
    let minutes: u16 = parts[1]
        .parse()
        .map_err(|_| TimeParseError::InvalidTime(value.to_string()))?;
    if let Some(secs) = parts.get(2) {
        let seconds: u16 = secs
            .parse()
            .map_err(|_| TimeParseError::InvalidTime(value.to_string()))?;
        if seconds > 59 {
            return Err(TimeParseError::InvalidTime(value.to_string()));
        }
    }

    if hours > 23 || minutes > 59 {
        return Err(TimeParseError::InvalidTime(value.to_string()));
    }

    Ok(hours * 60 + minutes)
}

/// Inverse of [`time_to_minutes`], zero-padded `HH:mm`.
///
/// No wraparound: minutes >= 1440 produce an hour >= 24, the caller is
/// responsible for staying within a single day.
pub fn minutes_to_time(minutes: u16) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Add a delta to a clock time, returning `HH:mm`.
pub fn add_minutes(value: &str, delta: u16) -> Result<String, TimeParseError> {
    Ok(minutes_to_time(time_to_minutes(value)? + delta))
}

/// Half-open range check: `start <= time < end`.
pub fn is_time_in_range(value: &str, start: &str, end: &str) -> Result<bool, TimeParseError> {
    let t = time_to_minutes(value)?;
    let s = time_to_minutes(start)?;
    let e = time_to_minutes(end)?;
    Ok(t >= s && t < e)
}

/// 1-based position of a slot within a shift.
///
/// `floor((slot - shift_start) / duration) + 1`. Yields a position <= 0 when
/// the slot precedes the shift start; callers must guard against that.
pub fn slot_position_minutes(slot: i32, shift_start: i32, duration: i32) -> i32 {
    (slot - shift_start).div_euclid(duration) + 1
}

/// String variant of [`slot_position_minutes`].
pub fn slot_position(slot: &str, shift_start: &str, duration: u16) -> Result<i32, TimeParseError> {
    Ok(slot_position_minutes(
        time_to_minutes(slot)? as i32,
        time_to_minutes(shift_start)? as i32,
        duration as i32,
    ))
}

/// True iff the positions, once sorted, are exactly `[1, 2, ..., n]`.
///
/// An empty set is vacuously consecutive.
pub fn are_consecutive_from_one(positions: &[i32]) -> bool {
    let mut sorted = positions.to_vec();
    sorted.sort_unstable();
    sorted
        .iter()
        .enumerate()
        .all(|(i, &p)| p == i as i32 + 1)
}

/// Minutes since midnight for a database `TIME` value.
pub fn minutes_of(t: time::Time) -> u16 {
    t.hour() as u16 * 60 + t.minute() as u16
}

/// Parse `HH:mm` or `HH:mm:ss` into a `TIME` value, seconds discarded.
pub fn parse_clock_time(value: &str) -> Result<time::Time, TimeParseError> {
    let minutes = time_to_minutes(value)?;
    time::Time::from_hms((minutes / 60) as u8, (minutes % 60) as u8, 0)
        .map_err(|_| TimeParseError::InvalidTime(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::time;

    #[test]
    fn day_of_week_matches_calendar() {
        // 2025-10-15 is a Wednesday, 2025-10-19 a Sunday.
        assert_eq!(day_of_week(parse_date("2025-10-15").unwrap()), 3);
        assert_eq!(day_of_week(parse_date("2025-10-19").unwrap()), 7);
    }

    #[test]
    fn parse_date_rejects_impossible_dates() {
        assert!(parse_date("2025-02-30").is_err());
        assert!(parse_date("2025-13-01").is_err());
        assert!(parse_date("not-a-date").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn format_date_round_trips() {
        let date = parse_date("2025-10-15").unwrap();
        assert_eq!(format_date(date), "2025-10-15");
    }

    #[test]
    fn spanish_day_names() {
        let wednesday = parse_date("2025-10-15").unwrap();
        assert_eq!(spanish_day_name(wednesday.weekday()), "Miércoles");
        let sunday = parse_date("2025-10-19").unwrap();
        assert_eq!(spanish_day_name(sunday.weekday()), "Domingo");
    }

    #[test]
    fn time_to_minutes_accepts_both_forms() {
        assert_eq!(time_to_minutes("07:00").unwrap(), 420);
        assert_eq!(time_to_minutes("07:30:00").unwrap(), 450);
        assert_eq!(time_to_minutes("00:00").unwrap(), 0);
        assert_eq!(time_to_minutes("23:59").unwrap(), 1439);
    }

    #[test]
    fn time_to_minutes_rejects_malformed_input() {
        assert!(time_to_minutes("").is_err());
        assert!(time_to_minutes("7").is_err());
        assert!(time_to_minutes("24:00").is_err());
        assert!(time_to_minutes("12:60").is_err());
        assert!(time_to_minutes("aa:bb").is_err());
        assert!(time_to_minutes("10:00:00:00").is_err());
    }

    #[test]
    fn minutes_round_trip_for_padded_times() {
        for value in ["00:00", "07:05", "12:30", "23:59"] {
            assert_eq!(minutes_to_time(time_to_minutes(value).unwrap()), value);
        }
    }

    #[test]
    fn add_minutes_crosses_the_hour() {
        assert_eq!(add_minutes("09:45", 30).unwrap(), "10:15");
        assert_eq!(add_minutes("08:00", 0).unwrap(), "08:00");
    }

    #[test]
    fn range_check_excludes_the_end() {
        assert!(!is_time_in_range("12:00", "07:00", "12:00").unwrap());
        assert!(is_time_in_range("11:59", "07:00", "12:00").unwrap());
        assert!(is_time_in_range("07:00", "07:00", "12:00").unwrap());
        assert!(!is_time_in_range("06:59", "07:00", "12:00").unwrap());
    }

    #[test]
    fn slot_position_is_one_based() {
        assert_eq!(slot_position("08:00", "07:00", 20).unwrap(), 4);
        assert_eq!(slot_position("07:00", "07:00", 30).unwrap(), 1);
        assert_eq!(slot_position("07:30", "07:00", 30).unwrap(), 2);
        // Before the shift start the position degrades to <= 0.
        assert_eq!(slot_position("06:30", "07:00", 30).unwrap(), 0);
    }

    #[test]
    fn consecutive_from_one() {
        assert!(are_consecutive_from_one(&[]));
        assert!(are_consecutive_from_one(&[1]));
        assert!(are_consecutive_from_one(&[1, 2, 3]));
        assert!(are_consecutive_from_one(&[3, 1, 2]));
        assert!(!are_consecutive_from_one(&[2, 3, 4]));
        assert!(!are_consecutive_from_one(&[1, 2, 4]));
        assert!(!are_consecutive_from_one(&[0, 1, 2]));
    }

    #[test]
    fn minutes_of_database_time() {
        assert_eq!(minutes_of(time!(07:00)), 420);
        assert_eq!(minutes_of(time!(16:45)), 1005);
    }
}
