//! Time-of-day handling for the departure board.
//!
//! The board works at minute granularity with no date component: stops are
//! scheduled as "HH:MM" within a single service day. Query parameters arrive
//! as "HH:MM" strings (a single-digit hour is accepted, e.g. "9:00").

use chrono::{Local, NaiveTime, Timelike};
use std::cmp::Ordering;
use std::fmt;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct ParseTimeError {
    reason: &'static str,
}

impl ParseTimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A minute-granularity time of day.
///
/// # Examples
///
/// ```
/// use board_server::domain::BoardTime;
///
/// let t = BoardTime::parse("14:30").unwrap();
/// assert_eq!(t.to_string(), "14:30");
///
/// // Single-digit hours are accepted
/// let t = BoardTime::parse("9:05").unwrap();
/// assert_eq!(t.to_string(), "09:05");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardTime {
    time: NaiveTime,
}

impl BoardTime {
    /// Midnight, the start of the service day.
    pub const MIDNIGHT: Self = Self {
        time: NaiveTime::MIN,
    };

    /// Create a time from hour and minute components.
    ///
    /// Returns `None` if the hour is not 0-23 or the minute is not 0-59.
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(|time| Self { time })
    }

    /// Parse a time from "HH:MM" or "H:MM" format.
    ///
    /// # Examples
    ///
    /// ```
    /// use board_server::domain::BoardTime;
    ///
    /// assert!(BoardTime::parse("00:00").is_ok());
    /// assert!(BoardTime::parse("23:59").is_ok());
    /// assert!(BoardTime::parse("9:00").is_ok());
    ///
    /// assert!(BoardTime::parse("1430").is_err());
    /// assert!(BoardTime::parse("25:00").is_err());
    /// assert!(BoardTime::parse("12:60").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, ParseTimeError> {
        let bytes = s.as_bytes();

        let (hour_digits, minute_digits) = match bytes.len() {
            4 if bytes[1] == b':' => (&bytes[0..1], &bytes[2..4]),
            5 if bytes[2] == b':' => (&bytes[0..2], &bytes[3..5]),
            _ => return Err(ParseTimeError::new("expected HH:MM format")),
        };

        let hour =
            parse_digits(hour_digits).ok_or_else(|| ParseTimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(ParseTimeError::new("hour must be 0-23"));
        }

        let minute = parse_digits(minute_digits)
            .ok_or_else(|| ParseTimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(ParseTimeError::new("minute must be 0-59"));
        }

        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| ParseTimeError::new("invalid time"))?;

        Ok(Self { time })
    }

    /// The last minute of the service day, 23:59.
    pub fn end_of_day() -> Self {
        Self::MIDNIGHT.saturating_add_minutes(23 * 60 + 59)
    }

    /// The current local time of day, truncated to the minute.
    pub fn now() -> Self {
        let now = Local::now().time();
        Self::new(now.hour(), now.minute()).unwrap_or(Self::MIDNIGHT)
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.time.minute()
    }

    /// Minutes since midnight (0-1439).
    pub fn minutes_from_midnight(&self) -> u32 {
        self.hour() * 60 + self.minute()
    }

    /// Add minutes to this time, clamping at 23:59.
    ///
    /// The board covers a single service day, so a window that would run
    /// past midnight is cut off at the end of the day rather than wrapping.
    ///
    /// # Examples
    ///
    /// ```
    /// use board_server::domain::BoardTime;
    ///
    /// let t = BoardTime::parse("10:30").unwrap();
    /// assert_eq!(t.saturating_add_minutes(60).to_string(), "11:30");
    ///
    /// let t = BoardTime::parse("23:30").unwrap();
    /// assert_eq!(t.saturating_add_minutes(60).to_string(), "23:59");
    /// ```
    pub fn saturating_add_minutes(&self, minutes: u32) -> Self {
        let total = (self.minutes_from_midnight() + minutes).min(23 * 60 + 59);
        Self::new(total / 60, total % 60).unwrap_or(Self::MIDNIGHT)
    }
}

impl Ord for BoardTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.time.cmp(&other.time)
    }
}

impl PartialOrd for BoardTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for BoardTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoardTime({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for BoardTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl serde::Serialize for BoardTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Parse one or two ASCII digit bytes into a u32.
fn parse_digits(bytes: &[u8]) -> Option<u32> {
    let mut value = 0;
    for &b in bytes {
        value = value * 10 + (b as char).to_digit(10)?;
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_times() {
        let t = BoardTime::parse("00:00").unwrap();
        assert_eq!(t.hour(), 0);
        assert_eq!(t.minute(), 0);

        let t = BoardTime::parse("23:59").unwrap();
        assert_eq!(t.hour(), 23);
        assert_eq!(t.minute(), 59);

        let t = BoardTime::parse("14:30").unwrap();
        assert_eq!(t.hour(), 14);
        assert_eq!(t.minute(), 30);
    }

    #[test]
    fn parse_single_digit_hour() {
        let t = BoardTime::parse("9:00").unwrap();
        assert_eq!(t.hour(), 9);
        assert_eq!(t.minute(), 0);
        assert_eq!(t.to_string(), "09:00");
    }

    #[test]
    fn parse_invalid_format() {
        // Wrong shape
        assert!(BoardTime::parse("1430").is_err());
        assert!(BoardTime::parse("14:3").is_err());
        assert!(BoardTime::parse("14:300").is_err());
        assert!(BoardTime::parse("").is_err());

        // Missing colon
        assert!(BoardTime::parse("14-30").is_err());
        assert!(BoardTime::parse("14.30").is_err());

        // Non-digit characters
        assert!(BoardTime::parse("ab:cd").is_err());
        assert!(BoardTime::parse("1a:30").is_err());
    }

    #[test]
    fn parse_invalid_values() {
        assert!(BoardTime::parse("24:00").is_err());
        assert!(BoardTime::parse("25:00").is_err());
        assert!(BoardTime::parse("12:60").is_err());
        assert!(BoardTime::parse("12:99").is_err());
    }

    #[test]
    fn display_format() {
        assert_eq!(BoardTime::parse("00:00").unwrap().to_string(), "00:00");
        assert_eq!(BoardTime::parse("9:05").unwrap().to_string(), "09:05");
        assert_eq!(BoardTime::parse("23:59").unwrap().to_string(), "23:59");
    }

    #[test]
    fn ordering() {
        let t1 = BoardTime::parse("10:00").unwrap();
        let t2 = BoardTime::parse("10:01").unwrap();
        let t3 = BoardTime::parse("11:00").unwrap();

        assert!(t1 < t2);
        assert!(t2 < t3);
        assert!(t3 > t1);
        assert_eq!(t1, BoardTime::new(10, 0).unwrap());
    }

    #[test]
    fn saturating_add() {
        let t = BoardTime::parse("10:30").unwrap();
        assert_eq!(t.saturating_add_minutes(45).to_string(), "11:15");
        assert_eq!(t.saturating_add_minutes(0), t);

        // Clamped at end of day rather than wrapping
        let t = BoardTime::parse("23:30").unwrap();
        assert_eq!(t.saturating_add_minutes(60).to_string(), "23:59");
        assert_eq!(
            BoardTime::MIDNIGHT
                .saturating_add_minutes(100_000)
                .to_string(),
            "23:59"
        );
    }

    #[test]
    fn serializes_as_hhmm_string() {
        let t = BoardTime::parse("9:05").unwrap();
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"09:05\"");
    }

    #[test]
    fn error_display() {
        let err = BoardTime::parse("banana").unwrap_err();
        assert_eq!(err.to_string(), "invalid time: expected HH:MM format");
    }
}
