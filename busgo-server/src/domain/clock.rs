//! Wall-clock times and departure windows.
//!
//! Bus timetables are given as "HH:MM" in local time with no date attached.
//! Overnight arrivals (e.g. a 22:00 departure arriving 02:30) are simply
//! earlier clock times; nothing here does date arithmetic.

use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an invalid "HH:MM" time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid clock time: {reason}")]
pub struct InvalidClockTime {
    reason: &'static str,
}

/// A time of day with minute precision.
///
/// # Examples
///
/// ```
/// use busgo_server::domain::ClockTime;
///
/// let t = ClockTime::parse("07:30").unwrap();
/// assert_eq!(t.hour(), 7);
/// assert_eq!(t.to_string(), "07:30");
///
/// assert!(ClockTime::parse("24:00").is_err());
/// assert!(ClockTime::parse("7:30").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Create a time from hour and minute, validating ranges.
    pub fn new(hour: u8, minute: u8) -> Result<Self, InvalidClockTime> {
        if hour > 23 {
            return Err(InvalidClockTime {
                reason: "hour must be 00-23",
            });
        }
        if minute > 59 {
            return Err(InvalidClockTime {
                reason: "minute must be 00-59",
            });
        }
        Ok(Self { hour, minute })
    }

    /// Parse a strict "HH:MM" string.
    pub fn parse(s: &str) -> Result<Self, InvalidClockTime> {
        let bytes = s.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(InvalidClockTime {
                reason: "must be in HH:MM format",
            });
        }
        let digits = [bytes[0], bytes[1], bytes[3], bytes[4]];
        if !digits.iter().all(u8::is_ascii_digit) {
            return Err(InvalidClockTime {
                reason: "must be in HH:MM format",
            });
        }
        let hour = (digits[0] - b'0') * 10 + (digits[1] - b'0');
        let minute = (digits[2] - b'0') * 10 + (digits[3] - b'0');
        Self::new(hour, minute)
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Error returned when parsing an unknown departure window name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown departure window: {0}")]
pub struct InvalidDepartureWindow(pub String);

/// Part of the day a bus departs in, used by the listing filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepartureWindow {
    /// 06:00 to 11:59
    Morning,
    /// 12:00 to 17:59
    Afternoon,
    /// 18:00 to 21:59
    Evening,
    /// 22:00 to 05:59, wrapping midnight
    Night,
}

impl DepartureWindow {
    pub const ALL: [DepartureWindow; 4] = [
        DepartureWindow::Morning,
        DepartureWindow::Afternoon,
        DepartureWindow::Evening,
        DepartureWindow::Night,
    ];

    /// Whether a departure at `time` falls in this window.
    ///
    /// Only the hour is considered.
    pub fn contains(&self, time: ClockTime) -> bool {
        let h = time.hour();
        match self {
            DepartureWindow::Morning => (6..12).contains(&h),
            DepartureWindow::Afternoon => (12..18).contains(&h),
            DepartureWindow::Evening => (18..22).contains(&h),
            DepartureWindow::Night => h >= 22 || h < 6,
        }
    }

    /// The query-string token for this window.
    pub fn as_str(&self) -> &'static str {
        match self {
            DepartureWindow::Morning => "morning",
            DepartureWindow::Afternoon => "afternoon",
            DepartureWindow::Evening => "evening",
            DepartureWindow::Night => "night",
        }
    }

    /// Human-readable label shown next to the filter checkbox.
    pub fn label(&self) -> &'static str {
        match self {
            DepartureWindow::Morning => "Morning (6 AM - 12 PM)",
            DepartureWindow::Afternoon => "Afternoon (12 PM - 6 PM)",
            DepartureWindow::Evening => "Evening (6 PM - 10 PM)",
            DepartureWindow::Night => "Night (10 PM - 6 AM)",
        }
    }
}

impl FromStr for DepartureWindow {
    type Err = InvalidDepartureWindow;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "morning" => Ok(DepartureWindow::Morning),
            "afternoon" => Ok(DepartureWindow::Afternoon),
            "evening" => Ok(DepartureWindow::Evening),
            "night" => Ok(DepartureWindow::Night),
            _ => Err(InvalidDepartureWindow(s.to_string())),
        }
    }
}

impl fmt::Display for DepartureWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> ClockTime {
        ClockTime::parse(s).unwrap()
    }

    #[test]
    fn parse_valid_times() {
        assert_eq!(t("00:00"), ClockTime::new(0, 0).unwrap());
        assert_eq!(t("23:59"), ClockTime::new(23, 59).unwrap());
        assert_eq!(t("07:30").minute(), 30);
    }

    #[test]
    fn reject_bad_times() {
        assert!(ClockTime::parse("").is_err());
        assert!(ClockTime::parse("7:30").is_err());
        assert!(ClockTime::parse("07-30").is_err());
        assert!(ClockTime::parse("24:00").is_err());
        assert!(ClockTime::parse("12:60").is_err());
        assert!(ClockTime::parse("ab:cd").is_err());
    }

    #[test]
    fn display_zero_pads() {
        assert_eq!(ClockTime::new(9, 5).unwrap().to_string(), "09:05");
    }

    #[test]
    fn window_boundaries() {
        assert!(DepartureWindow::Morning.contains(t("06:00")));
        assert!(DepartureWindow::Morning.contains(t("11:59")));
        assert!(!DepartureWindow::Morning.contains(t("12:00")));
        assert!(DepartureWindow::Afternoon.contains(t("12:00")));
        assert!(DepartureWindow::Afternoon.contains(t("17:45")));
        assert!(DepartureWindow::Evening.contains(t("18:00")));
        assert!(!DepartureWindow::Evening.contains(t("22:00")));
        assert!(DepartureWindow::Night.contains(t("22:00")));
        assert!(DepartureWindow::Night.contains(t("00:15")));
        assert!(DepartureWindow::Night.contains(t("05:59")));
        assert!(!DepartureWindow::Night.contains(t("06:00")));
    }

    #[test]
    fn windows_partition_the_day() {
        for hour in 0..24 {
            let time = ClockTime::new(hour, 0).unwrap();
            let hits = DepartureWindow::ALL
                .iter()
                .filter(|w| w.contains(time))
                .count();
            assert_eq!(hits, 1, "hour {hour} should be in exactly one window");
        }
    }

    #[test]
    fn window_from_str() {
        assert_eq!(
            "Morning".parse::<DepartureWindow>().unwrap(),
            DepartureWindow::Morning
        );
        assert_eq!(
            " night ".parse::<DepartureWindow>().unwrap(),
            DepartureWindow::Night
        );
        assert!("dawn".parse::<DepartureWindow>().is_err());
    }
}
