//! Time-slot availability
//!
//! The open-hours predicate: a slot is bookable when it falls inside the
//! clinic's open window. The authoritative window is 07:00 to 18:00 with
//! 18:00 itself being the last bookable slot; both bounds are configurable.

use serde::{Deserialize, Serialize};

/// The clinic's open window, in whole hours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenHours {
    /// First bookable hour
    pub open_hour: u32,
    /// Last bookable hour; minutes past it are not bookable
    pub close_hour: u32,
}

impl Default for OpenHours {
    fn default() -> Self {
        Self {
            open_hour: 7,
            close_hour: 18,
        }
    }
}

/// Whether an `HH:MM` time falls inside the open window
///
/// Returns false when the input does not parse as a time of day, when the
/// hour is before opening or after closing, or when the time is past the
/// closing hour's first minute.
pub fn is_slot_available(time: &str, hours: &OpenHours) -> bool {
    let Some((h, m)) = parse_hhmm(time) else {
        return false;
    };
    if h < hours.open_hour || h > hours.close_hour {
        return false;
    }
    if h == hours.close_hour && m > 0 {
        return false;
    }
    true
}

/// Parses `HH:MM`; `None` on anything else
fn parse_hhmm(time: &str) -> Option<(u32, u32)> {
    let (h, m) = time.split_once(':')?;
    let h: u32 = h.parse().ok()?;
    let m: u32 = m.parse().ok()?;
    if h > 23 || m > 59 {
        return None;
    }
    Some((h, m))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("07:00", true ; "opening hour")]
    #[test_case("06:59", false ; "just before opening")]
    #[test_case("12:30", true ; "midday")]
    #[test_case("18:00", true ; "closing hour sharp")]
    #[test_case("18:01", false ; "one minute past closing")]
    #[test_case("19:00", false ; "after closing")]
    #[test_case("00:00", false ; "midnight")]
    #[test_case("", false ; "empty")]
    #[test_case("nove", false ; "not a time")]
    #[test_case("9", false ; "missing minutes")]
    #[test_case("25:00", false ; "hour out of range")]
    #[test_case("10:99", false ; "minute out of range")]
    fn test_default_window(time: &str, expected: bool) {
        assert_eq!(is_slot_available(time, &OpenHours::default()), expected);
    }

    #[test]
    fn test_custom_window() {
        let hours = OpenHours {
            open_hour: 8,
            close_hour: 17,
        };
        assert!(!is_slot_available("07:30", &hours));
        assert!(is_slot_available("08:00", &hours));
        assert!(is_slot_available("17:00", &hours));
        assert!(!is_slot_available("17:30", &hours));
    }
}
