//! Deterministic string transforms
//!
//! Masking and formatting helpers for user-facing fields. None of these
//! validate anything or fail: partial input yields partial masks, and
//! unparseable input is returned unchanged.

use chrono::{Duration, NaiveTime, Timelike};

/// Strips everything but ASCII digits
pub fn only_digits(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Progressive Brazilian phone mask
///
/// Applies `(DD) DDDD-DDDD` for 10-digit numbers and `(DD) DDDDD-DDDD` for
/// 11-digit (mobile) numbers, producing partial masks as digits accumulate.
/// Extra digits beyond 11 are dropped. Idempotent on already-masked input.
pub fn mask_phone(raw: &str) -> String {
    let d: String = only_digits(raw).chars().take(11).collect();
    if d.is_empty() {
        return String::new();
    }
    match d.len() {
        1..=2 => format!("({d}"),
        3..=6 => format!("({}) {}", &d[..2], &d[2..]),
        7..=10 => format!("({}) {}-{}", &d[..2], &d[2..6], &d[6..]),
        _ => format!("({}) {}-{}", &d[..2], &d[2..7], &d[7..11]),
    }
}

/// Progressive identifier (CPF) mask: `DDD.DDD.DDD-DD`
pub fn mask_identifier(raw: &str) -> String {
    let d: String = only_digits(raw).chars().take(11).collect();
    match d.len() {
        0..=3 => d,
        4..=6 => format!("{}.{}", &d[..3], &d[3..]),
        7..=9 => format!("{}.{}.{}", &d[..3], &d[3..6], &d[6..]),
        _ => format!("{}.{}.{}-{}", &d[..3], &d[3..6], &d[6..9], &d[9..]),
    }
}

/// Converts `YYYY-MM-DD` to `DD/MM/YYYY` for display
///
/// Returns the input unchanged when it does not split into three numeric
/// groups.
pub fn format_date_local(iso: &str) -> String {
    let parts: Vec<&str> = iso.split('-').collect();
    if parts.len() != 3 {
        return iso.to_string();
    }
    match (
        parts[0].parse::<u32>(),
        parts[1].parse::<u32>(),
        parts[2].parse::<u32>(),
    ) {
        (Ok(y), Ok(m), Ok(d)) => format!("{d:02}/{m:02}/{y:04}"),
        _ => iso.to_string(),
    }
}

/// Adds a minute offset to an `HH:MM` string
///
/// Wraps across hour and midnight boundaries. Used to compute the arrival
/// grace deadline ("arrive by HH:MM"). Returns the input unchanged when it
/// does not parse as a time of day.
pub fn add_minutes(hhmm: &str, minutes: i64) -> String {
    match NaiveTime::parse_from_str(hhmm, "%H:%M") {
        Ok(time) => {
            let (shifted, _) = time.overflowing_add_signed(Duration::minutes(minutes));
            format!("{:02}:{:02}", shifted.hour(), shifted.minute())
        }
        Err(_) => hhmm.to_string(),
    }
}
