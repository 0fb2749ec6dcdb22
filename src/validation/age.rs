//! Birth-date based age checks

use chrono::NaiveDate;

/// Minimum age for self-registration
pub const DEFAULT_MIN_AGE: u32 = 13;

/// Age in whole years at `today` for an ISO birth date
///
/// Computed as elapsed days divided by 365.25, floored. Returns `None` when
/// the birth date does not parse or lies in the future.
pub fn age_in_years(birth_iso: &str, today: NaiveDate) -> Option<i64> {
    let birth = NaiveDate::parse_from_str(birth_iso, "%Y-%m-%d").ok()?;
    let days = (today - birth).num_days();
    if days < 0 {
        return None;
    }
    Some((days as f64 / 365.25).floor() as i64)
}

/// Whether the person born on `birth_iso` is at least `min_age` years old
pub fn is_adult_enough(birth_iso: &str, today: NaiveDate, min_age: u32) -> bool {
    match age_in_years(birth_iso, today) {
        Some(age) => age >= i64::from(min_age),
        None => false,
    }
}
