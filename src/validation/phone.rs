//! Phone number validation
//!
//! Brazilian numbers: 10 digits (landline) or 11 digits (mobile) after
//! stripping formatting, with a two-digit area code in the range 11-99.

use crate::format::only_digits;

/// Lowest valid area code
const AREA_CODE_MIN: u32 = 11;
/// Highest valid area code
const AREA_CODE_MAX: u32 = 99;

/// Normalizes a phone number to its digit string
///
/// Returns `None` when the number is not valid, so callers can't accidentally
/// persist an unvalidated phone.
pub fn normalize_phone(raw: &str) -> Option<String> {
    let digits = only_digits(raw);
    if digits.len() != 10 && digits.len() != 11 {
        return None;
    }
    let area_code: u32 = digits[..2].parse().ok()?;
    if !(AREA_CODE_MIN..=AREA_CODE_MAX).contains(&area_code) {
        return None;
    }
    Some(digits)
}

/// Whether the input holds a valid phone number in any formatting
pub fn is_phone_valid(raw: &str) -> bool {
    normalize_phone(raw).is_some()
}
