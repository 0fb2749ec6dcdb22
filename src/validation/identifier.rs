//! Patient identifier (CPF) validation
//!
//! Two policies exist in the product's history: the full modulus-11
//! check-digit algorithm, and a relaxed rule that only requires a non-empty
//! digit string. Both are kept behind a configuration flag; check-digit is
//! the default.

use crate::format::only_digits;
use serde::{Deserialize, Serialize};

/// Identifier validation strictness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdentifierPolicy {
    /// 11 digits, no repeated-digit sequences, valid check digits
    CheckDigit,
    /// Any non-empty digit string
    Lenient,
}

impl Default for IdentifierPolicy {
    fn default() -> Self {
        IdentifierPolicy::CheckDigit
    }
}

/// Whether the input is a valid identifier under the given policy
pub fn is_identifier_valid(raw: &str, policy: IdentifierPolicy) -> bool {
    let digits = only_digits(raw);
    match policy {
        IdentifierPolicy::Lenient => !digits.is_empty(),
        IdentifierPolicy::CheckDigit => has_valid_check_digits(&digits),
    }
}

/// Modulus-11 check-digit verification
///
/// Requires exactly 11 digits and rejects sequences of one repeated digit
/// (11111111111 passes the arithmetic but is not a real identifier).
fn has_valid_check_digits(digits: &str) -> bool {
    if digits.len() != 11 {
        return false;
    }
    let d: Vec<u32> = digits.chars().filter_map(|c| c.to_digit(10)).collect();
    if d.len() != 11 {
        return false;
    }
    if d.iter().all(|&x| x == d[0]) {
        return false;
    }

    let calc = |slice: &[u32]| -> u32 {
        let len = slice.len() as u32;
        slice
            .iter()
            .enumerate()
            .map(|(i, &v)| v * (len + 1 - i as u32))
            .sum()
    };

    let d1 = (calc(&d[..9]) * 10) % 11 % 10;
    let d2 = (calc(&d[..10]) * 10) % 11 % 10;
    d1 == d[9] && d2 == d[10]
}
