// crates/core/src/checksum.rs
//! Luhn sum, validity and check-digit generation.
//!
//! See <https://en.wikipedia.org/wiki/Luhn_algorithm#Description>.

use crate::error::{LuhnError, Result};
use crate::identifier::Identifier;

/// Luhn weight of a single digit: doubled digits fold back into one digit.
#[inline]
pub(crate) const fn weigh(digit: u8, doubled: bool) -> u8 {
    if !doubled {
        return digit;
    }
    let value = digit * 2;
    if value >= 10 { value - 9 } else { value }
}

/// Luhn sum over little-endian decimal digits.
///
/// `double_first` selects whether the least significant digit is doubled.
/// Doubling alternates from there on.
///
/// # Errors
/// Returns [`LuhnError::DigitOutOfRange`] for the first entry greater than 9.
pub fn luhn_sum_digits(digits_le: &[u8], double_first: bool) -> Result<u64> {
    if let Some((position, &value)) = digits_le.iter().enumerate().find(|(_, d)| **d > 9) {
        return Err(LuhnError::DigitOutOfRange { value, position });
    }
    Ok(sum_checked_digits(digits_le, double_first))
}

/// [`luhn_sum_digits`] for slices already known to hold decimal digits.
pub(crate) fn sum_checked_digits(digits_le: &[u8], double_first: bool) -> u64 {
    let mut doubled = double_first;
    let mut sum = 0u64;
    for &digit in digits_le {
        sum += u64::from(weigh(digit, doubled));
        doubled = !doubled;
    }
    sum
}

/// Luhn sum of `number`, walking its digits from the right.
///
/// Zero has no significant digits and sums to 0.
#[must_use]
pub fn luhn_sum(number: &Identifier, double_first: bool) -> u64 {
    if number.is_zero() {
        return 0;
    }
    sum_checked_digits(&number.digits_le(), double_first)
}

/// Whether `number`, including its rightmost check digit, passes the Luhn check.
#[must_use]
pub fn is_valid(number: &Identifier) -> bool {
    luhn_sum(number, false) % 10 == 0
}

/// Check digit to append to `partial` so the result passes the Luhn check.
///
/// The rightmost digit of `partial` is doubled because the appended check
/// digit takes over the undoubled position. `(sum * 9) % 10` equals
/// `(10 - sum % 10) % 10`.
#[must_use]
pub fn generate_check_digit(partial: &Identifier) -> u8 {
    // Only the residue matters, so reduce before multiplying.
    let residue = luhn_sum(partial, true) % 10;
    ((residue * 9) % 10) as u8
}

/// `partial` with its check digit appended.
#[must_use]
pub fn append_check_digit(partial: &Identifier) -> Identifier {
    let digit = generate_check_digit(partial);
    Identifier::new(partial.as_biguint() * 10u32 + u32::from(digit))
}
