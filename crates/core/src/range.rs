// crates/core/src/range.rs
//! Counting Luhn-valid numbers in an inclusive range.
//!
//! Two implementations are provided. [`count_in_range_exhaustive`] visits every
//! number and is the reference definition. [`count_in_range`] counts over digit
//! positions instead and is independent of the range width.

use alloc::vec::Vec;
use core::array;

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use crate::checksum::{sum_checked_digits, weigh};
use crate::identifier::Identifier;

/// Little-endian decimal counter stepped in place.
///
/// Avoids a big-integer division per digit while walking consecutive numbers.
/// Only built from an [`Identifier`], so every entry stays in `0..=9`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitOdometer {
    digits: Vec<u8>,
}

impl DigitOdometer {
    #[must_use]
    pub fn new(start: &Identifier) -> Self {
        Self { digits: start.digits_le() }
    }

    #[inline]
    #[must_use]
    pub fn digits_le(&self) -> &[u8] {
        &self.digits
    }

    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        sum_checked_digits(&self.digits, false) % 10 == 0
    }

    #[must_use]
    pub fn to_identifier(&self) -> Identifier {
        BigUint::from_radix_le(&self.digits, 10).map_or_else(Identifier::zero, Identifier::new)
    }

    /// Advances to the next integer.
    pub fn increment(&mut self) {
        for digit in &mut self.digits {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                return;
            }
        }
        self.digits.push(1);
    }

    /// Counts valid numbers among the next `len` values, starting with the
    /// current one. The odometer ends up `len` steps further.
    pub fn count_valid(&mut self, len: u64) -> u64 {
        let mut count = 0;
        for _ in 0..len {
            if self.is_valid() {
                count += 1;
            }
            self.increment();
        }
        count
    }
}

/// Number of Luhn-valid integers in `[start, end]`, visiting each one.
///
/// Returns zero when `end < start`.
#[must_use]
pub fn count_in_range_exhaustive(start: &Identifier, end: &Identifier) -> BigUint {
    if end < start {
        return BigUint::zero();
    }

    let mut remaining = end.as_biguint() - start.as_biguint() + 1u32;
    let mut odometer = DigitOdometer::new(start);
    let mut count = BigUint::zero();
    while !remaining.is_zero() {
        let step = remaining.to_u64().unwrap_or(u64::MAX);
        count += odometer.count_valid(step);
        remaining -= step;
    }
    count
}

/// Number of Luhn-valid integers in `[0, limit]`.
///
/// Zero is counted: its Luhn sum is 0.
#[must_use]
pub fn count_valid_up_to(limit: &Identifier) -> BigUint {
    let bounds = limit.digits_le();

    // free[r]: prefixes already below the limit whose partial sum is r (mod 10).
    let mut free: [BigUint; 10] = array::from_fn(|_| BigUint::zero());
    // Partial sum of the prefix that still equals the limit.
    let mut tight = 0usize;

    for (position, &bound) in bounds.iter().enumerate().rev() {
        let doubled = position % 2 == 1;
        let mut next: [BigUint; 10] = array::from_fn(|_| BigUint::zero());

        for (residue, ways) in free.iter().enumerate() {
            if ways.is_zero() {
                continue;
            }
            for digit in 0..10 {
                next[(residue + usize::from(weigh(digit, doubled))) % 10] += ways;
            }
        }
        for digit in 0..bound {
            next[(tight + usize::from(weigh(digit, doubled))) % 10] += 1u32;
        }

        tight = (tight + usize::from(weigh(bound, doubled))) % 10;
        free = next;
    }

    let [mut total, ..] = free;
    if tight == 0 {
        total += 1u32;
    }
    total
}

/// Number of Luhn-valid integers in `[start, end]`.
///
/// Matches [`count_in_range_exhaustive`] exactly, in time proportional to the
/// number of digits. Returns zero when `end < start`.
#[must_use]
pub fn count_in_range(start: &Identifier, end: &Identifier) -> BigUint {
    if end < start {
        return BigUint::zero();
    }

    let upper = count_valid_up_to(end);
    if start.is_zero() {
        return upper;
    }
    let below = Identifier::new(start.as_biguint() - 1u32);
    upper - count_valid_up_to(&below)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checksum::is_valid;

    fn id(value: u64) -> Identifier {
        Identifier::from(value)
    }

    #[test]
    fn odometer_carries() {
        let mut odometer = DigitOdometer::new(&id(1999));
        odometer.increment();
        assert_eq!(odometer.to_identifier(), id(2000));

        let mut odometer = DigitOdometer::new(&id(99));
        odometer.increment();
        assert_eq!(odometer.digits_le(), &[0, 0, 1]);
    }

    #[test]
    fn odometer_from_zero() {
        let mut odometer = DigitOdometer::new(&Identifier::zero());
        assert!(odometer.is_valid());
        assert_eq!(odometer.count_valid(19), 2); // 0 and 18
        assert_eq!(odometer.to_identifier(), id(19));
    }

    #[test]
    fn small_prefix_counts() {
        assert_eq!(count_valid_up_to(&id(0)), BigUint::from(1u32));
        assert_eq!(count_valid_up_to(&id(9)), BigUint::from(1u32));
        assert_eq!(count_valid_up_to(&id(18)), BigUint::from(2u32));
        assert_eq!(count_valid_up_to(&id(99)), BigUint::from(10u32));
    }

    #[test]
    fn reversed_range_is_empty() {
        assert!(count_in_range(&id(20), &id(10)).is_zero());
        assert!(count_in_range_exhaustive(&id(20), &id(10)).is_zero());
    }

    #[test]
    fn single_point_ranges() {
        for n in 0..200u64 {
            let expected = BigUint::from(u32::from(is_valid(&id(n))));
            assert_eq!(count_in_range(&id(n), &id(n)), expected, "n = {n}");
            assert_eq!(count_in_range_exhaustive(&id(n), &id(n)), expected, "n = {n}");
        }
    }

    #[test]
    fn digit_counting_matches_scan_across_magnitudes() {
        let bounds = [(0u64, 1_000u64), (95, 1_105), (999_990, 1_000_020), (123_456, 133_456)];
        for (start, end) in bounds {
            assert_eq!(
                count_in_range(&id(start), &id(end)),
                count_in_range_exhaustive(&id(start), &id(end)),
                "[{start}, {end}]"
            );
        }
    }

    #[test]
    fn wide_range_is_about_a_tenth() {
        // Every block of ten consecutive numbers aligned on a multiple of ten
        // holds exactly one valid number.
        let start: Identifier = "1000000000000000000000000000000".parse().unwrap();
        let end: Identifier = "1999999999999999999999999999999".parse().unwrap();
        let expected: BigUint = "100000000000000000000000000000".parse().unwrap();
        assert_eq!(count_in_range(&start, &end), expected);
    }
}
