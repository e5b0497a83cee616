// crates/core/src/identifier.rs
use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

use crate::error::{LuhnError, Result};

/// A non-negative identifier of arbitrary length, such as a card number.
///
/// Negative values are unrepresentable: signed inputs go through
/// [`TryFrom`] and are rejected with [`LuhnError::NegativeInput`].
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier(BigUint);

impl Identifier {
    #[inline]
    #[must_use]
    pub const fn new(value: BigUint) -> Self {
        Self(value)
    }

    #[inline]
    #[must_use]
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    #[inline]
    #[must_use]
    pub const fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn into_inner(self) -> BigUint {
        self.0
    }

    /// Decimal digits, least significant first. Zero yields `[0]`.
    #[must_use]
    pub fn digits_le(&self) -> Vec<u8> {
        self.0.to_radix_le(10)
    }

    /// Builds an identifier from little-endian decimal digits.
    ///
    /// # Errors
    /// Returns [`LuhnError::DigitOutOfRange`] if any entry is greater than 9.
    pub fn from_digits_le(digits: &[u8]) -> Result<Self> {
        if let Some((position, &value)) = digits.iter().enumerate().find(|(_, d)| **d > 9) {
            return Err(LuhnError::DigitOutOfRange { value, position });
        }
        if digits.is_empty() {
            return Ok(Self::zero());
        }
        BigUint::from_radix_le(digits, 10)
            .map(Self)
            .ok_or(LuhnError::Empty)
    }

    #[must_use]
    pub fn digit_count(&self) -> usize {
        self.digits_le().len()
    }

    /// Returns `self * 10 + digit`.
    ///
    /// # Errors
    /// Returns [`LuhnError::CheckDigitOutOfRange`] if `digit > 9`.
    pub fn with_appended_digit(&self, digit: u8) -> Result<Self> {
        if digit > 9 {
            return Err(LuhnError::CheckDigitOutOfRange(digit));
        }
        Ok(Self(&self.0 * 10u32 + u32::from(digit)))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Strict decimal parsing: ASCII digits only, no sign, no separators.
impl FromStr for Identifier {
    type Err = LuhnError;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(LuhnError::Empty);
        }

        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        if body.is_empty() {
            return Err(LuhnError::InvalidDigit { character: '-', position: 0 });
        }

        let offset = usize::from(negative);
        let digits = body
            .chars()
            .enumerate()
            .map(|(position, character)| {
                character
                    .to_digit(10)
                    .and_then(|d| u8::try_from(d).ok())
                    .ok_or(LuhnError::InvalidDigit { character, position: position + offset })
            })
            .collect::<Result<Vec<u8>>>()?;

        let value = BigUint::from_radix_be(&digits, 10).ok_or(LuhnError::Empty)?;
        if negative && !value.is_zero() {
            return Err(LuhnError::NegativeInput { value: s.to_string() });
        }
        Ok(Self(value))
    }
}

impl From<BigUint> for Identifier {
    fn from(value: BigUint) -> Self {
        Self(value)
    }
}

impl From<Identifier> for BigUint {
    fn from(value: Identifier) -> Self {
        value.0
    }
}

impl From<u32> for Identifier {
    fn from(value: u32) -> Self {
        Self(BigUint::from(value))
    }
}

impl From<u64> for Identifier {
    fn from(value: u64) -> Self {
        Self(BigUint::from(value))
    }
}

impl From<u128> for Identifier {
    fn from(value: u128) -> Self {
        Self(BigUint::from(value))
    }
}

impl TryFrom<i64> for Identifier {
    type Error = LuhnError;

    fn try_from(value: i64) -> Result<Self> {
        u64::try_from(value)
            .map(Self::from)
            .map_err(|_| LuhnError::NegativeInput { value: value.to_string() })
    }
}

impl TryFrom<&BigInt> for Identifier {
    type Error = LuhnError;

    fn try_from(value: &BigInt) -> Result<Self> {
        value
            .to_biguint()
            .map(Self)
            .ok_or_else(|| LuhnError::NegativeInput { value: value.to_string() })
    }
}

impl TryFrom<BigInt> for Identifier {
    type Error = LuhnError;

    fn try_from(value: BigInt) -> Result<Self> {
        Self::try_from(&value)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Identifier {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Identifier {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let text = alloc::string::String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
