// crates/core/src/error.rs
use alloc::string::String;

use thiserror::Error;

/// Errors raised while turning caller input into an [`Identifier`](crate::Identifier).
///
/// The checksum operations themselves are total; only construction can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LuhnError {
    #[error("Negative input is not a valid identifier: {value}")]
    NegativeInput { value: String },

    #[error("Identifier is empty")]
    Empty,

    #[error("Invalid digit '{character}' at position {position}")]
    InvalidDigit { character: char, position: usize },

    #[error("Digit value {value} at index {position} is not between 0 and 9")]
    DigitOutOfRange { value: u8, position: usize },

    #[error("Check digit must be between 0 and 9, got {0}")]
    CheckDigitOutOfRange(u8),
}

pub type Result<T> = core::result::Result<T, LuhnError>;
