//! Luhn mod-10 checksum primitives over arbitrary-precision identifiers.
//!
//! The crate is `no_std` and only needs `alloc`. Every operation is a pure
//! function of its inputs.
#![no_std]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

extern crate alloc;

pub mod checksum;
pub mod error;
pub mod identifier;
pub mod range;

pub use checksum::{append_check_digit, generate_check_digit, is_valid, luhn_sum, luhn_sum_digits};
pub use error::{LuhnError, Result};
pub use identifier::Identifier;
pub use range::{count_in_range, count_in_range_exhaustive, count_valid_up_to, DigitOdometer};
