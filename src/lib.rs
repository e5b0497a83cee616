//! Luhn mod-10 checksums over arbitrary-precision identifiers.
//!
//! This crate gathers the checksum primitives from `luhn_core` and the
//! cancellable, parallel workloads from `luhn_engine` behind one import.
//!
//! ```
//! use luhn::{BigUint, Identifier, count_in_range, generate_check_digit, is_valid};
//!
//! let card: Identifier = "4242424242424242".parse().unwrap();
//! assert!(is_valid(&card));
//! assert_eq!(generate_check_digit(&Identifier::from(92_739_871u32)), 9);
//! assert_eq!(
//!     count_in_range(&Identifier::from(927_398_710u32), &Identifier::from(927_398_720u32)),
//!     BigUint::from(1u32)
//! );
//! ```
#![allow(clippy::multiple_crate_versions)]

pub use luhn_core::{
    DigitOdometer, Identifier, LuhnError, append_check_digit, count_in_range,
    count_in_range_exhaustive, count_valid_up_to, generate_check_digit, is_valid, luhn_sum,
    luhn_sum_digits,
};
pub use luhn_engine::{
    BatchResult, CancellationToken, CheckDigit, Config, ConfigBuilder, EngineError, Interrupt,
    RangeReport, Strategy, Verdict, check_digits, count_range, validate_all, validate_lines,
    validate_reader,
};
pub use num_bigint::BigUint;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
