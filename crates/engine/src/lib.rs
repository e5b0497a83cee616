//! Workloads built on `luhn_core`: range counts with cancellation and
//! optional parallelism, and batch validation of line-oriented input.

pub mod batch;
pub mod cancel;
pub mod config;
pub mod error;
pub mod options;
pub mod range;
pub mod stats;

pub use crate::batch::{validate_lines, validate_reader};
pub use crate::cancel::{CancellationToken, Interrupt};
pub use crate::config::{Config, ConfigBuilder};
pub use crate::error::{EngineError, Result};
pub use crate::options::Strategy;
pub use crate::range::count_range;
pub use crate::stats::{BatchResult, CheckDigit, RangeReport, Verdict};

use luhn_core::Identifier;

/// Validate each identifier.
#[must_use]
pub fn validate_all(numbers: &[Identifier]) -> Vec<Verdict> {
    numbers.iter().cloned().map(Verdict::of).collect()
}

/// Compute the check digit of each partial identifier.
#[must_use]
pub fn check_digits(partials: &[Identifier]) -> Vec<CheckDigit> {
    partials.iter().cloned().map(CheckDigit::of).collect()
}
