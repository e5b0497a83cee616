use crate::error::EngineError;
use crate::options::Strategy;
use luhn_core::Identifier;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize, Serializer};

/// Outcome of validating one identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub number: Identifier,
    pub valid: bool,
}

impl Verdict {
    #[must_use]
    pub fn of(number: Identifier) -> Self {
        let valid = luhn_core::is_valid(&number);
        Self { number, valid }
    }
}

/// A partial identifier together with its check digit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckDigit {
    pub partial: Identifier,
    pub check_digit: u8,
    pub full: Identifier,
}

impl CheckDigit {
    #[must_use]
    pub fn of(partial: Identifier) -> Self {
        let check_digit = luhn_core::generate_check_digit(&partial);
        let full = luhn_core::append_check_digit(&partial);
        Self { partial, check_digit, full }
    }
}

/// Result of counting valid identifiers in `[start, end]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeReport {
    pub start: Identifier,
    pub end: Identifier,
    #[serde(serialize_with = "serialize_decimal")]
    pub count: BigUint,
    pub strategy: Strategy,
    /// Chunks scanned; absent for digit counting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunks: Option<u64>,
    pub elapsed_ms: u64,
}

/// Verdicts for every readable line, plus the lines that failed.
#[derive(Debug, Default)]
pub struct BatchResult {
    pub verdicts: Vec<Verdict>,
    pub errors: Vec<EngineError>,
}

impl BatchResult {
    #[must_use]
    pub fn all_valid(&self) -> bool {
        self.errors.is_empty() && self.verdicts.iter().all(|v| v.valid)
    }

    #[must_use]
    pub fn invalid_count(&self) -> usize {
        self.verdicts.iter().filter(|v| !v.valid).count()
    }
}

fn serialize_decimal<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}
