use std::time::Duration;

use num_bigint::BigUint;
use thiserror::Error;

use crate::config::ConfigBuilderError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Range count cancelled after checking {checked} numbers")]
    Cancelled { checked: BigUint },

    #[error("Range count exceeded time limit of {limit:?} after checking {checked} numbers")]
    TimedOut { limit: Duration, checked: BigUint },

    #[cfg(feature = "parallel")]
    #[error("Thread pool creation failed: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Failed to read input at line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid input at line {line}: {source}")]
    InvalidLine {
        line: usize,
        #[source]
        source: luhn_core::LuhnError,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<ConfigBuilderError> for EngineError {
    fn from(err: ConfigBuilderError) -> Self {
        Self::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
