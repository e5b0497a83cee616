use crate::options::Strategy;
use derive_builder::Builder;
use std::time::Duration;

pub const DEFAULT_CHUNK_SIZE: u64 = 65_536;
pub const DEFAULT_CHECK_INTERVAL: u64 = 4_096;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct Config {
    #[builder(default)]
    pub strategy: Strategy,
    /// Worker threads for parallel scans.
    #[builder(default = "num_cpus::get()")]
    pub threads: usize,
    /// Numbers handed to a worker at a time.
    #[builder(default = "DEFAULT_CHUNK_SIZE")]
    pub chunk_size: u64,
    /// Numbers checked between two cancellation checks.
    #[builder(default = "DEFAULT_CHECK_INTERVAL")]
    pub check_interval: u64,
    #[builder(default)]
    pub time_limit: Option<Duration>,
    /// Batch validation stops at the first unparseable line.
    #[builder(default)]
    pub strict: bool,
}

impl ConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.threads == Some(0) {
            return Err("threads must be at least 1".to_string());
        }
        if self.chunk_size == Some(0) {
            return Err("chunk_size must be at least 1".to_string());
        }
        if self.check_interval == Some(0) {
            return Err("check_interval must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            threads: num_cpus::get(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            check_interval: DEFAULT_CHECK_INTERVAL,
            time_limit: None,
            strict: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    #[test]
    fn builder_defaults_match_default() {
        let built = ConfigBuilder::default().build().unwrap();
        let default = Config::default();
        assert_eq!(built.strategy, default.strategy);
        assert_eq!(built.chunk_size, DEFAULT_CHUNK_SIZE);
        assert_eq!(built.check_interval, DEFAULT_CHECK_INTERVAL);
        assert!(built.threads >= 1);
        assert!(built.time_limit.is_none());
    }

    #[test]
    fn rejects_zero_sizes() {
        assert!(ConfigBuilder::default().chunk_size(0u64).build().is_err());
        assert!(ConfigBuilder::default().check_interval(0u64).build().is_err());
        assert!(ConfigBuilder::default().threads(0usize).build().is_err());
    }

    #[test]
    fn builder_failures_become_engine_errors() {
        let err: EngineError = ConfigBuilder::default().check_interval(0u64).build().unwrap_err().into();
        assert!(
            matches!(&err, EngineError::Config(message) if message.contains("check_interval")),
            "got {err:?}"
        );
        assert!(err.to_string().starts_with("Invalid configuration"));
    }

    #[test]
    fn time_limit_setter_accepts_duration() {
        let config = ConfigBuilder::default()
            .time_limit(Duration::from_secs(3))
            .strategy(Strategy::Scan)
            .build()
            .unwrap();
        assert_eq!(config.time_limit, Some(Duration::from_secs(3)));
        assert_eq!(config.strategy, Strategy::Scan);
    }
}
