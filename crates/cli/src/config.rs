// crates/cli/src/config.rs
use crate::args::{Args, Command};
use crate::error::AppError;
use luhn_engine::EngineError;
use crate::options;
pub use luhn_engine::config::{Config, ConfigBuilder};
use luhn_engine::options as engine_options;

impl TryFrom<&Args> for Config {
    type Error = AppError;

    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        let mut builder = ConfigBuilder::default();
        builder.threads(args.threads.unwrap_or_else(num_cpus::get));

        match &args.command {
            Command::Validate(validate) => {
                builder.strict(validate.strict);
            }
            Command::CheckDigit(_) => {}
            Command::Count(count) => {
                builder
                    .strategy(engine_options::Strategy::from(count.strategy))
                    .chunk_size(count.chunk_size)
                    .check_interval(count.check_interval)
                    .time_limit(count.time_limit);
            }
        }

        Ok(builder.build().map_err(EngineError::from)?)
    }
}

// From trait implementations for CLI -> Engine enum conversion

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(options::Strategy, engine_options::Strategy, DigitDp, Scan);

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::time::Duration;

    fn config_for(argv: &[&str]) -> Config {
        let args = Args::try_parse_from(argv).unwrap();
        Config::try_from(&args).unwrap()
    }

    #[test]
    fn count_options_reach_engine() {
        let config = config_for(&[
            "luhn", "-j", "3", "count", "1", "2", "--strategy", "scan", "--chunk-size", "9",
            "--check-interval", "5", "--time-limit", "1",
        ]);
        assert_eq!(config.threads, 3);
        assert_eq!(config.strategy, engine_options::Strategy::Scan);
        assert_eq!(config.chunk_size, 9);
        assert_eq!(config.check_interval, 5);
        assert_eq!(config.time_limit, Some(Duration::from_secs(1)));
    }

    #[test]
    fn validate_strict_flag() {
        let config = config_for(&["luhn", "validate", "--strict", "--from", "-"]);
        assert!(config.strict);
        assert_eq!(config.strategy, engine_options::Strategy::DigitDp);
    }

    #[test]
    fn rejected_settings_surface_as_engine_config_errors() {
        let mut args = Args::try_parse_from(["luhn", "count", "1", "2"]).unwrap();
        args.threads = Some(0);
        let err = Config::try_from(&args).unwrap_err();
        assert!(
            matches!(&err, AppError::Engine(EngineError::Config(message)) if message.contains("threads")),
            "got {err:?}"
        );
    }

    #[test]
    fn threads_default_to_cpu_count() {
        let config = config_for(&["luhn", "check-digit", "1"]);
        assert_eq!(config.threads, num_cpus::get());
    }
}
