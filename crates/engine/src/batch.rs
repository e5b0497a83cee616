use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::stats::{BatchResult, Verdict};
use log::{debug, warn};
use luhn_core::Identifier;
use std::io::BufRead;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Validate one identifier per line.
///
/// Blank lines and lines starting with `#` are skipped. `parse` turns the
/// trimmed line into an identifier, so callers decide which separators to
/// accept.
///
/// # Errors
///
/// Fails on the first unreadable line. Unparseable lines are collected into
/// [`BatchResult::errors`], or returned immediately when `config.strict` is set.
pub fn validate_lines<R, F>(reader: R, config: &Config, parse: F) -> Result<BatchResult>
where
    R: BufRead,
    F: Fn(&str) -> luhn_core::Result<Identifier> + Sync,
{
    let mut inputs = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| EngineError::Read { line: index + 1, source })?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        inputs.push((index + 1, trimmed.to_owned()));
    }
    debug!("validating {} inputs", inputs.len());

    let check = |(line, text): &(usize, String)| {
        parse(text.as_str())
            .map(Verdict::of)
            .map_err(|source| EngineError::InvalidLine { line: *line, source })
    };

    #[cfg(feature = "parallel")]
    let outcomes: Vec<Result<Verdict>> = inputs.par_iter().map(check).collect();
    #[cfg(not(feature = "parallel"))]
    let outcomes: Vec<Result<Verdict>> = inputs.iter().map(check).collect();

    let mut result = BatchResult::default();
    for outcome in outcomes {
        match outcome {
            Ok(verdict) => result.verdicts.push(verdict),
            Err(err) if config.strict => return Err(err),
            Err(err) => {
                warn!("skipping input: {err}");
                result.errors.push(err);
            }
        }
    }
    Ok(result)
}

/// [`validate_lines`] with strict decimal parsing.
///
/// # Errors
///
/// See [`validate_lines`].
pub fn validate_reader<R: BufRead>(reader: R, config: &Config) -> Result<BatchResult> {
    validate_lines(reader, config, |line: &str| line.parse())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn validates_each_line_in_order() {
        let input = "4242424242424242\n\n# amex\n378282246310005\n927398710\n";
        let result = validate_reader(Cursor::new(input), &Config::default()).unwrap();
        let valid: Vec<_> = result.verdicts.iter().map(|v| v.valid).collect();
        assert_eq!(valid, vec![true, true, false]);
        assert_eq!(result.invalid_count(), 1);
        assert!(!result.all_valid());
        assert!(result.errors.is_empty());
    }

    #[test]
    fn collects_bad_lines_when_lenient() {
        let input = "927398719\nnot-a-number\n-12\n";
        let result = validate_reader(Cursor::new(input), &Config::default()).unwrap();
        assert_eq!(result.verdicts.len(), 1);
        assert!(result.verdicts[0].valid);
        assert_eq!(result.errors.len(), 2);
        assert!(matches!(result.errors[0], EngineError::InvalidLine { line: 2, .. }));
        assert!(matches!(
            result.errors[1],
            EngineError::InvalidLine { line: 3, source: luhn_core::LuhnError::NegativeInput { .. } }
        ));
        assert!(!result.all_valid());
    }

    #[test]
    fn strict_mode_stops_at_first_bad_line() {
        let config = Config { strict: true, ..Config::default() };
        let err = validate_reader(Cursor::new("1\nabc\n"), &config).unwrap_err();
        assert!(matches!(err, EngineError::InvalidLine { line: 2, .. }));
    }

    #[test]
    fn custom_parser_accepts_grouped_digits() {
        let parse = |s: &str| s.replace(' ', "").parse::<Identifier>();
        let result =
            validate_lines(Cursor::new("4000 0566 5566 5556\n"), &Config::default(), parse).unwrap();
        assert!(result.all_valid());
    }
}
