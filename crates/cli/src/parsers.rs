use luhn_core::Identifier;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

/// Drop the group separators people type into card numbers (space, `-`, `_`).
///
/// A leading `-` is kept as a sign so negative input is reported as such.
#[must_use]
pub fn strip_separators(s: &str) -> String {
    let trimmed = s.trim();
    let (sign, body) = trimmed
        .strip_prefix('-')
        .map_or(("", trimmed), |rest| ("-", rest));
    let digits: String = body
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .collect();
    format!("{sign}{digits}")
}

/// Parse an identifier, tolerating group separators.
///
/// # Errors
/// Returns the core parse error for empty, negative or non-decimal input.
pub fn normalize_identifier(s: &str) -> luhn_core::Result<Identifier> {
    strip_separators(s).parse()
}

/// Clap value parser for identifiers.
///
/// # Errors
/// Returns a human-readable message if the input is not a non-negative integer.
pub fn parse_identifier(s: &str) -> Result<Identifier, String> {
    normalize_identifier(s).map_err(|err| err.to_string())
}

fn parse_bounded_number<T>(s: &str, min: T, max: Option<T>) -> Result<T, String>
where
    T: Copy + PartialOrd + Display + FromStr,
    <T as FromStr>::Err: Display,
{
    let value = s
        .parse::<T>()
        .map_err(|err| format!("invalid number '{s}': {err}"))?;
    if value < min {
        return Err(format!("value must be at least {min}"));
    }
    if let Some(max_bound) = max
        && value > max_bound
    {
        return Err(format!("value must be at most {max_bound}"));
    }
    Ok(value)
}

/// Parse a thread count constrained to the inclusive range [1, 512].
///
/// # Errors
/// Returns an error if the input string is not a valid number or is outside the range [1, 512].
pub fn parse_thread_count(s: &str) -> Result<usize, String> {
    parse_bounded_number(s, 1, Some(512))
}

/// Parse a positive `u64` (>= 1) from CLI input.
///
/// # Errors
/// Returns an error if the input string is not a valid number or is less than 1.
pub fn parse_positive_u64(s: &str) -> Result<u64, String> {
    parse_bounded_number(s, 1, None)
}

/// Parse a non-negative number of seconds, fractions allowed (`1.5`).
///
/// # Errors
/// Returns an error for negative, non-finite or unparseable values.
pub fn parse_seconds(s: &str) -> Result<Duration, String> {
    let secs = parse_bounded_number(s, 0.0_f64, None)?;
    Duration::try_from_secs_f64(secs).map_err(|err| format!("invalid duration '{s}': {err}"))
}
