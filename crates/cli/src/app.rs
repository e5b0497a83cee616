use crate::args::{Args, CheckDigitArgs, Command, CountArgs, ValidateArgs};
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::parsers::normalize_identifier;
use crate::presentation;
use luhn_engine::{BatchResult, CancellationToken};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::Path;
use tracing::{debug, info};

/// How a successful run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// At least one identifier failed validation or could not be read.
    Invalid,
}

/// Run the parsed command, writing results to stdout.
///
/// # Errors
///
/// Returns an error if configuration, input, computation or output fails.
pub fn run(args: &Args) -> Result<Outcome> {
    let config = Config::try_from(args)?;
    debug!(?config, "resolved configuration");

    let (rendered, outcome) = match &args.command {
        Command::Validate(validate) => run_validate(validate, args, &config)?,
        Command::CheckDigit(check) => run_check_digit(check, args)?,
        Command::Count(count) => run_count(count, args, &config)?,
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(outcome)
}

type Rendered = (String, Outcome);

fn run_validate(validate: &ValidateArgs, args: &Args, config: &Config) -> Result<Rendered> {
    let mut verdicts = luhn_engine::validate_all(&validate.numbers);
    let mut skipped = 0;

    if let Some(path) = &validate.from {
        let batch = read_batch(path, config)?;
        info!(
            "read {} identifiers from {}, {} unreadable",
            batch.verdicts.len(),
            path.display(),
            batch.errors.len()
        );
        skipped = batch.errors.len();
        verdicts.extend(batch.verdicts);
    }

    let outcome = if skipped == 0 && verdicts.iter().all(|v| v.valid) {
        Outcome::Success
    } else {
        Outcome::Invalid
    };
    Ok((presentation::render_verdicts(&verdicts, skipped, args.format)?, outcome))
}

fn read_batch(path: &Path, config: &Config) -> Result<BatchResult> {
    if path.as_os_str() == "-" {
        return Ok(luhn_engine::validate_lines(io::stdin().lock(), config, normalize_identifier)?);
    }
    let file = File::open(path).map_err(|source| AppError::Open { path: path.to_path_buf(), source })?;
    Ok(luhn_engine::validate_lines(BufReader::new(file), config, normalize_identifier)?)
}

fn run_check_digit(check: &CheckDigitArgs, args: &Args) -> Result<Rendered> {
    let results = luhn_engine::check_digits(&check.partials);
    let rendered = presentation::render_check_digits(&results, check.append, args.format)?;
    Ok((rendered, Outcome::Success))
}

fn run_count(count: &CountArgs, args: &Args, config: &Config) -> Result<Rendered> {
    let token = CancellationToken::new();
    let report = luhn_engine::count_range(&count.start, &count.end, config, &token)?;
    debug!(
        "{} valid identifiers in [{}, {}]",
        report.count, report.start, report.end
    );
    Ok((presentation::render_report(&report, args.format)?, Outcome::Success))
}
