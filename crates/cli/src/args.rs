use crate::options::{OutputFormat, Strategy};
use crate::parsers::{parse_identifier, parse_positive_u64, parse_seconds, parse_thread_count};
use clap::{Parser, Subcommand};
use luhn_core::Identifier;
use luhn_engine::config::{DEFAULT_CHECK_INTERVAL, DEFAULT_CHUNK_SIZE};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(
    name = "luhn",
    version,
    about = "Luhn mod-10 checksums over arbitrarily long identifiers"
)]
pub struct Args {
    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Worker threads for parallel work [default: number of CPUs]
    #[arg(long, short = 'j', value_parser = parse_thread_count, global = true)]
    pub threads: Option<usize>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check whether complete identifiers pass the Luhn check
    Validate(ValidateArgs),
    /// Compute the check digit for partial identifiers
    CheckDigit(CheckDigitArgs),
    /// Count valid identifiers in an inclusive range
    Count(CountArgs),
}

#[derive(Debug, clap::Args)]
pub struct ValidateArgs {
    /// Identifiers including their check digit
    #[arg(
        value_parser = parse_identifier,
        allow_negative_numbers = true,
        required_unless_present = "from"
    )]
    pub numbers: Vec<Identifier>,

    /// Read one identifier per line from FILE (`-` for stdin)
    #[arg(long, value_name = "FILE")]
    pub from: Option<PathBuf>,

    /// Fail on the first unparseable line instead of reporting it
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, clap::Args)]
pub struct CheckDigitArgs {
    /// Identifiers without their check digit
    #[arg(value_parser = parse_identifier, allow_negative_numbers = true, required = true)]
    pub partials: Vec<Identifier>,

    /// Print the complete identifiers instead of the check digits
    #[arg(long)]
    pub append: bool,
}

#[derive(Debug, clap::Args)]
pub struct CountArgs {
    /// First identifier of the range (inclusive)
    #[arg(value_parser = parse_identifier, allow_negative_numbers = true)]
    pub start: Identifier,

    /// Last identifier of the range (inclusive)
    #[arg(value_parser = parse_identifier, allow_negative_numbers = true)]
    pub end: Identifier,

    #[arg(long, value_enum, default_value_t = Strategy::DigitDp)]
    pub strategy: Strategy,

    /// Numbers per work unit when scanning
    #[arg(long, value_parser = parse_positive_u64, default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: u64,

    /// Numbers checked between cancellation checks when scanning
    #[arg(long, value_parser = parse_positive_u64, default_value_t = DEFAULT_CHECK_INTERVAL)]
    pub check_interval: u64,

    /// Give up after SECS seconds
    #[arg(long, value_name = "SECS", value_parser = parse_seconds)]
    pub time_limit: Option<Duration>,
}
