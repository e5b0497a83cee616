// crates/cli/src/presentation.rs
use crate::error::Result;
use crate::options::OutputFormat;
use luhn_engine::{CheckDigit, RangeReport, Verdict};
use serde::Serialize;
use std::fmt::Write;

pub fn render_verdicts(verdicts: &[Verdict], skipped: usize, format: OutputFormat) -> Result<String> {
    if let Some(structured) = render_list(verdicts, format)? {
        return Ok(structured);
    }

    let mut out = String::new();
    writeln!(out, "{:>7}  NUMBER", "VALID")?;
    writeln!(out, "----------------------------------------------")?;
    for verdict in verdicts {
        let mark = if verdict.valid { "yes" } else { "no" };
        writeln!(out, "{mark:>7}  {}", verdict.number)?;
    }
    let invalid = verdicts.iter().filter(|v| !v.valid).count();
    writeln!(out, "---")?;
    write!(out, "{} checked, {invalid} invalid", verdicts.len())?;
    if skipped > 0 {
        write!(out, ", {skipped} unreadable")?;
    }
    out.push('\n');
    Ok(out)
}

pub fn render_check_digits(results: &[CheckDigit], append: bool, format: OutputFormat) -> Result<String> {
    if let Some(structured) = render_list(results, format)? {
        return Ok(structured);
    }

    let mut out = String::new();
    if append {
        for result in results {
            writeln!(out, "{}", result.full)?;
        }
        return Ok(out);
    }

    writeln!(out, "{:>7}  PARTIAL", "CHECK")?;
    writeln!(out, "----------------------------------------------")?;
    for result in results {
        writeln!(out, "{:>7}  {}", result.check_digit, result.partial)?;
    }
    Ok(out)
}

pub fn render_report(report: &RangeReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)? + "\n"),
        OutputFormat::Jsonl => Ok(serde_json::to_string(report)? + "\n"),
        OutputFormat::Yaml => render_yaml(report),
        OutputFormat::Table => {
            let mut out = String::new();
            writeln!(out, "{:<10}{}", "START", report.start)?;
            writeln!(out, "{:<10}{}", "END", report.end)?;
            writeln!(out, "{:<10}{}", "STRATEGY", report.strategy)?;
            if let Some(chunks) = report.chunks {
                writeln!(out, "{:<10}{chunks}", "CHUNKS")?;
            }
            writeln!(out, "{:<10}{} ms", "ELAPSED", report.elapsed_ms)?;
            writeln!(out, "---")?;
            writeln!(out, "{:<10}{}", "VALID", report.count)?;
            Ok(out)
        }
    }
}

/// Structured rendering shared by list outputs; `None` for the table format.
fn render_list<T: Serialize>(items: &[T], format: OutputFormat) -> Result<Option<String>> {
    let rendered = match format {
        OutputFormat::Table => return Ok(None),
        OutputFormat::Json => serde_json::to_string_pretty(items)? + "\n",
        OutputFormat::Jsonl => {
            let mut out = String::new();
            for item in items {
                out.push_str(&serde_json::to_string(item)?);
                out.push('\n');
            }
            out
        }
        OutputFormat::Yaml => render_yaml(items)?,
    };
    Ok(Some(rendered))
}

#[cfg(feature = "yaml")]
fn render_yaml<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_yaml::to_string(value)?)
}

#[cfg(not(feature = "yaml"))]
fn render_yaml<T: Serialize + ?Sized>(_value: &T) -> Result<String> {
    Err(crate::error::AppError::UnsupportedFormat("yaml"))
}
