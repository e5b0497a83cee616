use crate::cancel::{CancellationToken, Interrupt};
use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::options::Strategy;
use crate::stats::RangeReport;
use log::{debug, trace, warn};
use luhn_core::{DigitOdometer, Identifier};
use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A contiguous run of numbers handed to one worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub index: u64,
    pub start: Identifier,
    pub len: u64,
}

/// Lazily splits `[start, end]` into chunks of at most `chunk_size` numbers.
#[derive(Debug, Clone)]
pub struct ChunkPlan {
    next: BigUint,
    remaining: BigUint,
    chunk_size: u64,
    index: u64,
}

impl ChunkPlan {
    #[must_use]
    pub fn new(start: &Identifier, end: &Identifier, chunk_size: u64) -> Self {
        let remaining = if end < start {
            BigUint::zero()
        } else {
            end.as_biguint() - start.as_biguint() + 1u32
        };
        Self {
            next: start.as_biguint().clone(),
            remaining,
            chunk_size: chunk_size.max(1),
            index: 0,
        }
    }
}

impl Iterator for ChunkPlan {
    type Item = Chunk;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining.is_zero() {
            return None;
        }
        let len = self
            .remaining
            .to_u64()
            .map_or(self.chunk_size, |left| left.min(self.chunk_size));
        let chunk = Chunk {
            index: self.index,
            start: Identifier::new(self.next.clone()),
            len,
        };
        self.next += len;
        self.remaining -= len;
        self.index += 1;
        Some(chunk)
    }
}

/// Counts valid numbers in `[start, end]` according to `config`.
///
/// # Errors
///
/// Returns [`EngineError::Cancelled`] or [`EngineError::TimedOut`] when a scan
/// is interrupted, and [`EngineError::ThreadPool`] if the worker pool cannot be
/// built.
pub fn count_range(
    start: &Identifier,
    end: &Identifier,
    config: &Config,
    token: &CancellationToken,
) -> Result<RangeReport> {
    let started = Instant::now();
    let token = match config.time_limit {
        Some(limit) => token.clone().with_time_limit(limit),
        None => token.clone(),
    };
    debug!(
        "counting [{start}, {end}] with strategy {} (threads={}, chunk_size={})",
        config.strategy, config.threads, config.chunk_size
    );

    let (count, chunks) = match config.strategy {
        Strategy::DigitDp => {
            interrupted(token.poll(), config, 0)?;
            (luhn_core::count_in_range(start, end), None)
        }
        Strategy::Scan => {
            let (count, chunks) = scan(start, end, config, &token)?;
            (count, Some(chunks))
        }
    };

    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    debug!("counted {count} valid numbers in {elapsed_ms} ms");

    Ok(RangeReport {
        start: start.clone(),
        end: end.clone(),
        count,
        strategy: config.strategy,
        chunks,
        elapsed_ms,
    })
}

fn scan(
    start: &Identifier,
    end: &Identifier,
    config: &Config,
    token: &CancellationToken,
) -> Result<(BigUint, u64)> {
    let plan = ChunkPlan::new(start, end, config.chunk_size);
    let checked = AtomicU64::new(0);
    let chunk_count = AtomicU64::new(0);

    let run_chunk = |chunk: Chunk| -> Result<BigUint> {
        let found = scan_chunk(&chunk, config, token, &checked)?;
        chunk_count.fetch_add(1, Ordering::Relaxed);
        Ok(BigUint::from(found))
    };

    #[cfg(feature = "parallel")]
    let total = {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .build()?;
        pool.install(|| {
            plan.par_bridge()
                .map(run_chunk)
                .try_reduce(BigUint::zero, |a, b| Ok(a + b))
        })
    };

    #[cfg(not(feature = "parallel"))]
    let total = plan
        .map(run_chunk)
        .try_fold(BigUint::zero(), |acc, found| found.map(|f| acc + f));

    Ok((total?, chunk_count.into_inner()))
}

fn scan_chunk(
    chunk: &Chunk,
    config: &Config,
    token: &CancellationToken,
    checked: &AtomicU64,
) -> Result<u64> {
    trace!("chunk {} starts at {} ({} numbers)", chunk.index, chunk.start, chunk.len);

    let mut odometer = DigitOdometer::new(&chunk.start);
    let mut found = 0;
    let mut done = 0;
    while done < chunk.len {
        interrupted(token.poll(), config, checked.load(Ordering::Relaxed))?;
        let step = (chunk.len - done).min(config.check_interval);
        found += odometer.count_valid(step);
        done += step;
        checked.fetch_add(step, Ordering::Relaxed);
    }
    Ok(found)
}

fn interrupted(interrupt: Interrupt, config: &Config, checked: u64) -> Result<()> {
    match interrupt {
        Interrupt::Continue => Ok(()),
        Interrupt::Cancelled => {
            warn!("range count cancelled after {checked} numbers");
            Err(EngineError::Cancelled { checked: checked.into() })
        }
        Interrupt::Expired => {
            warn!("range count hit its time limit after {checked} numbers");
            Err(EngineError::TimedOut {
                limit: config.time_limit.unwrap_or_default(),
                checked: checked.into(),
            })
        }
    }
}
