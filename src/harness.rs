// SPDX-License-Identifier: MIT

use std::time::{Duration, Instant};

use crate::chunks::{AtomicCursor, MutexCursor};
use crate::error::Error;
use crate::pool::{Accumulator, AtomicTotal, MutexTotal, WorkerPool};

/// The result of timing one strategy: how long the reduction itself took and
/// the sum it produced. Identical in shape for all three strategies so they
/// can be compared line for line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    pub elapsed: Duration,
    pub sum: i64,
}

/// Sums the sequence with a single linear pass on the calling thread.
///
/// This is both the non-concurrent timing reference and the correctness
/// oracle: the parallel strategies must reproduce its sum exactly for the
/// same sequence.
pub fn sequential(data: &[i32]) -> Measurement {
    let start = Instant::now();
    let sum = data.iter().map(|&value| i64::from(value)).sum();
    Measurement {
        elapsed: start.elapsed(),
        sum,
    }
}

/// Sums the sequence with the lock-free strategy: workers pull chunks from
/// an [`AtomicCursor`] and merge partial sums into an [`AtomicTotal`].
///
/// The cursor and total are created fresh for this invocation; timing starts
/// just before the workers launch and stops once the last one has joined, so
/// neither sequence generation nor allocator construction is counted.
pub fn atomic_chunked(
    data: &[i32],
    chunk_size: usize,
    pool: &WorkerPool,
) -> Result<Measurement, Error> {
    let cursor = AtomicCursor::new(data.len(), chunk_size)?;
    let total = AtomicTotal::new();

    let start = Instant::now();
    pool.reduce(data, &cursor, &total);
    Ok(Measurement {
        elapsed: start.elapsed(),
        sum: total.total(),
    })
}

/// Sums the sequence with the lock-based strategy: a [`MutexCursor`] hands
/// out chunks and a [`MutexTotal`] collects partial sums, each behind its
/// own lock. Same timing contract as [`atomic_chunked`].
pub fn mutex_chunked(
    data: &[i32],
    chunk_size: usize,
    pool: &WorkerPool,
) -> Result<Measurement, Error> {
    let cursor = MutexCursor::new(data.len(), chunk_size)?;
    let total = MutexTotal::new();

    let start = Instant::now();
    pool.reduce(data, &cursor, &total);
    Ok(Measurement {
        elapsed: start.elapsed(),
        sum: total.total(),
    })
}
