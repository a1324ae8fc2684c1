// SPDX-License-Identifier: MIT

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;
use std::thread;

use crate::chunks::ChunkSource;

/// Shared running total that workers merge their partial sums into.
///
/// The final value is read exactly once, after every worker has joined, and
/// equals the sum of all sequence elements regardless of thread count, chunk
/// size, or scheduling order.
pub trait Accumulator {
    fn merge(&self, partial: i64);
    fn total(&self) -> i64;
}

/// Accumulator backed by an atomic integer; the companion of
/// [`crate::chunks::AtomicCursor`].
#[derive(Default)]
pub struct AtomicTotal {
    sum: AtomicI64,
}

impl AtomicTotal {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Accumulator for AtomicTotal {
    fn merge(&self, partial: i64) {
        // Relaxed is enough: the only requirement is that every addition
        // commits before the single read that follows the joins, and joining
        // a thread synchronizes with everything it did.
        self.sum.fetch_add(partial, Ordering::Relaxed);
    }

    fn total(&self) -> i64 {
        self.sum.load(Ordering::Relaxed)
    }
}

/// Accumulator guarded by its own mutex; the companion of
/// [`crate::chunks::MutexCursor`].
///
/// The lock is distinct from the cursor lock so that a worker merging a
/// partial sum never blocks another worker from acquiring new work.
#[derive(Default)]
pub struct MutexTotal {
    sum: Mutex<i64>,
}

impl MutexTotal {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, i64> {
        match self.sum.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                self.sum.clear_poison();
                poisoned.into_inner()
            }
        }
    }
}

impl Accumulator for MutexTotal {
    fn merge(&self, partial: i64) {
        *self.lock() += partial;
    }

    fn total(&self) -> i64 {
        *self.lock()
    }
}

/// Fixed-size pool of worker threads that drain a [`ChunkSource`] and merge
/// per-chunk partial sums into an [`Accumulator`].
///
/// The pool owns no threads between runs; each [`WorkerPool::reduce`] call
/// launches `thread_count` scoped workers and returns only after all of them
/// have joined, so a caller can never observe a reduction in flight.
pub struct WorkerPool {
    thread_count: usize,
}

impl WorkerPool {
    /// Thread count used when hardware parallelism cannot be detected.
    pub const FALLBACK_THREAD_COUNT: usize = 4;

    /// Creates a pool of `thread_count` workers. A zero count is clamped to
    /// one so a reduction always makes progress.
    pub fn new(thread_count: usize) -> Self {
        WorkerPool {
            thread_count: thread_count.max(1),
        }
    }

    /// Creates a pool sized to the hardware-reported parallelism, falling
    /// back to [`Self::FALLBACK_THREAD_COUNT`] if that report is zero.
    pub fn with_available_parallelism() -> Self {
        let detected = num_cpus::get();
        WorkerPool::new(if detected == 0 {
            Self::FALLBACK_THREAD_COUNT
        } else {
            detected
        })
    }

    pub fn thread_count(&self) -> usize {
        self.thread_count
    }

    /// Runs one reduction: every worker loops requesting a chunk, summing
    /// the covered elements locally, and merging the local result into
    /// `total`, until the source signals that no chunks remain.
    ///
    /// Blocks until every worker has terminated. `total` holds the full sum
    /// of `data` once this returns, provided `source` covers `[0, data.len())`.
    pub fn reduce<S, A>(&self, data: &[i32], source: &S, total: &A)
    where
        S: ChunkSource + Sync,
        A: Accumulator + Sync,
    {
        thread::scope(|scope| {
            for _ in 0..self.thread_count {
                scope.spawn(|| {
                    while let Some(chunk) = source.issue() {
                        let partial: i64 = data[chunk.start..chunk.end]
                            .iter()
                            .map(|&value| i64::from(value))
                            .sum();
                        total.merge(partial);
                    }
                });
            }
        });
    }
}
