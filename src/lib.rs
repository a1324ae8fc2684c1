// SPDX-License-Identifier: MIT

//! Chunked parallel-sum reduction strategies and a timing harness to compare
//! them.
//!
//! Three strategies compute the sum of the same shared sequence: a sequential
//! linear scan, a lock-free scheme where workers pull chunks from an atomic
//! cursor, and a lock-based scheme where the cursor and the running total are
//! each guarded by a mutex. All three report a `(elapsed, sum)` pair so their
//! throughput and results can be compared directly.

pub mod chunks;
pub mod error;
pub mod harness;
pub mod pool;
pub mod sequence;

pub use chunks::{AtomicCursor, Chunk, ChunkSource, MutexCursor};
pub use error::Error;
pub use harness::{atomic_chunked, mutex_chunked, sequential, Measurement};
pub use pool::{Accumulator, AtomicTotal, MutexTotal, WorkerPool};
