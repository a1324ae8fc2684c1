// SPDX-License-Identifier: MIT

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::error::Error;

/// A half-open index range `[start, end)` into the shared sequence, assigned
/// to one worker for local reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    /// First index covered by this chunk.
    pub start: usize,
    /// One past the last index covered by this chunk.
    pub end: usize,
}

/// Hands out disjoint, contiguous chunks of a sequence to any number of
/// concurrent callers.
///
/// Implementations guarantee that no two callers ever receive overlapping
/// ranges and that, once `issue` starts returning `None`, the union of all
/// issued chunks is exactly `[0, len)`. `None` is the terminal signal on
/// which a worker exits its request loop.
pub trait ChunkSource {
    fn issue(&self) -> Option<Chunk>;
}

/// Lock-free chunk allocator backed by an atomic cursor.
///
/// Each `issue` call performs a single fetch-and-add on the cursor and uses
/// the pre-increment value as the chunk's start index. Atomicity of the
/// read-modify-write is what makes issued ranges disjoint regardless of the
/// number of callers or how they are scheduled.
#[derive(Debug)]
pub struct AtomicCursor {
    /// Next unissued start index. Monotonically non-decreasing.
    next: AtomicUsize,
    /// Total sequence length; indices at or past this are never issued.
    len: usize,
    /// Stride added to the cursor per issuance.
    chunk_size: usize,
}

impl AtomicCursor {
    /// Creates an allocator over a sequence of `len` elements, issuing
    /// chunks of `chunk_size` indices. A zero chunk size is rejected: the
    /// cursor would never advance.
    pub fn new(len: usize, chunk_size: usize) -> Result<Self, Error> {
        if chunk_size == 0 {
            return Err(Error::ZeroChunkSize);
        }
        Ok(AtomicCursor {
            next: AtomicUsize::new(0),
            len,
            chunk_size,
        })
    }
}

impl ChunkSource for AtomicCursor {
    fn issue(&self) -> Option<Chunk> {
        // AcqRel is stronger than the sum strictly needs (the sequence is
        // immutable while workers run), but it keeps issuance independent of
        // publication guarantees elsewhere.
        let start = self.next.fetch_add(self.chunk_size, Ordering::AcqRel);
        if start >= self.len {
            return None;
        }
        Some(Chunk {
            start,
            end: (start + self.chunk_size).min(self.len),
        })
    }
}

/// Lock-based chunk allocator, functionally identical to [`AtomicCursor`]
/// but with the cursor guarded by a mutex instead of an atomic instruction.
///
/// The lock is held only across the check-and-advance, never across the
/// caller's per-chunk work, so distributing work does not serialize doing it.
#[derive(Debug)]
pub struct MutexCursor {
    /// Next unissued start index, guarded by the lock.
    next: Mutex<usize>,
    len: usize,
    chunk_size: usize,
}

impl MutexCursor {
    /// Creates an allocator with the same contract as [`AtomicCursor::new`].
    pub fn new(len: usize, chunk_size: usize) -> Result<Self, Error> {
        if chunk_size == 0 {
            return Err(Error::ZeroChunkSize);
        }
        Ok(MutexCursor {
            next: Mutex::new(0),
            len,
            chunk_size,
        })
    }
}

impl ChunkSource for MutexCursor {
    fn issue(&self) -> Option<Chunk> {
        let start = {
            // Recover from a poisoned lock; a cursor integer is valid under
            // any interleaving of the updates below.
            let mut next = match self.next.lock() {
                Ok(guard) => guard,
                Err(poisoned) => {
                    self.next.clear_poison();
                    poisoned.into_inner()
                }
            };
            let start = *next;
            if start >= self.len {
                return None;
            }
            *next = start + self.chunk_size;
            start
        };
        Some(Chunk {
            start,
            end: (start + self.chunk_size).min(self.len),
        })
    }
}
