// SPDX-License-Identifier: MIT

use chunksum::harness::{atomic_chunked, mutex_chunked, sequential};
use chunksum::pool::WorkerPool;
use chunksum::sequence;
use test_utils::sequences::{ascending_sequence, constant_sequence, expected_sum};

/// All three strategies must agree on random input, whatever the chunk size.
#[test]
fn test_sum_equivalence_on_random_input() {
    let data = sequence::generate(50_000, sequence::DEFAULT_VALUE_RANGE);
    let pool = WorkerPool::new(8);
    let oracle = sequential(&data).sum;

    assert_eq!(oracle, expected_sum(&data));
    for chunk_size in [1, 7, 100, 10_000, 50_000, 1_000_000] {
        let atomic = atomic_chunked(&data, chunk_size, &pool).unwrap();
        let mutexed = mutex_chunked(&data, chunk_size, &pool).unwrap();
        assert_eq!(atomic.sum, oracle, "atomic, chunk size {}", chunk_size);
        assert_eq!(mutexed.sum, oracle, "mutex, chunk size {}", chunk_size);
    }
}

/// Re-running every strategy against the identical in-memory sequence must
/// yield the same sum each time, independent of scheduling nondeterminism.
#[test]
fn test_repeated_runs_are_deterministic() {
    let data = sequence::generate(20_000, sequence::DEFAULT_VALUE_RANGE);
    let pool = WorkerPool::new(4);
    let oracle = sequential(&data).sum;

    for _ in 0..5 {
        assert_eq!(sequential(&data).sum, oracle);
        assert_eq!(atomic_chunked(&data, 123, &pool).unwrap().sum, oracle);
        assert_eq!(mutex_chunked(&data, 123, &pool).unwrap().sum, oracle);
    }
}

/// [1, 2, 3, 4, 5] split into chunks of 2 covers indices 0-4 exactly once
/// and sums to 15 for every strategy.
#[test]
fn test_five_element_scenario() {
    let data = vec![1, 2, 3, 4, 5];
    let pool = WorkerPool::new(4);

    assert_eq!(sequential(&data).sum, 15);
    assert_eq!(atomic_chunked(&data, 2, &pool).unwrap().sum, 15);
    assert_eq!(mutex_chunked(&data, 2, &pool).unwrap().sum, 15);
}

/// A million ones in thousand-element chunks: any dropped or double-counted
/// chunk shifts the total by a multiple of 1,000.
#[test]
fn test_million_ones_at_scale() {
    let data = constant_sequence(1_000_000, 1);
    let pool = WorkerPool::with_available_parallelism();

    assert_eq!(sequential(&data).sum, 1_000_000);
    assert_eq!(atomic_chunked(&data, 1_000, &pool).unwrap().sum, 1_000_000);
    assert_eq!(mutex_chunked(&data, 1_000, &pool).unwrap().sum, 1_000_000);
}

/// An empty sequence is valid: sum zero everywhere, no worker gets a chunk.
#[test]
fn test_empty_sequence() {
    let data: Vec<i32> = Vec::new();
    let pool = WorkerPool::new(4);

    assert_eq!(sequential(&data).sum, 0);
    assert_eq!(atomic_chunked(&data, 10, &pool).unwrap().sum, 0);
    assert_eq!(mutex_chunked(&data, 10, &pool).unwrap().sum, 0);
}

/// A sequence shorter than the chunk size produces exactly one chunk and
/// still sums correctly.
#[test]
fn test_sequence_shorter_than_chunk_size() {
    let data = ascending_sequence(10);
    let pool = WorkerPool::new(8);

    assert_eq!(atomic_chunked(&data, 1_000, &pool).unwrap().sum, 55);
    assert_eq!(mutex_chunked(&data, 1_000, &pool).unwrap().sum, 55);
}

/// More threads than chunks must not deadlock or miscount; the surplus
/// workers just receive the terminal signal immediately.
#[test]
fn test_more_threads_than_chunks() {
    let data = ascending_sequence(100);
    let pool = WorkerPool::new(32);

    assert_eq!(atomic_chunked(&data, 64, &pool).unwrap().sum, 5_050);
    assert_eq!(mutex_chunked(&data, 64, &pool).unwrap().sum, 5_050);
}
