// SPDX-License-Identifier: MIT

use std::ops::RangeInclusive;

use rand::Rng;

/// Bounds of the generated elements. Matches the benchmark's historical
/// generator defaults.
pub const DEFAULT_VALUE_RANGE: RangeInclusive<i32> = 1..=100;

/// Generates a sequence of `len` signed integers drawn uniformly from
/// `range`. The reduction strategies depend only on the length being exact
/// and the elements being summable; the distribution itself is irrelevant to
/// correctness.
pub fn generate(len: usize, range: RangeInclusive<i32>) -> Vec<i32> {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen_range(range.clone())).collect()
}
