// SPDX-License-Identifier: MIT

/// Builds a sequence of `len` copies of `value`. A constant sequence makes
/// dropped or double-counted chunks visible as an exact sum mismatch.
pub fn constant_sequence(len: usize, value: i32) -> Vec<i32> {
    vec![value; len]
}

/// Builds the sequence `1, 2, ..., n`, whose sum `n * (n + 1) / 2` is known
/// in closed form.
pub fn ascending_sequence(n: usize) -> Vec<i32> {
    (1..=n as i32).collect()
}

/// Reference sum computed independently of any strategy under test.
pub fn expected_sum(data: &[i32]) -> i64 {
    data.iter().map(|&value| i64::from(value)).sum()
}
