// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors surfaced before any reduction runs. Every strategy either
/// completes deterministically or the whole run aborts with one of these.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A chunk size of zero would make the cursor never advance, so it is
    /// rejected at allocator construction instead of looping forever.
    #[error("chunk size must be a positive integer")]
    ZeroChunkSize,

    /// A command-line positional that did not parse as a non-negative
    /// integer.
    #[error("invalid {name} {value:?}: expected a non-negative integer")]
    InvalidArgument {
        name: &'static str,
        value: String,
    },
}
