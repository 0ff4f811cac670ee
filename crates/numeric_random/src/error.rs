//! Error types for random generation.

use thiserror::Error;

/// Invalid-argument conditions raised by blacklist-excluding sampling.
///
/// Every variant means the requested draw has no valid outcome, so retrying
/// with the same arguments can never succeed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RandomError {
    /// Lower bound is above the upper bound.
    #[error("Invalid range: low ({low}) is greater than high ({high})")]
    InvertedRange {
        /// Requested lower bound
        low: i32,
        /// Requested upper bound
        high: i32,
    },

    /// Blacklist has at least as many entries as the range has values.
    #[error("Blacklist too large: {blacklist_len} entries for a range of {range_size} values")]
    BlacklistTooLarge {
        /// Number of blacklist entries, duplicates included
        blacklist_len: usize,
        /// Number of values in `[low, high)`
        range_size: i64,
    },

    /// Every value in `[low, high)` is blacklisted.
    ///
    /// Backstop only: the `BlacklistTooLarge` size check rejects every such input first.
    #[error("Every value in [{low}, {high}) is blacklisted")]
    RangeExhausted {
        /// Requested lower bound
        low: i32,
        /// Requested upper bound
        high: i32,
    },
}

impl RandomError {
    /// All variants describe an invalid argument; kept for callers that
    /// match on the error category rather than the variant.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            RandomError::InvertedRange { .. }
                | RandomError::BlacklistTooLarge { .. }
                | RandomError::RangeExhausted { .. }
        )
    }
}

/// Result alias for fallible random generation.
pub type Result<T> = std::result::Result<T, RandomError>;
