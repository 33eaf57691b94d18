use std::ops::Range;

use thiserror::Error;

/// Errors surfaced by the range entry points and the benchmark driver.
///
/// Sorting is deterministic and pure, so none of these are worth retrying;
/// a failed call fails identically the second time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Requested algorithm name is not in the supported set.
    #[error(
        "unknown algorithm {0:?}, expected one of bubblesort, transpositionsort, \
         mergesort, quicksort or heapsort"
    )]
    UnknownAlgorithm(String),

    /// Range entry point called with bounds that do not fit the slice.
    #[error("invalid range {start}..{end} for slice of length {len}")]
    InvalidRange {
        start: usize,
        end: usize,
        len: usize,
    },

    /// A sort left adjacent elements out of order. Only reachable with a
    /// comparator that is not a total order; the shipped record ordering
    /// cannot trigger it.
    #[error("{algorithm} left adjacent elements out of order at index {index}")]
    OrderingViolation {
        algorithm: &'static str,
        index: usize,
    },
}

pub(crate) fn check_range(range: &Range<usize>, len: usize) -> Result<(), Error> {
    if range.start > range.end || range.end > len {
        return Err(Error::InvalidRange {
            start: range.start,
            end: range.end,
            len,
        });
    }
    Ok(())
}
