use core::fmt;

/// Errors raised while building or indexing a pattern table.
///
/// All of these are configuration errors: they can only come from a bad
/// table or a bad initial index, and the firmware halts on them before the
/// playback loop starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PatternError {
    /// The table holds no patterns.
    EmptyTable,
    /// The pattern at `index` has no samples.
    EmptyPattern { index: usize },
    /// The pattern at `index` has `found` samples where the first pattern
    /// has `expected`.
    LengthMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },
    /// `index` is not in `0..count`.
    OutOfRange { index: usize, count: usize },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PatternError::EmptyTable => write!(f, "pattern table is empty"),
            PatternError::EmptyPattern { index } => {
                write!(f, "pattern {} has no samples", index)
            }
            PatternError::LengthMismatch {
                index,
                expected,
                found,
            } => write!(
                f,
                "pattern {} has {} samples, expected {}",
                index, found, expected
            ),
            PatternError::OutOfRange { index, count } => {
                write!(f, "pattern index {} out of range (count {})", index, count)
            }
        }
    }
}
