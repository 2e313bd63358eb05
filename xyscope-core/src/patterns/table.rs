use super::error::PatternError;
use super::pattern::Pattern;

/// Ordered, read-only registry of patterns.
///
/// Construction is the only place the table is checked. Once built, the
/// table guarantees `count() >= 1` and that every pattern has exactly
/// `sample_len()` samples, which is what lets the
/// [`Selector`](crate::playback::Selector) index it without further checks.
///
/// # Examples
///
/// ```
/// use xyscope::patterns::{Pattern, PatternTable, Sample};
///
/// static DOT: [Sample; 2] = [Sample::CENTER, Sample::CENTER];
/// static BAR: [Sample; 2] = [Sample::new(0, 128), Sample::new(255, 128)];
/// let patterns = [Pattern::new("Dot", &DOT), Pattern::new("Bar", &BAR)];
///
/// let table = PatternTable::new(&patterns).unwrap();
/// assert_eq!(table.count(), 2);
/// assert_eq!(table.get(1).unwrap().name(), "Bar");
/// assert!(table.get(2).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PatternTable<'a> {
    patterns: &'a [Pattern<'a>],
    sample_len: usize,
}

impl<'a> PatternTable<'a> {
    /// Validate and wrap a slice of patterns.
    ///
    /// # Errors
    ///
    /// * [`PatternError::EmptyTable`] if `patterns` is empty.
    /// * [`PatternError::EmptyPattern`] if any pattern has no samples.
    /// * [`PatternError::LengthMismatch`] if any pattern's length differs
    ///   from the first one.
    pub fn new(patterns: &'a [Pattern<'a>]) -> Result<Self, PatternError> {
        let first = patterns.first().ok_or(PatternError::EmptyTable)?;
        let sample_len = first.len();

        for (index, pattern) in patterns.iter().enumerate() {
            if pattern.is_empty() {
                return Err(PatternError::EmptyPattern { index });
            }
            if pattern.len() != sample_len {
                return Err(PatternError::LengthMismatch {
                    index,
                    expected: sample_len,
                    found: pattern.len(),
                });
            }
        }

        Ok(Self {
            patterns,
            sample_len,
        })
    }

    /// Number of patterns, always at least 1.
    pub fn count(&self) -> usize {
        self.patterns.len()
    }

    /// Samples per pattern, shared by every entry.
    pub fn sample_len(&self) -> usize {
        self.sample_len
    }

    /// Returns [`PatternError::OutOfRange`] if `index >= count()`.
    pub fn get(&self, index: usize) -> Result<&'a Pattern<'a>, PatternError> {
        self.patterns.get(index).ok_or(PatternError::OutOfRange {
            index,
            count: self.count(),
        })
    }

    /// Index of the first pattern called `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.patterns.iter().position(|p| p.name() == name)
    }

    /// Every pattern, in index order.
    pub fn as_slice(&self) -> &'a [Pattern<'a>] {
        self.patterns
    }

    /// Patterns in index order. Equivalent to `as_slice().iter()`.
    pub fn iter(&self) -> core::slice::Iter<'a, Pattern<'a>> {
        self.patterns.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::Sample;

    static THREE_A: [Sample; 3] = [Sample::CENTER; 3];
    static THREE_B: [Sample; 3] = [Sample::new(0, 0), Sample::new(1, 1), Sample::new(2, 2)];
    static TWO: [Sample; 2] = [Sample::CENTER; 2];

    #[test]
    fn new_accepts_equal_lengths() {
        let patterns = [Pattern::new("A", &THREE_A), Pattern::new("B", &THREE_B)];
        let table = PatternTable::new(&patterns).unwrap();
        assert_eq!(table.count(), 2);
        assert_eq!(table.sample_len(), 3);
    }

    #[test]
    fn new_accepts_single_pattern() {
        let patterns = [Pattern::new("Only", &TWO)];
        let table = PatternTable::new(&patterns).unwrap();
        assert_eq!(table.count(), 1);
    }

    #[test]
    fn new_rejects_empty_table() {
        let patterns: [Pattern; 0] = [];
        assert_eq!(
            PatternTable::new(&patterns).unwrap_err(),
            PatternError::EmptyTable
        );
    }

    #[test]
    fn new_rejects_empty_pattern() {
        let patterns = [Pattern::new("Empty", &[])];
        assert_eq!(
            PatternTable::new(&patterns).unwrap_err(),
            PatternError::EmptyPattern { index: 0 }
        );
    }

    #[test]
    fn new_rejects_mismatched_lengths() {
        let patterns = [
            Pattern::new("A", &THREE_A),
            Pattern::new("B", &THREE_B),
            Pattern::new("Short", &TWO),
        ];
        assert_eq!(
            PatternTable::new(&patterns).unwrap_err(),
            PatternError::LengthMismatch {
                index: 2,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn get_out_of_range() {
        let patterns = [Pattern::new("A", &THREE_A)];
        let table = PatternTable::new(&patterns).unwrap();
        assert_eq!(
            table.get(1).unwrap_err(),
            PatternError::OutOfRange { index: 1, count: 1 }
        );
        assert!(table.get(usize::MAX).is_err());
    }

    #[test]
    fn get_returns_pattern_in_order() {
        let patterns = [Pattern::new("A", &THREE_A), Pattern::new("B", &THREE_B)];
        let table = PatternTable::new(&patterns).unwrap();
        let b = table.get(1).unwrap();
        assert_eq!(b.name(), "B");
        assert_eq!(b.samples()[2], Sample::new(2, 2));
    }

    #[test]
    fn position_finds_by_name() {
        let patterns = [Pattern::new("A", &THREE_A), Pattern::new("B", &THREE_B)];
        let table = PatternTable::new(&patterns).unwrap();
        assert_eq!(table.position("B"), Some(1));
        assert_eq!(table.position("C"), None);
    }

    #[test]
    fn iter_visits_patterns_in_index_order() {
        let patterns = [Pattern::new("A", &THREE_A), Pattern::new("B", &THREE_B)];
        let table = PatternTable::new(&patterns).unwrap();
        let mut names = table.iter().map(|p| p.name());
        assert_eq!(names.next(), Some("A"));
        assert_eq!(names.next(), Some("B"));
        assert_eq!(names.next(), None);
        assert_eq!(table.iter().count(), table.count());
    }
}
