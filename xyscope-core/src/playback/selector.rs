use super::debounce::InputEdge;
use crate::patterns::{Pattern, PatternError, PatternTable};

/// Tracks which pattern is playing.
///
/// The index always stays inside `0..count()`: it is checked once at
/// construction and then only moves by modular steps. A new selector starts
/// dirty so the initial pattern gets drawn once.
///
/// # Examples
///
/// ```
/// use xyscope::patterns::{Pattern, PatternTable, Sample};
/// use xyscope::playback::Selector;
///
/// static S: [Sample; 1] = [Sample::CENTER];
/// let patterns = [Pattern::new("A", &S), Pattern::new("B", &S), Pattern::new("C", &S)];
/// let table = PatternTable::new(&patterns).unwrap();
///
/// let mut selector = Selector::new(&table, 0).unwrap();
/// selector.retreat();
/// assert_eq!(selector.current().name(), "C");
/// assert!(selector.consume_dirty());
/// assert!(!selector.consume_dirty());
/// ```
///
/// Not `Copy`: a copy would carry its own dirty flag and a redraw could be
/// consumed from the wrong one.
///
/// ```compile_fail
/// use xyscope::patterns::{Pattern, PatternTable, Sample};
/// use xyscope::playback::Selector;
///
/// static S: [Sample; 1] = [Sample::CENTER];
/// let patterns = [Pattern::new("A", &S)];
/// let table = PatternTable::new(&patterns).unwrap();
///
/// let selector = Selector::new(&table, 0).unwrap();
/// let moved = selector;
/// assert!(selector.is_dirty());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Selector<'a> {
    table: &'a PatternTable<'a>,
    index: usize,
    dirty: bool,
}

impl<'a> Selector<'a> {
    /// Returns [`PatternError::OutOfRange`] if `initial >= table.count()`.
    pub fn new(table: &'a PatternTable<'a>, initial: usize) -> Result<Self, PatternError> {
        table.get(initial)?;
        Ok(Self {
            table,
            index: initial,
            dirty: true,
        })
    }

    /// Step to the next pattern, wrapping to 0 after the last.
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.count();
        self.dirty = true;
    }

    /// Step to the previous pattern, wrapping to the last after 0.
    pub fn retreat(&mut self) {
        let count = self.count();
        self.index = (self.index + count - 1) % count;
        self.dirty = true;
    }

    /// Apply a debounced button edge.
    pub fn apply(&mut self, edge: InputEdge) {
        match edge {
            InputEdge::Next => self.advance(),
            InputEdge::Previous => self.retreat(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.table.count()
    }

    /// The selected pattern.
    pub fn current(&self) -> &'a Pattern<'a> {
        // In range by construction; indexing panics if that is ever broken.
        &self.table.as_slice()[self.index]
    }

    /// Return the dirty flag and clear it.
    pub fn consume_dirty(&mut self) -> bool {
        core::mem::take(&mut self.dirty)
    }

    /// Peek at the dirty flag without clearing it.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}
