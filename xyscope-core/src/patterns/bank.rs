use super::pattern::Pattern;
use super::sample::Sample;
use super::shapes::ShapeEntry;

/// Fixed-size storage for `N` patterns of `LEN` samples each.
///
/// [`PatternBank::new()`] is a `const fn`, so the bank can sit in a
/// `static` (or a `static_cell::ConstStaticCell`) instead of on the stack;
/// the built-in bank is roughly 13 KiB. Fill it once with
/// [`fill()`](Self::fill), then borrow it as patterns with
/// [`patterns()`](Self::patterns).
///
/// # Examples
///
/// ```
/// use xyscope::patterns::{PatternBank, PatternTable, BUILTIN_SHAPES, BUILTIN_COUNT};
///
/// let mut bank = PatternBank::<BUILTIN_COUNT, 64>::new();
/// bank.fill(&BUILTIN_SHAPES);
///
/// let patterns = bank.patterns();
/// let table = PatternTable::new(&patterns).unwrap();
/// assert_eq!(table.sample_len(), 64);
/// assert_eq!(table.position("Rose 5"), Some(8));
/// ```
pub struct PatternBank<const N: usize, const LEN: usize> {
    names: [&'static str; N],
    samples: [[Sample; LEN]; N],
}

impl<const N: usize, const LEN: usize> Default for PatternBank<N, LEN> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize, const LEN: usize> PatternBank<N, LEN> {
    /// An unnamed bank with every sample at centre.
    pub const fn new() -> Self {
        Self {
            names: [""; N],
            samples: [[Sample::CENTER; LEN]; N],
        }
    }

    /// Render every shape into its slot, in catalogue order.
    pub fn fill(&mut self, shapes: &[ShapeEntry; N]) {
        for ((name, slot), entry) in self
            .names
            .iter_mut()
            .zip(self.samples.iter_mut())
            .zip(shapes.iter())
        {
            *name = entry.name;
            entry.shape.render(slot);
        }
    }

    /// Borrow every slot as a [`Pattern`].
    pub fn patterns(&self) -> [Pattern<'_>; N] {
        core::array::from_fn(|i| Pattern::new(self.names[i], &self.samples[i]))
    }
}
