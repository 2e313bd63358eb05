use super::sample::Sample;

/// A named, fixed-length closed waveform.
///
/// Patterns borrow their samples; the storage is owned by a
/// [`PatternBank`](super::PatternBank) or by a `static` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern<'a> {
    name: &'a str,
    samples: &'a [Sample],
}

impl<'a> Pattern<'a> {
    pub const fn new(name: &'a str, samples: &'a [Sample]) -> Self {
        Self { name, samples }
    }

    /// Display name, e.g. `"Rose 5"`.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Samples in playback order.
    pub fn samples(&self) -> &'a [Sample] {
        self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

// Samples are left out: a 360-point dump is useless in an RTT log.
#[cfg(feature = "defmt")]
impl defmt::Format for Pattern<'_> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Pattern {{ name: {}, len: {} }}", self.name, self.samples.len())
    }
}
