use core::fmt;

/// Errors that stop playback.
///
/// There is no retryable class: a sample that failed to reach the output
/// leaves the trace broken, so the caller is expected to halt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackError<E> {
    /// The output sink rejected a write.
    Sink(E),
}

// Allow `?` directly on sink writes.
impl<E> From<E> for PlaybackError<E> {
    fn from(error: E) -> Self {
        PlaybackError::Sink(error)
    }
}

impl<E: fmt::Debug> fmt::Display for PlaybackError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PlaybackError::Sink(e) => write!(f, "output sink error: {:?}", e),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for PlaybackError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            PlaybackError::Sink(e) => defmt::write!(f, "Output sink error: {}", e),
        }
    }
}
