use embedded_hal::delay::DelayNs;

use super::error::PlaybackError;
use super::io::{Channel, OutputSink};
use crate::patterns::{Pattern, Sample};

/// Streams patterns to an [`OutputSink`] at a fixed cadence.
///
/// Each sample is written as X (channel 1) then Y (channel 2), followed by
/// a `pace_us` pause on the injected delay. The pause is the only thing
/// setting the refresh rate of the trace: one pass takes roughly
/// `len × (pace_us + write time)`.
///
/// The engine never stops mid-pass. The first failed write aborts the pass
/// and is returned to the caller as fatal.
pub struct PlaybackEngine<S, D> {
    sink: S,
    delay: D,
    pace_us: u32,
}

impl<S, D> PlaybackEngine<S, D>
where
    S: OutputSink,
    D: DelayNs,
{
    /// # Arguments
    /// * `sink`: two-channel output (takes ownership for exclusive access).
    /// * `delay`: blocking delay used for pacing.
    /// * `pace_us`: pause after every sample, in microseconds.
    pub fn new(sink: S, delay: D, pace_us: u32) -> Self {
        Self {
            sink,
            delay,
            pace_us,
        }
    }

    /// Put the beam at the centre of the screen.
    pub fn park(&mut self) -> Result<(), PlaybackError<S::Error>> {
        self.write_sample(Sample::CENTER)
    }

    /// Stream every sample of `pattern` once, in order.
    ///
    /// Issues exactly `2 × pattern.len()` writes and `pattern.len()`
    /// pauses. Returns the number of samples written.
    pub fn play_pass(&mut self, pattern: &Pattern<'_>) -> Result<usize, PlaybackError<S::Error>> {
        for &sample in pattern.samples() {
            self.write_sample(sample)?;
            self.delay.delay_us(self.pace_us);
        }
        Ok(pattern.len())
    }

    pub fn pace_us(&self) -> u32 {
        self.pace_us
    }

    pub fn set_pace_us(&mut self, pace_us: u32) {
        self.pace_us = pace_us;
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }

    /// Give back the sink and the delay.
    pub fn into_parts(self) -> (S, D) {
        (self.sink, self.delay)
    }

    fn write_sample(&mut self, sample: Sample) -> Result<(), PlaybackError<S::Error>> {
        self.sink.write(Channel::X, sample.x)?;
        self.sink.write(Channel::Y, sample.y)?;
        Ok(())
    }
}
