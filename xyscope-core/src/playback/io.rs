//! Capability traits the playback core drives.

use core::convert::Infallible;

use super::debounce::Level;
use super::INPUT_LINES;
use crate::patterns::Pattern;

/// One of the two analog-like output channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    /// Channel 1, wired to the oscilloscope X input.
    X,
    /// Channel 2, wired to the oscilloscope Y input.
    Y,
}

/// Two output channels accepting 8-bit magnitudes.
///
/// Implementations on real hardware are usually infallible
/// (`Error = Infallible`). If a write can fail, the failure is fatal to
/// playback.
pub trait OutputSink {
    type Error;

    fn write(&mut self, channel: Channel, value: u8) -> Result<(), Self::Error>;
}

impl<T: OutputSink + ?Sized> OutputSink for &mut T {
    type Error = T::Error;

    fn write(&mut self, channel: Channel, value: u8) -> Result<(), Self::Error> {
        T::write(self, channel, value)
    }
}

/// Raw levels of the input lines, polled once per loop iteration.
///
/// Line 0 is the NEXT button, line 1 the PREVIOUS button. Implementations
/// translate electrical state (e.g. active-low with pull-up) into
/// [`Level`].
pub trait InputSource {
    fn read_levels(&mut self) -> [Level; INPUT_LINES];
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn read_levels(&mut self) -> [Level; INPUT_LINES] {
        T::read_levels(self)
    }
}

/// Mirrors the selected pattern somewhere visible.
///
/// Called at most once per selection change and never re-entered. Errors
/// are reported back to the scope loop, which logs them and carries on:
/// the oscilloscope trace does not depend on the display.
pub trait RenderAdapter {
    type Error;

    /// Draw `pattern`, which sits at `index` of `count` in the table.
    fn redraw(
        &mut self,
        pattern: &Pattern<'_>,
        index: usize,
        count: usize,
    ) -> Result<(), Self::Error>;
}

/// Render adapter for builds without a display.
#[derive(Debug, Clone, Copy, Default)]
pub struct Headless;

impl RenderAdapter for Headless {
    type Error = Infallible;

    fn redraw(
        &mut self,
        _pattern: &Pattern<'_>,
        _index: usize,
        _count: usize,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
}
