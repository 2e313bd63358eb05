//! Pattern playback core for XY oscilloscope art.
//!
//! Two pieces live here:
//!
//! - [`patterns`]: the immutable pattern table, the parametric shape
//!   catalogue it is computed from, and the statically allocatable
//!   [`PatternBank`](patterns::PatternBank) that holds the samples.
//! - [`playback`]: the button debouncer, the cyclic pattern selector, the
//!   paced playback engine, and the [`XyScope`](playback::XyScope) loop that
//!   ties them to the hardware capabilities.
//!
//! The crate is `no_std` and never allocates. Hardware is reached only
//! through the [`OutputSink`](playback::OutputSink),
//! [`InputSource`](playback::InputSource) and
//! [`RenderAdapter`](playback::RenderAdapter) traits plus an
//! `embedded-hal` [`DelayNs`](embedded_hal::delay::DelayNs) for pacing.
//!
//! # Features
//!
//! - **`defmt`**: [`defmt::Format`] on public types and status logging
//!   from the scope loop.

#![no_std]

pub mod patterns;
pub mod playback;

#[cfg(test)]
mod fakes;
