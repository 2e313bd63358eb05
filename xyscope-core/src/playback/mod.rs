//! Button-driven pattern selection and paced waveform playback.
//!
//! This module turns a [`PatternTable`](crate::patterns::PatternTable) into
//! a live XY trace. It owns no hardware: everything physical is reached
//! through the capability traits in this module.
//!
//! # Architecture
//!
//! ```text
//! InputSource ──levels──▶ ButtonPanel ──edges──▶ Selector ──dirty──▶ RenderAdapter
//!                                                    │
//!                                                 current()
//!                                                    ▼
//!                              DelayNs ◀──pace── PlaybackEngine ──write──▶ OutputSink
//! ```
//!
//! [`XyScope`] runs one cooperative loop over these parts. Each
//! [`tick()`](XyScope::tick):
//!
//! 1. reads every input line and debounces it,
//! 2. applies the resulting edges to the selector in line order,
//! 3. redraws once if the selection changed,
//! 4. streams one complete pass of the current pattern.
//!
//! A pass is never interrupted. A button press is only acted on at the next
//! pass boundary, so the trace never shows a half-drawn pattern.
//!
//! # Change Tracking
//!
//! The selector carries a single **dirty** flag. It is set by every
//! [`advance()`](Selector::advance) / [`retreat()`](Selector::retreat) and
//! by construction, and cleared by
//! [`consume_dirty()`](Selector::consume_dirty). The render path is its only
//! reader.

mod debounce;
mod engine;
mod error;
mod io;
mod scope;
mod selector;

pub use debounce::{ButtonPanel, Debouncer, InputEdge, Level};
pub use engine::PlaybackEngine;
pub use error::PlaybackError;
pub use io::{Channel, Headless, InputSource, OutputSink, RenderAdapter};
pub use scope::{ScopeConfig, TickReport, XyScope};
pub use selector::Selector;

/// Number of physical input lines (NEXT and PREVIOUS buttons).
pub const INPUT_LINES: usize = 2;

/// Default pause after each sample, in microseconds.
pub const DEFAULT_PACE_US: u32 = 10;
