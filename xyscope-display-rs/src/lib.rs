//! SSD1306 (128×64) preview of the selected XY scope pattern.
//!
//! This crate provides [`OledDriver`], a wrapper around the [`ssd1306`]
//! crate in blocking buffered-graphics mode, and [`OledRenderer`], a
//! [`RenderAdapter`] that draws the pattern name, its position in the
//! table and a scaled copy of the trace.
//!
//! # Quick Start
//!
//! ```ignore
//! use xyscope_display::{DisplayConfig, OledDriver, OledRenderer};
//!
//! let mut renderer = OledRenderer::new(OledDriver::new(i2c, 0x3C), DisplayConfig::default());
//! if let Err(e) = renderer.init() {
//!     defmt::warn!("OLED unavailable: {}", e);
//! }
//! let mut scope = XyScope::new(&table, dac, Delay, renderer, ScopeConfig::default())?;
//! ```
//!
//! # Crate Features
//!
//! - **`defmt`**: structured logging via [`defmt`].
//!
//! [`RenderAdapter`]: xyscope::playback::RenderAdapter

#![no_std]

pub mod driver;
pub mod error;
pub mod layout;
pub mod renderer;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use driver::OledDriver;
pub use error::OledError;
pub use layout::{map_sample, render_pattern, DisplayConfig, DisplayState, NAME_CAPACITY};
pub use renderer::OledRenderer;
