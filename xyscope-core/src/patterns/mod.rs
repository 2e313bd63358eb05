//! Pattern storage: samples, patterns, the read-only pattern table, and the
//! built-in shape catalogue.
//!
//! # Layout
//!
//! A [`Pattern`] is a display name plus a borrowed slice of [`Sample`]s. The
//! samples themselves live in a [`PatternBank`], a fixed-size `N × LEN`
//! array that the firmware places in static memory and fills once at
//! startup from [`BUILTIN_SHAPES`]:
//!
//! ```text
//! PatternBank ──fill()──▶ [[Sample; LEN]; N]
//!      │
//!      └──patterns()──▶ [Pattern; N] ──PatternTable::new()──▶ PatternTable
//! ```
//!
//! [`PatternTable::new()`] is the single validation point: an empty table
//! or patterns of unequal length are rejected before playback starts.
//!
//! # `no_std` Compatibility
//!
//! Nothing here allocates. Curve evaluation uses [`libm`] so the catalogue
//! can be rendered on a bare-metal target.

mod bank;
mod error;
mod pattern;
mod sample;
mod shapes;
mod table;

pub use bank::PatternBank;
pub use error::PatternError;
pub use pattern::Pattern;
pub use sample::{Sample, CENTER};
pub use shapes::{normalize, Shape, ShapeEntry, BUILTIN_SHAPES};
pub use table::PatternTable;

/// Number of samples in every built-in pattern.
pub const SAMPLES_PER_PATTERN: usize = 360;

/// Number of entries in [`BUILTIN_SHAPES`].
pub const BUILTIN_COUNT: usize = 18;

/// Index of the pattern selected at power-on ("Rose 5").
pub const DEFAULT_PATTERN: usize = 8;

/// Bank sized for the built-in catalogue.
pub type BuiltinBank = PatternBank<BUILTIN_COUNT, SAMPLES_PER_PATTERN>;
