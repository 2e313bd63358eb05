//! Display layout types and rendering logic.
//!
//! This module defines the [`DisplayConfig`] geometry, the immutable
//! [`DisplayState`] snapshot and the [`render_pattern`] function that
//! draws a frame using `embedded-graphics`.

use core::fmt::Write;

use embedded_graphics::{
    mono_font::{ascii::FONT_6X10, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle},
    text::{Alignment, Text},
};
use heapless::String;

use xyscope::patterns::Sample;

// ── DisplayConfig ────────────────────────────────────────────────────────

/// Layout geometry for the pattern preview.
///
/// All layout geometry lives here. [`DisplayConfig::default()`] fits a
/// 128×64 panel: name header on top, navigation footer at the bottom and
/// a square trace area between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Total display width in pixels. Default: 128.
    pub display_width: u32,
    /// Total display height in pixels. Default: 64.
    pub display_height: u32,
    /// Height reserved for the pattern name at the top. Default: 12.
    pub header_height: u32,
    /// Height reserved for the navigation line at the bottom. Default: 10.
    pub footer_height: u32,
    /// Blank border kept around the trace. Default: 2.
    pub trace_margin: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            display_width: 128,
            display_height: 64,
            header_height: 12,
            footer_height: 10,
            trace_margin: 2,
        }
    }
}

impl DisplayConfig {
    /// The square the trace is scaled into, centred in the space between
    /// header and footer.
    ///
    /// Both axes share one scale, so a circle stays a circle.
    pub fn trace_area(&self) -> Rectangle {
        let top = self.header_height + self.trace_margin;
        let bottom = self
            .display_height
            .saturating_sub(self.footer_height + self.trace_margin);
        let left = self.trace_margin;
        let right = self.display_width.saturating_sub(self.trace_margin);

        let width = right.saturating_sub(left);
        let height = bottom.saturating_sub(top);
        let side = width.min(height);

        let x0 = left + (width - side) / 2;
        let y0 = top + (height - side) / 2;
        Rectangle::new(Point::new(x0 as i32, y0 as i32), Size::new(side, side))
    }
}

/// Map an output sample onto a pixel inside `area`.
///
/// X grows to the right. Y is inverted so that a high Y output appears
/// towards the top, matching the oscilloscope.
pub fn map_sample(sample: Sample, area: &Rectangle) -> Point {
    let side = area.size.width.min(area.size.height) as i32;
    let scale = |v: u8| i32::from(v) * side / 256;

    Point::new(
        area.top_left.x + scale(sample.x),
        area.top_left.y + (side - 1) - scale(sample.y),
    )
}

// ── DisplayState ─────────────────────────────────────────────────────────

/// Longest name, in bytes, that fits the header: 128 px of 6 px glyphs.
pub const NAME_CAPACITY: usize = 21;

/// Immutable snapshot of everything the display needs to render one frame.
///
/// The name is stored as a null-padded UTF-8 byte buffer with at most
/// [`NAME_CAPACITY`] usable bytes (the last byte is always `\0`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayState {
    /// Pattern name, null-padded UTF-8 (max [`NAME_CAPACITY`] bytes).
    pub name: [u8; NAME_CAPACITY + 1],
    /// Zero-based position of the pattern in its table.
    pub index: usize,
    /// Number of patterns in the table.
    pub count: usize,
}

impl DisplayState {
    /// Construct from the selected pattern.
    ///
    /// The name is copied and silently truncated to [`NAME_CAPACITY`] bytes, backing off
    /// to the nearest character boundary.
    pub fn from_pattern(name: &str, index: usize, count: usize) -> Self {
        let mut state = Self {
            index,
            count,
            ..Self::default()
        };

        let mut len = name.len().min(NAME_CAPACITY);
        while !name.is_char_boundary(len) {
            len -= 1;
        }
        state.name[..len].copy_from_slice(&name.as_bytes()[..len]);
        state
    }

    /// The stored name as a `&str`.
    pub fn name(&self) -> &str {
        Self::bytes_to_str(&self.name)
    }

    /// Navigation line: `"{index + 1}/{count} A:Next B:Prev"`.
    pub fn footer(&self) -> String<32> {
        let mut buf = String::new();
        // core::fmt::Write, no alloc needed.
        let _ = write!(buf, "{}/{} A:Next B:Prev", self.index + 1, self.count);
        buf
    }

    /// Convert a fixed-size null-padded byte array back to a `&str`.
    ///
    /// Stops at the first null byte. Returns `""` if the first byte is
    /// null or the slice is not valid UTF-8.
    pub fn bytes_to_str(bytes: &[u8]) -> &str {
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        core::str::from_utf8(&bytes[..end]).unwrap_or("")
    }
}

// ── Rendering ────────────────────────────────────────────────────────────

/// Render a pattern preview using `embedded-graphics`.
///
/// Draws on top of whatever is in the buffer; clear it first.
///
/// # Layout
///
/// ```text
/// ┌──────────────────────────────────────────────────┐
/// │                 Rose 5 (centred)                  │  ← header_height
/// │                    ┌────────┐                     │
/// │                    │ trace  │                     │  ← trace_area()
/// │                    └────────┘                     │
/// │             9/18 A:Next B:Prev                    │  ← footer_height
/// └──────────────────────────────────────────────────┘
/// ```
///
/// Consecutive samples are joined with 1 px lines. The last sample is not
/// joined back to the first.
///
/// # Example
///
/// ```no_run
/// # use xyscope::patterns::Sample;
/// # use xyscope_display::layout::{render_pattern, DisplayState};
/// # use xyscope_display::DisplayConfig;
/// # fn example(display: &mut impl embedded_graphics::draw_target::DrawTarget<Color = embedded_graphics::pixelcolor::BinaryColor>) {
/// let samples = [Sample::new(0, 0), Sample::new(255, 255)];
/// let state = DisplayState::from_pattern("Diagonal", 0, 1);
/// render_pattern(display, &state, &samples, &DisplayConfig::default()).ok();
/// # }
/// ```
pub fn render_pattern<D>(
    display: &mut D,
    state: &DisplayState,
    samples: &[Sample],
    config: &DisplayConfig,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let text_style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
    let centre_x = config.display_width as i32 / 2;

    // ── Name (centred at top) ────────────────────────────────────────
    let name = state.name();
    if !name.is_empty() {
        let y = config.header_height as i32 - 1;
        Text::with_alignment(name, Point::new(centre_x, y), text_style, Alignment::Center)
            .draw(display)?;
    }

    // ── Footer ───────────────────────────────────────────────────────
    if state.count > 0 {
        let y = config.display_height as i32 - 2;
        Text::with_alignment(
            state.footer().as_str(),
            Point::new(centre_x, y),
            text_style,
            Alignment::Center,
        )
        .draw(display)?;
    }

    // ── Trace ────────────────────────────────────────────────────────
    let area = config.trace_area();
    let stroke = PrimitiveStyle::with_stroke(BinaryColor::On, 1);

    match samples {
        [] => {}
        [only] => Pixel(map_sample(*only, &area), BinaryColor::On).draw(display)?,
        _ => {
            for pair in samples.windows(2) {
                Line::new(map_sample(pair[0], &area), map_sample(pair[1], &area))
                    .into_styled(stroke)
                    .draw(display)?;
            }
        }
    }

    Ok(())
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_graphics::primitives::ContainsPoint;

    /// 128×64 monochrome frame buffer that records lit pixels.
    struct Canvas {
        pixels: [[bool; 128]; 64],
    }

    impl Canvas {
        fn new() -> Self {
            Self {
                pixels: [[false; 128]; 64],
            }
        }

        fn is_on(&self, p: Point) -> bool {
            self.pixels[p.y as usize][p.x as usize]
        }

        fn lit(&self) -> impl Iterator<Item = Point> + '_ {
            self.pixels.iter().enumerate().flat_map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .filter(|&(_, &on)| on)
                    .map(move |(x, _)| Point::new(x as i32, y as i32))
            })
        }
    }

    impl OriginDimensions for Canvas {
        fn size(&self) -> Size {
            Size::new(128, 64)
        }
    }

    impl DrawTarget for Canvas {
        type Color = BinaryColor;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(p, color) in pixels {
                if (0..128).contains(&p.x) && (0..64).contains(&p.y) {
                    self.pixels[p.y as usize][p.x as usize] = color.is_on();
                }
            }
            Ok(())
        }
    }

    // ── DisplayConfig ────────────────────────────────────────────────

    #[test]
    fn default_config_values() {
        let c = DisplayConfig::default();
        assert_eq!(c.display_width, 128);
        assert_eq!(c.display_height, 64);
        assert_eq!(c.header_height, 12);
        assert_eq!(c.footer_height, 10);
        assert_eq!(c.trace_margin, 2);
    }

    #[test]
    fn default_trace_area_is_centred_square() {
        let area = DisplayConfig::default().trace_area();
        assert_eq!(area, Rectangle::new(Point::new(45, 14), Size::new(38, 38)));
    }

    #[test]
    fn trace_area_uses_width_when_narrower() {
        let c = DisplayConfig {
            display_width: 32,
            ..DisplayConfig::default()
        };
        let area = c.trace_area();
        assert_eq!(area.size, Size::new(28, 28));
        assert_eq!(area.top_left, Point::new(2, 19));
    }

    // ── map_sample ───────────────────────────────────────────────────

    #[test]
    fn extremes_map_to_corners_with_y_inverted() {
        let area = DisplayConfig::default().trace_area();
        assert_eq!(map_sample(Sample::new(0, 0), &area), Point::new(45, 51));
        assert_eq!(map_sample(Sample::new(255, 255), &area), Point::new(82, 14));
        assert_eq!(map_sample(Sample::new(0, 255), &area), Point::new(45, 14));
    }

    #[test]
    fn centre_sample_maps_to_middle_of_area() {
        let area = DisplayConfig::default().trace_area();
        let p = map_sample(Sample::CENTER, &area);
        let mid = area.center();
        assert!((p.x - mid.x).abs() <= 1);
        assert!((p.y - mid.y).abs() <= 1);
    }

    #[test]
    fn every_sample_stays_inside_area() {
        let area = DisplayConfig::default().trace_area();
        for x in (0..=255u8).step_by(5) {
            for y in (0..=255u8).step_by(5) {
                assert!(area.contains(map_sample(Sample::new(x, y), &area)));
            }
        }
        assert!(area.contains(map_sample(Sample::new(255, 0), &area)));
    }

    // ── DisplayState ─────────────────────────────────────────────────

    #[test]
    fn default_display_state_is_empty() {
        let state = DisplayState::default();
        assert_eq!(state.name, [0u8; NAME_CAPACITY + 1]);
        assert_eq!(state.index, 0);
        assert_eq!(state.count, 0);
    }

    #[test]
    fn from_pattern_copies_fields() {
        let state = DisplayState::from_pattern("Rose 5", 8, 18);
        assert_eq!(state.name(), "Rose 5");
        assert_eq!(state.index, 8);
        assert_eq!(state.count, 18);
    }

    #[test]
    fn from_pattern_keeps_every_builtin_name_whole() {
        use xyscope::patterns::BUILTIN_SHAPES;

        for (i, entry) in BUILTIN_SHAPES.iter().enumerate() {
            let state = DisplayState::from_pattern(entry.name, i, BUILTIN_SHAPES.len());
            assert_eq!(state.name(), entry.name);
        }
        let state = DisplayState::from_pattern("Spiral Archimedes", 12, 18);
        assert_eq!(state.name(), "Spiral Archimedes");
    }

    #[test]
    fn from_pattern_truncates_long_names() {
        let state = DisplayState::from_pattern("Spiral Archimedes Extended", 12, 18);
        assert_eq!(state.name(), "Spiral Archimedes Ext");
        assert_eq!(state.name().len(), NAME_CAPACITY);
    }

    #[test]
    fn from_pattern_truncates_on_char_boundary() {
        // 20 ASCII bytes then a 2-byte character straddling byte 21.
        let state = DisplayState::from_pattern("ABCDEFGHIJKLMNOPQRSTé", 0, 1);
        assert_eq!(state.name(), "ABCDEFGHIJKLMNOPQRST");
    }

    #[test]
    fn full_width_name_fits_the_header() {
        let config = DisplayConfig::default();
        let glyph_width = FONT_6X10.character_size.width;
        assert!(NAME_CAPACITY as u32 * glyph_width <= config.display_width);
    }

    #[test]
    fn footer_is_one_based() {
        let state = DisplayState::from_pattern("Rose 5", 8, 18);
        assert_eq!(state.footer().as_str(), "9/18 A:Next B:Prev");
    }

    #[test]
    fn states_differ_by_index() {
        let a = DisplayState::from_pattern("Same", 0, 2);
        let b = DisplayState::from_pattern("Same", 1, 2);
        assert_ne!(a, b);
        assert_eq!(a, DisplayState::from_pattern("Same", 0, 2));
    }

    #[test]
    fn bytes_to_str_handles_null_padding() {
        let mut buf = [0u8; NAME_CAPACITY + 1];
        buf[0] = b'H';
        buf[1] = b'i';
        assert_eq!(DisplayState::bytes_to_str(&buf), "Hi");
    }

    #[test]
    fn bytes_to_str_handles_fully_empty() {
        let buf = [0u8; NAME_CAPACITY + 1];
        assert_eq!(DisplayState::bytes_to_str(&buf), "");
    }

    // ── render_pattern ───────────────────────────────────────────────

    #[test]
    fn single_sample_lights_one_trace_pixel() {
        let config = DisplayConfig::default();
        let mut canvas = Canvas::new();
        let state = DisplayState::default();
        render_pattern(&mut canvas, &state, &[Sample::new(255, 255)], &config).unwrap();

        assert!(canvas.is_on(Point::new(82, 14)));
        assert_eq!(canvas.lit().count(), 1);
    }

    #[test]
    fn consecutive_samples_are_joined() {
        let config = DisplayConfig::default();
        let mut canvas = Canvas::new();
        let state = DisplayState::default();
        let samples = [Sample::new(0, 128), Sample::new(255, 128)];
        render_pattern(&mut canvas, &state, &samples, &config).unwrap();

        // Horizontal line across the full trace width.
        let y = map_sample(samples[0], &config.trace_area()).y;
        for x in 45..=82 {
            assert!(canvas.is_on(Point::new(x, y)));
        }
        assert_eq!(canvas.lit().count(), 38);
    }

    #[test]
    fn trace_stays_inside_area() {
        let config = DisplayConfig::default();
        let area = config.trace_area();
        let mut canvas = Canvas::new();
        let samples: [Sample; 8] = core::array::from_fn(|i| {
            let v = (i as u8) * 36;
            Sample::new(v, 255 - v)
        });
        render_pattern(&mut canvas, &DisplayState::default(), &samples, &config).unwrap();

        assert!(canvas.lit().count() > 0);
        assert!(canvas.lit().all(|p| area.contains(p)));
    }

    #[test]
    fn text_goes_to_header_and_footer() {
        let config = DisplayConfig::default();
        let mut canvas = Canvas::new();
        let state = DisplayState::from_pattern("Circle", 0, 18);
        render_pattern(&mut canvas, &state, &[], &config).unwrap();

        let header = config.header_height as i32;
        let footer = (config.display_height - config.footer_height) as i32;
        assert!(canvas.lit().any(|p| p.y < header));
        assert!(canvas.lit().any(|p| p.y >= footer));
        assert!(canvas.lit().all(|p| p.y < header || p.y >= footer));
    }
}
