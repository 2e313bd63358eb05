//! Parametric curves the built-in patterns are computed from.
//!
//! Every curve is evaluated in normalised coordinates (`[-1, 1]` on both
//! axes, origin at the centre of the screen) and converted to output
//! magnitudes with [`normalize`].

use core::f64::consts::PI;

use libm::{cos, exp, pow, rint, sin};

use super::sample::Sample;

/// Largest value an 8-bit output channel accepts.
const MAX_VALUE: f64 = 255.0;

/// Map a normalised coordinate in `[-1, 1]` to an output magnitude.
///
/// Halves round to the even neighbour and values outside the range are
/// clamped, so `0.0` lands on [`CENTER`](super::CENTER) and `±1.0` on the
/// rails.
///
/// ```
/// use xyscope::patterns::normalize;
///
/// assert_eq!(normalize(-1.0), 0);
/// assert_eq!(normalize(0.0), 128);
/// assert_eq!(normalize(1.0), 255);
/// assert_eq!(normalize(3.0), 255);
/// ```
pub fn normalize(value: f64) -> u8 {
    let scaled = rint((value + 1.0) * MAX_VALUE / 2.0);
    scaled.clamp(0.0, MAX_VALUE) as u8
}

/// A closed curve in normalised coordinates.
///
/// Curves are evaluated in `f64` with the operations in a fixed order, so
/// the rendered tables are reproducible bit for bit on every target.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Shape {
    /// Circle of radius 0.8.
    Circle,
    /// Ellipse with semi-axes 0.8 × 0.6.
    Ellipse,
    /// `x = sin(fx·t)`, `y = sin(fy·t)`, amplitude 0.8.
    Lissajous { freq_x: u8, freq_y: u8 },
    /// `x = cos(fx·t)`, `y = sin(fy·t)`, amplitude 0.8.
    LissajousCos { freq_x: u8, freq_y: u8 },
    Heart,
    /// Polar rose `r = 0.8·cos(k·θ)`; non-integer `k` gives a rhodonea.
    Rose { k: f64 },
    /// Temple Fay's butterfly, scale 0.3.
    Butterfly,
    /// Lemniscate of Bernoulli.
    Infinity,
    /// Three turns, radius growing linearly to 0.8.
    SpiralArchimedes,
    /// Two turns, `r = 0.1·e^(0.2·θ)`, capped at 1.
    SpiralLog,
    /// Spirograph with R = 5, r = 3, d = 5.
    Hypotrochoid,
    /// Two arches of a cycloid stretched to fill the screen.
    Cycloid,
    /// Four-cusped hypocycloid.
    Astroid,
}

impl Shape {
    /// Evaluate the curve at step `i` of `len` in normalised coordinates.
    pub fn point(&self, i: usize, len: usize) -> (f64, f64) {
        let (i, len) = (i as f64, len as f64);
        let t = 2.0 * PI * i / len;

        match *self {
            Shape::Circle => (0.8 * cos(t), 0.8 * sin(t)),
            Shape::Ellipse => (0.8 * cos(t), 0.6 * sin(t)),
            Shape::Lissajous { freq_x, freq_y } => (
                0.8 * sin(f64::from(freq_x) * t),
                0.8 * sin(f64::from(freq_y) * t),
            ),
            Shape::LissajousCos { freq_x, freq_y } => (
                0.8 * cos(f64::from(freq_x) * t),
                0.8 * sin(f64::from(freq_y) * t),
            ),
            Shape::Heart => {
                let x = 0.1 * 16.0 * pow(sin(t), 3.0);
                let y = 0.1
                    * (13.0 * cos(t) - 5.0 * cos(2.0 * t) - 2.0 * cos(3.0 * t) - cos(4.0 * t));
                (x, y)
            }
            Shape::Rose { k } => {
                let r = 0.8 * cos(k * t);
                (r * cos(t), r * sin(t))
            }
            Shape::Butterfly => {
                let e = exp(cos(t)) - 2.0 * cos(4.0 * t) - pow(sin(t / 12.0), 5.0);
                (0.3 * sin(t) * e, 0.3 * cos(t) * e)
            }
            Shape::Infinity => {
                let d = 1.0 + pow(sin(t), 2.0);
                (0.8 * cos(t) / d, 0.8 * sin(t) * cos(t) / d)
            }
            Shape::SpiralArchimedes => {
                let turns = 3.0;
                let t = turns * 2.0 * PI * i / len;
                let r = 0.8 * t / (turns * 2.0 * PI);
                (r * cos(t), r * sin(t))
            }
            Shape::SpiralLog => {
                let t = 4.0 * PI * i / len;
                let r = (0.1 * exp(0.2 * t)).min(1.0);
                (r * cos(t), r * sin(t))
            }
            Shape::Hypotrochoid => {
                let (big_r, small_r, d) = (5.0, 3.0, 5.0);
                let inner = (big_r - small_r) * t / small_r;
                let x = 0.15 * ((big_r - small_r) * cos(t) + d * cos(inner));
                let y = 0.15 * ((big_r - small_r) * sin(t) - d * sin(inner));
                (x, y)
            }
            Shape::Cycloid => {
                let radius = 0.2;
                let t = 4.0 * PI * i / len;
                let x = radius * (t - sin(t));
                let y = radius * (1.0 - cos(t));
                (x / (4.0 * PI * radius) * 2.0 - 1.0, y / (2.0 * radius) - 1.0)
            }
            Shape::Astroid => (0.8 * pow(cos(t), 3.0), 0.8 * pow(sin(t), 3.0)),
        }
    }

    /// Fill `out` with one full period of the curve.
    ///
    /// The curve is sampled at `out.len()` evenly spaced steps; an empty
    /// slice is left untouched.
    pub fn render(&self, out: &mut [Sample]) {
        let len = out.len();
        for (i, sample) in out.iter_mut().enumerate() {
            let (x, y) = self.point(i, len);
            *sample = Sample::new(normalize(x), normalize(y));
        }
    }
}

/// A catalogue entry: a display name bound to a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ShapeEntry {
    pub name: &'static str,
    pub shape: Shape,
}

impl ShapeEntry {
    pub const fn new(name: &'static str, shape: Shape) -> Self {
        Self { name, shape }
    }
}

/// The built-in catalogue, in selector order.
pub const BUILTIN_SHAPES: [ShapeEntry; super::BUILTIN_COUNT] = [
    ShapeEntry::new("Circle", Shape::Circle),
    ShapeEntry::new("Ellipse", Shape::Ellipse),
    ShapeEntry::new("Lissajous 3:2", Shape::Lissajous { freq_x: 3, freq_y: 2 }),
    ShapeEntry::new("Lissajous 5:4", Shape::Lissajous { freq_x: 5, freq_y: 4 }),
    ShapeEntry::new("Lissajous 7:5", Shape::Lissajous { freq_x: 7, freq_y: 5 }),
    ShapeEntry::new("Lissajous Cos", Shape::LissajousCos { freq_x: 3, freq_y: 2 }),
    ShapeEntry::new("Heart", Shape::Heart),
    ShapeEntry::new("Rose 3", Shape::Rose { k: 3.0 }),
    ShapeEntry::new("Rose 5", Shape::Rose { k: 5.0 }),
    ShapeEntry::new("Rose 8", Shape::Rose { k: 8.0 }),
    ShapeEntry::new("Butterfly", Shape::Butterfly),
    ShapeEntry::new("Infinity", Shape::Infinity),
    ShapeEntry::new("Spiral Archimedes", Shape::SpiralArchimedes),
    ShapeEntry::new("Spiral Log", Shape::SpiralLog),
    ShapeEntry::new("Hypotrochoid", Shape::Hypotrochoid),
    ShapeEntry::new("Rhodonea", Shape::Rose { k: 2.5 }),
    ShapeEntry::new("Cycloid", Shape::Cycloid),
    ShapeEntry::new("Astroid", Shape::Astroid),
];
