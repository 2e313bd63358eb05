use super::INPUT_LINES;

/// Logical state of an input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Button held down.
    Asserted,
    /// Button up.
    #[default]
    Released,
}

impl Level {
    /// Decode an active-low line (pulled high when the button is up).
    pub fn from_active_low(is_low: bool) -> Self {
        if is_low {
            Level::Asserted
        } else {
            Level::Released
        }
    }
}

/// A single logical button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEdge {
    Next,
    Previous,
}

/// Level-based debouncer for one input line.
///
/// Emits one edge the first time the line is seen asserted, then stays
/// latched until the line is seen released. There is no time filter: the
/// poll interval (one full pattern pass) is longer than contact bounce.
///
/// ```
/// use xyscope::playback::{Debouncer, Level};
///
/// let mut button = Debouncer::new();
/// assert!(button.poll(Level::Asserted));
/// assert!(!button.poll(Level::Asserted));
/// assert!(!button.poll(Level::Released));
/// assert!(button.poll(Level::Asserted));
/// ```
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    last_level: Level,
    latched: bool,
}

impl Debouncer {
    pub const fn new() -> Self {
        Self {
            last_level: Level::Released,
            latched: false,
        }
    }

    /// Feed one raw reading. Returns `true` exactly once per press.
    pub fn poll(&mut self, level: Level) -> bool {
        self.last_level = level;
        match level {
            Level::Asserted if !self.latched => {
                self.latched = true;
                true
            }
            Level::Asserted => false,
            Level::Released => {
                self.latched = false;
                false
            }
        }
    }

    /// Most recent raw reading.
    pub fn level(&self) -> Level {
        self.last_level
    }

    /// `true` while a press has been reported and not yet released.
    pub fn is_latched(&self) -> bool {
        self.latched
    }
}

/// The NEXT / PREVIOUS button pair.
///
/// Line 0 maps to [`InputEdge::Next`], line 1 to [`InputEdge::Previous`].
/// Lines are independent: pressing both in the same poll yields both edges,
/// in line order.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonPanel {
    lines: [Debouncer; INPUT_LINES],
}

impl ButtonPanel {
    /// Edge produced by each line, indexed by line number.
    pub const EDGES: [InputEdge; INPUT_LINES] = [InputEdge::Next, InputEdge::Previous];

    pub const fn new() -> Self {
        Self {
            lines: [Debouncer::new(); INPUT_LINES],
        }
    }

    /// Debounce one reading of every line.
    ///
    /// Returns one slot per line; `Some` marks a fresh press. Callers
    /// usually iterate with `.into_iter().flatten()`.
    pub fn poll(&mut self, levels: [Level; INPUT_LINES]) -> [Option<InputEdge>; INPUT_LINES] {
        let mut edges = [None; INPUT_LINES];
        for (i, (line, level)) in self.lines.iter_mut().zip(levels).enumerate() {
            if line.poll(level) {
                edges[i] = Some(Self::EDGES[i]);
            }
        }
        edges
    }

    /// Debouncer state for line `i`, or `None` if out of bounds.
    pub fn line(&self, i: usize) -> Option<&Debouncer> {
        self.lines.get(i)
    }
}
