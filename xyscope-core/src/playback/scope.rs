use core::convert::Infallible;

use embedded_hal::delay::DelayNs;

use super::debounce::ButtonPanel;
use super::engine::PlaybackEngine;
use super::error::PlaybackError;
use super::io::{InputSource, OutputSink, RenderAdapter};
use super::selector::Selector;
use super::DEFAULT_PACE_US;
use crate::patterns::{PatternError, PatternTable, DEFAULT_PATTERN};

/// Start-up settings for [`XyScope`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScopeConfig {
    /// Pattern shown at power-on. Default: [`DEFAULT_PATTERN`] ("Rose 5").
    pub initial_pattern: usize,
    /// Pause after every sample, in microseconds. Default: 10.
    pub pace_us: u32,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            initial_pattern: DEFAULT_PATTERN,
            pace_us: DEFAULT_PACE_US,
        }
    }
}

/// What one [`XyScope::tick()`] did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    /// Button edges applied to the selector.
    pub edges: usize,
    /// `true` if the render adapter was called and succeeded.
    pub redrawn: bool,
    /// Samples streamed in this pass.
    pub samples: usize,
}

/// The cooperative playback loop.
///
/// Owns the selector, the button debouncers, the playback engine and the
/// render adapter. There is a single thread of control: the selector is
/// written only by edge handling and read only by rendering and playback,
/// all from [`tick()`](Self::tick), so no locking is needed.
///
/// # Examples
///
/// ```
/// use embedded_hal::delay::DelayNs;
/// use xyscope::patterns::{PatternBank, PatternTable, BUILTIN_COUNT, BUILTIN_SHAPES};
/// use xyscope::playback::{
///     Channel, Headless, InputSource, Level, OutputSink, ScopeConfig, XyScope, INPUT_LINES,
/// };
///
/// struct Discard;
/// impl OutputSink for Discard {
///     type Error = core::convert::Infallible;
///     fn write(&mut self, _: Channel, _: u8) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// struct NoWait;
/// impl DelayNs for NoWait {
///     fn delay_ns(&mut self, _: u32) {}
/// }
///
/// struct NextHeld;
/// impl InputSource for NextHeld {
///     fn read_levels(&mut self) -> [Level; INPUT_LINES] {
///         [Level::Asserted, Level::Released]
///     }
/// }
///
/// let mut bank = PatternBank::<BUILTIN_COUNT, 32>::new();
/// bank.fill(&BUILTIN_SHAPES);
/// let patterns = bank.patterns();
/// let table = PatternTable::new(&patterns).unwrap();
///
/// let mut scope = XyScope::new(&table, Discard, NoWait, Headless, ScopeConfig::default()).unwrap();
/// scope.start().unwrap();
/// scope.tick(&mut NextHeld).unwrap();
/// scope.tick(&mut NextHeld).unwrap();
/// // Held button: one step from "Rose 5" to "Rose 8".
/// assert_eq!(scope.selector().current().name(), "Rose 8");
/// ```
pub struct XyScope<'a, S, D, R> {
    selector: Selector<'a>,
    buttons: ButtonPanel,
    engine: PlaybackEngine<S, D>,
    renderer: R,
}

impl<'a, S, D, R> XyScope<'a, S, D, R>
where
    S: OutputSink,
    D: DelayNs,
    R: RenderAdapter,
{
    /// Returns [`PatternError::OutOfRange`] if `config.initial_pattern` is
    /// not a valid index into `table`.
    pub fn new(
        table: &'a PatternTable<'a>,
        sink: S,
        delay: D,
        renderer: R,
        config: ScopeConfig,
    ) -> Result<Self, PatternError> {
        Ok(Self {
            selector: Selector::new(table, config.initial_pattern)?,
            buttons: ButtonPanel::new(),
            engine: PlaybackEngine::new(sink, delay, config.pace_us),
            renderer,
        })
    }

    /// Park both outputs at centre. Call once before the first tick.
    pub fn start(&mut self) -> Result<(), PlaybackError<S::Error>> {
        self.engine.park()?;

        #[cfg(feature = "defmt")]
        defmt::info!(
            "XY scope ready: {} patterns x {} samples, {} us/sample, starting at {} ({}/{})",
            self.selector.count(),
            self.selector.current().len(),
            self.engine.pace_us(),
            self.selector.current().name(),
            self.selector.index() + 1,
            self.selector.count()
        );

        Ok(())
    }

    /// One loop iteration: poll inputs, apply edges, redraw if needed,
    /// stream one full pass.
    ///
    /// Edges are applied before the redraw, so a press already latched on
    /// the first tick replaces the initial draw instead of following it.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::Sink`] if the output rejects a write. A
    /// render failure is logged and does not stop the pass.
    pub fn tick<I>(&mut self, input: &mut I) -> Result<TickReport, PlaybackError<S::Error>>
    where
        I: InputSource + ?Sized,
    {
        let mut report = TickReport::default();

        for edge in self.buttons.poll(input.read_levels()).into_iter().flatten() {
            self.selector.apply(edge);
            report.edges += 1;

            #[cfg(feature = "defmt")]
            defmt::info!(
                "{}: {} ({}/{})",
                edge,
                self.selector.current().name(),
                self.selector.index() + 1,
                self.selector.count()
            );
        }

        if self.selector.consume_dirty() {
            let pattern = self.selector.current();
            match self
                .renderer
                .redraw(pattern, self.selector.index(), self.selector.count())
            {
                Ok(()) => report.redrawn = true,
                Err(_) => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("Redraw failed for {}", pattern.name());
                }
            }
        }

        report.samples = self.engine.play_pass(self.selector.current())?;
        Ok(report)
    }

    /// [`start()`](Self::start), then [`tick()`](Self::tick) forever.
    ///
    /// Only returns on a sink failure.
    pub fn run<I>(&mut self, input: &mut I) -> Result<Infallible, PlaybackError<S::Error>>
    where
        I: InputSource + ?Sized,
    {
        self.start()?;
        loop {
            self.tick(input)?;
        }
    }

    pub fn selector(&self) -> &Selector<'a> {
        &self.selector
    }

    pub fn buttons(&self) -> &ButtonPanel {
        &self.buttons
    }

    pub fn engine(&self) -> &PlaybackEngine<S, D> {
        &self.engine
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
