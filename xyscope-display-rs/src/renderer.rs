//! [`RenderAdapter`] backed by the OLED.

use embedded_hal::i2c::I2c;

use xyscope::patterns::Pattern;
use xyscope::playback::RenderAdapter;

use crate::driver::OledDriver;
use crate::error::OledError;
use crate::layout::{render_pattern, DisplayConfig, DisplayState};

/// Draws the selected pattern on an SSD1306.
///
/// Each redraw builds a [`DisplayState`] snapshot. If it matches the last
/// frame that reached the panel, nothing is sent. Otherwise the buffer is
/// cleared, redrawn and flushed in one blocking call.
///
/// A failed flush leaves the last-drawn snapshot untouched, so the next
/// redraw of the same pattern tries again.
pub struct OledRenderer<I2C> {
    driver: OledDriver<I2C>,
    config: DisplayConfig,
    last_state: Option<DisplayState>,
}

impl<I2C> OledRenderer<I2C>
where
    I2C: I2c,
{
    pub fn new(driver: OledDriver<I2C>, config: DisplayConfig) -> Self {
        Self {
            driver,
            config,
            last_state: None,
        }
    }

    /// Initialise the panel and blank it.
    pub fn init(&mut self) -> Result<(), OledError> {
        self.driver.init()?;
        self.driver.clear_buffer();
        self.driver.flush()?;

        #[cfg(feature = "defmt")]
        defmt::info!("OLED initialised");

        Ok(())
    }

    pub fn driver(&self) -> &OledDriver<I2C> {
        &self.driver
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Snapshot of the frame currently on the panel, if any.
    pub fn last_state(&self) -> Option<&DisplayState> {
        self.last_state.as_ref()
    }
}

impl<I2C> RenderAdapter for OledRenderer<I2C>
where
    I2C: I2c,
{
    type Error = OledError;

    fn redraw(&mut self, pattern: &Pattern<'_>, index: usize, count: usize) -> Result<(), OledError> {
        let state = DisplayState::from_pattern(pattern.name(), index, count);
        if self.last_state == Some(state) {
            return Ok(());
        }

        self.driver.clear_buffer();
        let display = self.driver.display_mut().ok_or(OledError::NotInitialized)?;
        render_pattern(display, &state, pattern.samples(), &self.config)?;
        self.driver.flush()?;

        self.last_state = Some(state);
        Ok(())
    }
}
