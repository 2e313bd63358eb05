//! Blocking SSD1306 driver in buffered graphics mode.

use display_interface_i2c::I2CInterface;
use embedded_hal::i2c::I2c;
use ssd1306::{mode::BufferedGraphicsMode, prelude::*, I2CDisplayInterface, Ssd1306};

use crate::error::OledError;

/// Concrete display type used internally by [`OledDriver`].
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Driver for an SSD1306 128×64 OLED over a blocking I2C bus.
///
/// # Lifecycle
///
/// 1. [`OledDriver::new()`] builds the driver without any I2C traffic.
/// 2. [`OledDriver::init()`] sends the SSD1306 initialisation sequence.
/// 3. Draw into the frame buffer via [`OledDriver::display_mut()`].
/// 4. [`OledDriver::flush()`] transfers the frame buffer to hardware.
///
/// Every call blocks the caller for the duration of the bus transfer. A
/// full frame at 400 kHz is about 20 ms, which shows up as a pause in the
/// oscilloscope trace whenever the selection changes.
///
/// # Example
///
/// ```no_run
/// use xyscope_display::OledDriver;
///
/// # fn example(i2c: impl embedded_hal::i2c::I2c) {
/// let mut oled = OledDriver::new(i2c, 0x3C);
/// oled.init().unwrap();
/// oled.clear_buffer();
/// oled.flush().unwrap();
/// # }
/// ```
pub struct OledDriver<I2C> {
    display: Display<I2C>,
    initialized: bool,
}

impl<I2C> OledDriver<I2C>
where
    I2C: I2c,
{
    /// Construct an uninitialised driver.
    ///
    /// # Arguments
    /// * `i2c`: I2C peripheral (takes ownership for exclusive access).
    /// * `address`: 7-bit I2C device address (typically `0x3C` or `0x3D`).
    pub fn new(i2c: I2C, address: u8) -> Self {
        let interface = I2CDisplayInterface::new_custom_address(i2c, address);
        let display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();

        Self {
            display,
            initialized: false,
        }
    }

    /// Initialise the SSD1306 hardware.
    ///
    /// # Errors
    ///
    /// Returns [`OledError::InitializationFailed`] if the display does not
    /// respond.
    pub fn init(&mut self) -> Result<(), OledError> {
        self.display
            .init()
            .map_err(|_| OledError::InitializationFailed)?;
        self.initialized = true;
        Ok(())
    }

    /// Clear the in-memory frame buffer. No I2C traffic.
    pub fn clear_buffer(&mut self) {
        self.display.clear_buffer();
    }

    /// Transfer the frame buffer to the display.
    ///
    /// # Errors
    ///
    /// Returns [`OledError::NotInitialized`] if [`init()`](Self::init) has
    /// not succeeded, or [`OledError::Display`] on a bus-level failure.
    pub fn flush(&mut self) -> Result<(), OledError> {
        if !self.initialized {
            return Err(OledError::NotInitialized);
        }
        self.display.flush()?;
        Ok(())
    }

    /// The underlying `ssd1306` display, for `embedded-graphics` drawing.
    ///
    /// Returns `None` until [`init()`](Self::init) has succeeded.
    pub fn display_mut(&mut self) -> Option<&mut Display<I2C>> {
        if self.initialized {
            Some(&mut self.display)
        } else {
            None
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}
