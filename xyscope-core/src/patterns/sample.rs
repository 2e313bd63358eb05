/// Output value that puts the beam in the middle of an 8-bit channel.
pub const CENTER: u8 = 128;

/// One `(x, y)` coordinate pair written to the two output channels at a
/// single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sample {
    /// Channel 1 magnitude.
    pub x: u8,
    /// Channel 2 magnitude.
    pub y: u8,
}

impl Sample {
    /// Both channels at [`CENTER`].
    pub const CENTER: Sample = Sample::new(CENTER, CENTER);

    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }
}

impl Default for Sample {
    fn default() -> Self {
        Self::CENTER
    }
}
