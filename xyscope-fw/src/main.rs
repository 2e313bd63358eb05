//! xyscope-fw
//!
//! XY oscilloscope waveform generator for the Raspberry Pi Pico 2. Streams
//! one of the built-in Lissajous-style patterns to two PWM outputs that,
//! after RC filtering, drive the X and Y inputs of an oscilloscope:
//!
//! 1. The NEXT / PREVIOUS buttons are polled once per pass.
//! 2. A press steps the selection, wrapping at either end.
//! 3. The OLED shows the new pattern's name, position and a preview.
//! 4. The selected pattern is streamed sample by sample, X then Y, with a
//!    short pause after each sample.
//!
//! Everything runs in the main task. Blocking inside it is fine because
//! nothing else is spawned.

#![no_std]
#![no_main]

use core::convert::Infallible;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::pwm::{self, Pwm};
use embassy_time::Delay;
use static_cell::{ConstStaticCell, StaticCell};
use {defmt_rtt as _, panic_probe as _};

use xyscope::patterns::{
    BuiltinBank, Pattern, PatternTable, BUILTIN_COUNT, BUILTIN_SHAPES, CENTER,
};
use xyscope::playback::{
    Channel, InputSource, Level, OutputSink, PlaybackError, ScopeConfig, XyScope, INPUT_LINES,
};
use xyscope_display::{DisplayConfig, OledDriver, OledRenderer};

// ---------------------------------------------------------------------------
// Boot block
// ---------------------------------------------------------------------------

/// Tell the RP2350 Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = embassy_rp::block::ImageDef::secure_exe();

// ---------------------------------------------------------------------------
// Static storage
// ---------------------------------------------------------------------------

/// Sample storage for the built-in catalogue. Filled once in `main`.
static BANK: ConstStaticCell<BuiltinBank> = ConstStaticCell::new(BuiltinBank::new());

/// Name/slice views over `BANK`, borrowed by the pattern table.
static PATTERNS: StaticCell<[Pattern<'static>; BUILTIN_COUNT]> = StaticCell::new();

/// Validated table, shared by the selector for the rest of the program.
static TABLE: StaticCell<PatternTable<'static>> = StaticCell::new();

/// SSD1306 7-bit I2C address.
const OLED_ADDRESS: u8 = 0x3C;

/// PWM counter wrap. 256 steps give one duty step per sample value.
const PWM_TOP: u16 = 255;

// ---------------------------------------------------------------------------
// Hardware adapters
// ---------------------------------------------------------------------------

/// Two-channel 8-bit "DAC" built from one PWM slice and an RC filter per
/// output. Channel A carries X, channel B carries Y.
struct PwmDac<'d> {
    pwm: Pwm<'d>,
    config: pwm::Config,
}

impl<'d> PwmDac<'d> {
    fn new(pwm: Pwm<'d>, config: pwm::Config) -> Self {
        Self { pwm, config }
    }
}

impl OutputSink for PwmDac<'_> {
    type Error = Infallible;

    fn write(&mut self, channel: Channel, value: u8) -> Result<(), Self::Error> {
        match channel {
            Channel::X => self.config.compare_a = u16::from(value),
            Channel::Y => self.config.compare_b = u16::from(value),
        }
        self.pwm.set_config(&self.config);
        Ok(())
    }
}

/// NEXT and PREVIOUS push buttons, active-low with internal pull-ups.
struct Buttons<'d> {
    next: Input<'d>,
    previous: Input<'d>,
}

impl InputSource for Buttons<'_> {
    fn read_levels(&mut self) -> [Level; INPUT_LINES] {
        [
            Level::from_active_low(self.next.is_low()),
            Level::from_active_low(self.previous.is_low()),
        ]
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("xyscope-fw starting");

    // —— Pin assignments ————————————————————————————————————————————————————
    // DAC_X   → GP8   (p.PIN_8)   PWM slice 4 channel A, RC filtered
    // DAC_Y   → GP9   (p.PIN_9)   PWM slice 4 channel B, RC filtered
    // BTN_A   → GP14  (p.PIN_14)  NEXT, active-low, pull-up enabled
    // BTN_B   → GP15  (p.PIN_15)  PREVIOUS, active-low, pull-up enabled
    // I2C_SDA → GP20  (p.PIN_20)
    // I2C_SCL → GP21  (p.PIN_21)
    // ———————————————————————————————————————————————————————————————————————

    // —— Pattern table ——————————————————————————————————————————————————————

    let bank = BANK.take();
    bank.fill(&BUILTIN_SHAPES);
    let bank: &'static BuiltinBank = bank;
    let patterns: &'static [Pattern<'static>] = PATTERNS.init(bank.patterns());
    // A rejected table is a build defect; stop before touching the outputs.
    let table: &'static PatternTable<'static> = TABLE.init(unwrap!(PatternTable::new(patterns)));
    info!(
        "{} patterns of {} samples loaded",
        table.count(),
        table.sample_len()
    );
    for (i, pattern) in table.iter().enumerate() {
        debug!("  {}: {}", i + 1, pattern.name());
    }

    // —— Outputs ————————————————————————————————————————————————————————————

    let mut pwm_config = pwm::Config::default();
    pwm_config.top = PWM_TOP;
    pwm_config.compare_a = u16::from(CENTER);
    pwm_config.compare_b = u16::from(CENTER);
    let pwm = Pwm::new_output_ab(p.PWM_SLICE4, p.PIN_8, p.PIN_9, pwm_config.clone());
    let dac = PwmDac::new(pwm, pwm_config);

    // —— Inputs —————————————————————————————————————————————————————————————

    let mut buttons = Buttons {
        next: Input::new(p.PIN_14, Pull::Up),
        previous: Input::new(p.PIN_15, Pull::Up),
    };

    // —— Display ————————————————————————————————————————————————————————————

    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = 400_000;
    let i2c = I2c::new_blocking(
        p.I2C0,
        p.PIN_21, // SCL
        p.PIN_20, // SDA
        i2c_config,
    );

    let mut renderer = OledRenderer::new(
        OledDriver::new(i2c, OLED_ADDRESS),
        DisplayConfig::default(),
    );
    // The trace does not need the display. Keep going without it.
    if let Err(e) = renderer.init() {
        warn!("OLED init failed, continuing without display: {}", e);
    }

    // —— Playback ———————————————————————————————————————————————————————————

    let mut scope = unwrap!(XyScope::new(
        table,
        dac,
        Delay,
        renderer,
        ScopeConfig::default(),
    ));

    match scope.run(&mut buttons) {
        Ok(never) => match never {},
        Err(PlaybackError::Sink(never)) => match never {},
    }
}
