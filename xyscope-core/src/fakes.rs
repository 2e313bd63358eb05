//! In-memory stand-ins for the hardware capabilities, used by unit tests.

extern crate std;

use std::string::String;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;

use crate::patterns::Pattern;
use crate::playback::{Channel, InputSource, Level, OutputSink, RenderAdapter, INPUT_LINES};

/// Records every write in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub writes: Vec<(Channel, u8)>,
}

impl OutputSink for RecordingSink {
    type Error = core::convert::Infallible;

    fn write(&mut self, channel: Channel, value: u8) -> Result<(), Self::Error> {
        self.writes.push((channel, value));
        Ok(())
    }
}

/// Accepts a fixed number of writes, then fails with the count accepted.
#[derive(Debug)]
pub struct FailingSink {
    pub accepted: usize,
    limit: usize,
}

impl FailingSink {
    pub fn after(limit: usize) -> Self {
        Self { accepted: 0, limit }
    }
}

impl OutputSink for FailingSink {
    type Error = usize;

    fn write(&mut self, _channel: Channel, _value: u8) -> Result<(), Self::Error> {
        if self.accepted == self.limit {
            return Err(self.accepted);
        }
        self.accepted += 1;
        Ok(())
    }
}

/// Counts pauses instead of waiting.
#[derive(Debug, Default)]
pub struct CountingDelay {
    pub calls: usize,
    pub total_ns: u64,
}

impl DelayNs for CountingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.calls += 1;
        self.total_ns += u64::from(ns);
    }
}

/// Plays back a fixed list of line readings, then reports every line
/// released.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    script: Vec<[Level; INPUT_LINES]>,
    pos: usize,
}

impl ScriptedInput {
    pub fn new(script: &[[Level; INPUT_LINES]]) -> Self {
        Self {
            script: script.to_vec(),
            pos: 0,
        }
    }

    /// Readings handed out so far.
    pub fn polls(&self) -> usize {
        self.pos
    }
}

impl InputSource for ScriptedInput {
    fn read_levels(&mut self) -> [Level; INPUT_LINES] {
        let levels = self
            .script
            .get(self.pos)
            .copied()
            .unwrap_or([Level::Released; INPUT_LINES]);
        self.pos += 1;
        levels
    }
}

/// Records each redraw as `(name, index, count)`; can be told to fail.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub redraws: Vec<(String, usize, usize)>,
    pub fail: bool,
}

impl RenderAdapter for RecordingRenderer {
    type Error = ();

    fn redraw(
        &mut self,
        pattern: &Pattern<'_>,
        index: usize,
        count: usize,
    ) -> Result<(), Self::Error> {
        self.redraws.push((String::from(pattern.name()), index, count));
        if self.fail {
            Err(())
        } else {
            Ok(())
        }
    }
}
