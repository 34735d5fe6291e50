//! Polled update-cycle driver
//!
//! The host scheduler drives the lifecycle from a single execution context:
//! [`Ct1642::setup`] once, then [`Ct1642::update`] every
//! [`Ct1642::update_interval_ms`] milliseconds, never re-entered. Each
//! update runs the optional rendering writer and then flushes the whole
//! buffer; nothing is cleared between ticks unless the writer clears it.

use ct1642_hal::{DelayUs, OutputPin};

use crate::buffer::{SegmentBuffer, SegmentError};
use crate::config::{ConfigError, DisplayConfig};
use crate::protocol::ShiftBus;

/// CT1642 display driver
///
/// Owns the two bus lines, the delay source, and the segment buffer. `W` is
/// the optional rendering writer, supplied once at construction; it receives
/// the buffer on every update cycle before the flush.
pub struct Ct1642<Clk, Data, D, W = fn(&mut SegmentBuffer)> {
    bus: ShiftBus<Clk, Data, D>,
    buffer: SegmentBuffer,
    config: DisplayConfig,
    writer: Option<W>,
    ready: bool,
}

impl<Clk, Data, D> Ct1642<Clk, Data, D>
where
    Clk: OutputPin,
    Data: OutputPin,
    D: DelayUs,
{
    /// Build a driver with no rendering writer.
    ///
    /// Fails without producing a driver when the config is invalid.
    pub fn new(
        config: DisplayConfig,
        clk: Clk,
        data: Data,
        delay: D,
    ) -> Result<Self, ConfigError> {
        Self::build(config, clk, data, delay, None)
    }
}

impl<Clk, Data, D, W> Ct1642<Clk, Data, D, W>
where
    Clk: OutputPin,
    Data: OutputPin,
    D: DelayUs,
    W: FnMut(&mut SegmentBuffer),
{
    /// Build a driver whose writer repopulates the buffer each update.
    ///
    /// Fails without producing a driver when the config is invalid.
    pub fn with_writer(
        config: DisplayConfig,
        clk: Clk,
        data: Data,
        delay: D,
        writer: W,
    ) -> Result<Self, ConfigError> {
        Self::build(config, clk, data, delay, Some(writer))
    }

    fn build(
        config: DisplayConfig,
        clk: Clk,
        data: Data,
        delay: D,
        writer: Option<W>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let buffer = SegmentBuffer::new(config.length)?;
        Ok(Self {
            bus: ShiftBus::new(clk, data, delay),
            buffer,
            config,
            writer,
            ready: false,
        })
    }

    /// One-time initialization: park both lines at idle, blank the buffer.
    ///
    /// The host calls this once before the first update. Pin direction is
    /// the platform HAL's concern; handles arrive already configured as
    /// outputs.
    pub fn setup(&mut self) {
        self.bus.set_idle();
        self.buffer.clear();
        self.ready = true;
    }

    /// One polling tick: run the writer, then flush the buffer to the chip.
    ///
    /// Never reports failure to the scheduler; the next tick retransmits
    /// the whole frame anyway. Does nothing until [`Self::setup`] has run.
    pub fn update(&mut self) {
        if !self.ready {
            return;
        }
        if let Some(writer) = self.writer.as_mut() {
            writer(&mut self.buffer);
        }
        self.bus.flush(self.buffer.as_slice());
    }

    /// Write one digit's segment pattern
    pub fn set_segment(&mut self, index: u8, pattern: u8) -> Result<(), SegmentError> {
        self.buffer.set_segment(index, pattern)
    }

    /// Segment pattern currently held for `index`
    pub fn segment(&self, index: u8) -> Option<u8> {
        self.buffer.segment(index)
    }

    /// Blank the display content
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Encode text into the buffer starting at `index`; returns digits written
    pub fn print(&mut self, index: u8, text: &str) -> u8 {
        self.buffer.print(index, text)
    }

    /// Display content (the same surface the writer receives)
    pub fn buffer(&self) -> &SegmentBuffer {
        &self.buffer
    }

    /// Cadence the host scheduler should call [`Self::update`] at
    pub fn update_interval_ms(&self) -> u32 {
        self.config.update_interval_ms
    }

    /// Construction configuration
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }
}
