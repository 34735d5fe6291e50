//! Bit-transfer protocol engine
//!
//! The CT1642 behaves as a synchronous shift register: it samples the data
//! line on each rising clock edge. A frame is the active buffer content,
//! digit 0 first, each byte MSB first, `length * 8` clock pulses total.
//! A frame is one atomic blocking sequence; when it completes both lines are
//! left low so other bus users see a clean idle state.

use ct1642_hal::{DelayUs, OutputPin};

/// Data-line setup time before the rising clock edge, in microseconds
pub const DATA_SETUP_US: u32 = 1;

/// Clock-high hold time, in microseconds
pub const CLOCK_PULSE_US: u32 = 1;

/// Two-wire shift-register bus
pub struct ShiftBus<Clk, Data, D> {
    clk: Clk,
    data: Data,
    delay: D,
}

impl<Clk, Data, D> ShiftBus<Clk, Data, D>
where
    Clk: OutputPin,
    Data: OutputPin,
    D: DelayUs,
{
    /// Take ownership of both lines and the delay source
    pub fn new(clk: Clk, data: Data, delay: D) -> Self {
        Self { clk, data, delay }
    }

    /// Park both lines at the idle state (low)
    pub fn set_idle(&mut self) {
        self.clk.set_low();
        self.data.set_low();
    }

    /// Clock one bit into the controller's shift register
    fn shift_bit(&mut self, high: bool) {
        self.data.set_level(high);
        self.delay.delay_us(DATA_SETUP_US);
        self.clk.set_high();
        self.delay.delay_us(CLOCK_PULSE_US);
        self.clk.set_low();
    }

    /// Shift one segment byte, MSB first
    pub fn shift_byte(&mut self, pattern: u8) {
        for bit in (0..8).rev() {
            self.shift_bit(pattern & (1 << bit) != 0);
        }
    }

    /// Transmit a whole frame, digit 0 first, and return the bus to idle.
    ///
    /// Blocks the calling context for the duration; must not be interleaved
    /// with another flush. The driver's single-context ownership guarantees
    /// that.
    pub fn flush(&mut self, frame: &[u8]) {
        for &pattern in frame {
            self.shift_byte(pattern);
        }
        // The last pulse left the clock low; park the data line too.
        self.data.set_low();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Wire {
        Clk,
        Data,
    }

    type Log = RefCell<heapless::Vec<(Wire, bool), 256>>;

    struct LogPin<'a> {
        wire: Wire,
        log: &'a Log,
    }

    impl OutputPin for LogPin<'_> {
        fn set_level(&mut self, high: bool) {
            self.log.borrow_mut().push((self.wire, high)).unwrap();
        }
    }

    struct NoDelay;

    impl DelayUs for NoDelay {
        fn delay_us(&mut self, _us: u32) {}
    }

    fn bus(log: &Log) -> ShiftBus<LogPin<'_>, LogPin<'_>, NoDelay> {
        ShiftBus::new(
            LogPin {
                wire: Wire::Clk,
                log,
            },
            LogPin {
                wire: Wire::Data,
                log,
            },
            NoDelay,
        )
    }

    /// Data level at each rising clock edge, in order
    fn sampled_bits(log: &Log) -> heapless::Vec<bool, 64> {
        let mut clk = false;
        let mut data = false;
        let mut bits = heapless::Vec::new();
        for &(wire, high) in log.borrow().iter() {
            match wire {
                Wire::Clk => {
                    if high && !clk {
                        bits.push(data).unwrap();
                    }
                    clk = high;
                }
                Wire::Data => data = high,
            }
        }
        bits
    }

    fn final_levels(log: &Log) -> (bool, bool) {
        let mut clk = false;
        let mut data = false;
        for &(wire, high) in log.borrow().iter() {
            match wire {
                Wire::Clk => clk = high,
                Wire::Data => data = high,
            }
        }
        (clk, data)
    }

    #[test]
    fn test_shift_byte_is_msb_first() {
        let log = Log::default();
        bus(&log).shift_byte(0b1010_0001);

        let bits = sampled_bits(&log);
        assert_eq!(
            bits.as_slice(),
            &[true, false, true, false, false, false, false, true]
        );
    }

    #[test]
    fn test_flush_pulse_count_matches_frame_length() {
        for frame in [&[0x12u8][..], &[0x12, 0x34][..], &[0x12, 0x34, 0xAB][..]] {
            let log = Log::default();
            bus(&log).flush(frame);
            assert_eq!(sampled_bits(&log).len(), frame.len() * 8);
        }
    }

    #[test]
    fn test_flush_leaves_both_lines_low() {
        let log = Log::default();
        bus(&log).flush(&[0xFF, 0xFF]);

        assert_eq!(final_levels(&log), (false, false));
    }

    #[test]
    fn test_set_idle_drives_both_lines_low() {
        let log = Log::default();
        bus(&log).set_idle();

        assert_eq!(final_levels(&log), (false, false));
        assert!(sampled_bits(&log).is_empty());
    }
}
