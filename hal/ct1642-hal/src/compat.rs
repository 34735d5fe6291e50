//! Adapters for `embedded-hal` 1.0 pins and delays
//!
//! Platform HALs that already expose `embedded-hal` types plug in through
//! these wrappers instead of implementing the crate traits by hand.

use crate::{DelayUs, OutputPin};

/// Drives an `embedded-hal` output pin as a bus line.
///
/// Write errors from the wrapped pin are discarded: a bit-banged frame
/// cannot be resumed from the middle, and the next scheduled flush
/// retransmits the whole buffer. Pins used for this bus are infallible on
/// every supported platform.
pub struct BridgePin<P> {
    pin: P,
}

impl<P> BridgePin<P>
where
    P: embedded_hal::digital::OutputPin,
{
    /// Wrap a pin already configured as an output
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Give the pin back to the caller
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P> OutputPin for BridgePin<P>
where
    P: embedded_hal::digital::OutputPin,
{
    fn set_level(&mut self, high: bool) {
        let _ = if high {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
    }
}

/// Wraps an `embedded-hal` delay source as a [`DelayUs`]
pub struct BridgeDelay<D> {
    delay: D,
}

impl<D> BridgeDelay<D>
where
    D: embedded_hal::delay::DelayNs,
{
    /// Wrap a delay implementation
    pub fn new(delay: D) -> Self {
        Self { delay }
    }
}

impl<D> DelayUs for BridgeDelay<D>
where
    D: embedded_hal::delay::DelayNs,
{
    fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }
}
