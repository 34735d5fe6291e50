//! Blocking microsecond delay capability
//!
//! The CT1642 latches a bit on each rising clock edge and requires the data
//! and clock levels to be held for a minimum pulse width. Implementations
//! must block (busy-wait or hard sleep) rather than yield: a suspension
//! point inside a frame adds jitter that can corrupt the bit stream.

/// Blocking microsecond-scale delay source
pub trait DelayUs {
    /// Block for at least `us` microseconds
    fn delay_us(&mut self, us: u32);
}
