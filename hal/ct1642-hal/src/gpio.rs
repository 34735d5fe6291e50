//! GPIO output capability
//!
//! The bus protocol needs exactly one thing from a pin: drive it to a level.
//! Pin construction, direction setup, and multiplexing stay with the platform
//! HAL that owns the pin; a handle is expected to already be configured as an
//! output when it is moved into the driver.

/// Digital output line
///
/// `set_level` is side-effecting only and does not fail: once a handle is
/// owned by the driver there is no uninitialized state left to detect.
/// Protocol correctness depends entirely on call ordering and timing, both
/// of which the caller owns.
pub trait OutputPin {
    /// Drive the line to the given level (`true` = high)
    fn set_level(&mut self, high: bool);

    /// Drive the line high
    fn set_high(&mut self) {
        self.set_level(true);
    }

    /// Drive the line low
    fn set_low(&mut self) {
        self.set_level(false);
    }
}
