//! Display configuration
//!
//! Supplied by the host framework at construction time. Validation happens
//! before a driver instance exists; a bad config never produces a driver.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fewest digits a CT1642 module exposes
pub const MIN_LENGTH: u8 = 1;

/// Most digits the CT1642 can drive
pub const MAX_LENGTH: u8 = 4;

/// Default digit count
pub const DEFAULT_LENGTH: u8 = 4;

/// Default polling cadence in milliseconds
pub const DEFAULT_UPDATE_INTERVAL_MS: u32 = 20;

/// Configuration rejected before construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Digit count outside `MIN_LENGTH..=MAX_LENGTH`
    LengthOutOfRange,
}

/// Construction-time display configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Number of digits wired up (1-4)
    pub length: u8,
    /// Cadence the host scheduler invokes the update routine at.
    /// The scheduler owns the timing; the value is carried here so one
    /// config block describes the whole component.
    pub update_interval_ms: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            update_interval_ms: DEFAULT_UPDATE_INTERVAL_MS,
        }
    }
}

impl DisplayConfig {
    /// Config with a specific digit count and the default cadence
    pub const fn with_length(length: u8) -> Self {
        Self {
            length,
            update_interval_ms: DEFAULT_UPDATE_INTERVAL_MS,
        }
    }

    /// Check the config before constructing a driver
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.length < MIN_LENGTH || self.length > MAX_LENGTH {
            return Err(ConfigError::LengthOutOfRange);
        }
        Ok(())
    }
}
