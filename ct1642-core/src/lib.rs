//! Board-agnostic driver core for the CT1642 LED segment controller
//!
//! The CT1642 takes a two-wire (clock + data) bit-banged serial input and
//! drives up to four 7-segment digits. This crate contains everything that
//! does not depend on specific hardware:
//!
//! - Construction-time configuration and validation
//! - The segment buffer holding the intended display content
//! - The ASCII glyph table
//! - The bit-transfer protocol engine
//! - The polled update-cycle driver
//!
//! Pins and delays come in through the capability traits of `ct1642-hal`.
//! The host scheduler calls [`Ct1642::setup`] once, then [`Ct1642::update`]
//! every [`Ct1642::update_interval_ms`] milliseconds from a single execution
//! context.

#![no_std]
#![deny(unsafe_code)]

pub mod buffer;
pub mod charset;
pub mod config;
pub mod driver;
pub mod protocol;

// Re-export key types at crate root for convenience
pub use buffer::{SegmentBuffer, SegmentError, BLANK};
pub use config::{ConfigError, DisplayConfig};
pub use driver::Ct1642;
pub use protocol::ShiftBus;
