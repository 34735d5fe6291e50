//! Hardware capability traits for the CT1642 display driver
//!
//! The CT1642 is driven over two GPIO output lines (clock and data). The
//! driver core never touches a platform HAL directly; it is written against
//! the two capabilities in this crate, which the host firmware implements
//! for its own pin and timer types.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Host firmware (owns pins + scheduler)  │
//! └─────────────────────────────────────────┘
//!                     │ implements
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  ct1642-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     ▲ consumed by
//!                     │
//! ┌─────────────────────────────────────────┐
//! │  ct1642-core (protocol + driver)        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - drive a line to a level
//! - [`delay::DelayUs`] - blocking microsecond delay
//!
//! With the `embedded-hal` feature, [`compat`] provides adapters for any
//! `embedded-hal` 1.0 output pin and delay implementation.

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod gpio;

#[cfg(feature = "embedded-hal")]
pub mod compat;

// Re-export key traits at crate root for convenience
pub use delay::DelayUs;
pub use gpio::OutputPin;

#[cfg(feature = "embedded-hal")]
pub use compat::{BridgeDelay, BridgePin};
