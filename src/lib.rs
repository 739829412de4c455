// src/lib.rs

//! Driver for the CAP1188 8-channel capacitive touch sensor.
//!
//! The chip is reached over I2C, a hardware SPI device or bit-banged SPI on
//! four GPIOs. Bus access goes through the small traits in
//! [`common::hal_traits`]; the `impl-native` and `impl-bitbang` features
//! provide embedded-hal 1.0 adapters for them.

#![no_std] // Specify no_std at the crate root

pub mod bitbang;
pub mod bus;
pub mod common;
pub mod driver;

#[cfg(any(feature = "impl-native", feature = "impl-bitbang"))]
pub mod native;

#[cfg(test)]
mod mock;

// Re-export key types for convenience
pub use bus::{Bus, BusError, NoBus};
pub use common::{BusKind, Cap1188Addr, Cap1188Error, Identity, Register, TouchMask};
pub use driver::{Cap1188, DriverError, NoReset};
