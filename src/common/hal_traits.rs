// src/common/hal_traits.rs

use core::fmt::Debug;

/// Abstraction for the delay the driver needs (reset pulse).
///
/// With the `impl-native` feature, `HalDelay` provides this for any
/// `embedded_hal::delay::DelayNs`.
pub trait Cap1188Timer {
    /// Delay for at least the specified number of milliseconds.
    fn delay_ms(&mut self, ms: u32);
}

/// Blocking I2C transport.
pub trait I2cLink {
    /// Associated error type for bus errors.
    type Error: Debug;

    /// Checks that a device acknowledges `address`.
    ///
    /// Implementations usually issue an empty write.
    fn probe(&mut self, address: u8) -> Result<(), Self::Error>;

    /// Writes `bytes` in a single transaction.
    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error>;

    /// Writes `bytes`, then reads into `buffer` after a repeated start.
    fn write_read(&mut self, address: u8, bytes: &[u8], buffer: &mut [u8]) -> Result<(), Self::Error>;
}

/// Blocking SPI transport with its own chip select.
///
/// One call is one chip-select frame.
pub trait SpiLink {
    /// Associated error type for bus errors.
    type Error: Debug;

    /// Puts the link in its idle state. Called once from `begin`.
    fn begin(&mut self) -> Result<(), Self::Error>;

    /// Shifts out `bytes`, discarding whatever comes back.
    fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;

    /// Shifts out `bytes`, then clocks `buffer.len()` bytes back in the same frame.
    fn write_then_read(&mut self, bytes: &[u8], buffer: &mut [u8]) -> Result<(), Self::Error>;
}

/// The chip's RESET input. Active high.
pub trait ResetLine {
    type Error: Debug;

    fn set_low(&mut self) -> Result<(), Self::Error>;

    fn set_high(&mut self) -> Result<(), Self::Error>;
}
