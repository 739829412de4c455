// src/bitbang.rs

//! Software SPI over four GPIO lines.
//!
//! SPI mode 0, MSB first: MOSI is set while the clock is low, the chip samples
//! it on the rising edge, and MISO is read back before the clock falls again.

use crate::common::hal_traits::SpiLink;
use core::fmt::Debug;

/// The four lines a [`SoftSpi`] toggles.
///
/// With the `impl-bitbang` feature, `HalSoftSpiPins` implements this for
/// embedded-hal `OutputPin`/`InputPin` types.
pub trait SoftSpiPins {
    type Error: Debug;

    fn set_clock(&mut self, high: bool) -> Result<(), Self::Error>;

    fn set_mosi(&mut self, high: bool) -> Result<(), Self::Error>;

    fn read_miso(&mut self) -> Result<bool, Self::Error>;

    /// `active` pulls chip select low.
    fn set_chip_select(&mut self, active: bool) -> Result<(), Self::Error>;
}

/// A bit-banged [`SpiLink`].
///
/// No delay is inserted between edges; at the chip's 2 MHz rating the half
/// period is below a microsecond, and pin writes on a typical MCU are slower.
#[derive(Debug)]
pub struct SoftSpi<P> {
    pins: P,
}

impl<P: SoftSpiPins> SoftSpi<P> {
    pub fn new(pins: P) -> Self {
        SoftSpi { pins }
    }

    /// Returns the pins.
    pub fn release(self) -> P {
        self.pins
    }

    fn transfer_byte(&mut self, out: u8) -> Result<u8, P::Error> {
        let mut input = 0u8;
        for bit in (0..8).rev() {
            self.pins.set_mosi(out & (1 << bit) != 0)?;
            self.pins.set_clock(true)?;
            if self.pins.read_miso()? {
                input |= 1 << bit;
            }
            self.pins.set_clock(false)?;
        }
        Ok(input)
    }

    /// Runs `body` with chip select asserted. Chip select is released even if
    /// `body` fails; the first error wins.
    fn frame<F>(&mut self, body: F) -> Result<(), P::Error>
    where
        F: FnOnce(&mut Self) -> Result<(), P::Error>,
    {
        self.pins.set_clock(false)?;
        self.pins.set_chip_select(true)?;

        let result = body(self);

        let release = self.pins.set_chip_select(false);
        if result.is_err() {
            log::warn!("Soft SPI frame aborted, chip select released");
        }
        result?;
        release
    }
}

impl<P: SoftSpiPins> SpiLink for SoftSpi<P> {
    type Error = P::Error;

    fn begin(&mut self) -> Result<(), Self::Error> {
        self.pins.set_chip_select(false)?;
        self.pins.set_clock(false)?;
        self.pins.set_mosi(false)
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.frame(|spi| {
            for byte in bytes {
                spi.transfer_byte(*byte)?;
            }
            Ok(())
        })
    }

    fn write_then_read(&mut self, bytes: &[u8], buffer: &mut [u8]) -> Result<(), Self::Error> {
        self.frame(|spi| {
            for byte in bytes {
                spi.transfer_byte(*byte)?;
            }
            for slot in buffer.iter_mut() {
                *slot = spi.transfer_byte(0xFF)?;
            }
            Ok(())
        })
    }
}
