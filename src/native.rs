// src/native.rs

//! Adapters from embedded-hal 1.0 traits to the driver's link traits.
//!
//! ```ignore
//! use cap1188::{native::{HalDelay, HalI2c, HalResetPin}, Cap1188, Cap1188Addr};
//!
//! let mut cap = Cap1188::new_i2c(HalI2c::new(i2c), Cap1188Addr::DEFAULT_ADDRESS, HalDelay::new(delay))
//!     .with_reset(HalResetPin::new(reset_pin));
//! cap.begin()?;
//! let touched = cap.touched_channels()?;
//! ```

use crate::common::hal_traits::{Cap1188Timer, ResetLine};

#[cfg(feature = "impl-native")]
use crate::common::hal_traits::{I2cLink, SpiLink};
#[cfg(feature = "impl-native")]
use embedded_hal::{i2c::I2c, spi::SpiDevice};
use embedded_hal::{delay::DelayNs, digital::OutputPin};

/// SPI mode the CAP1188 expects from a hardware bus.
#[cfg(feature = "impl-native")]
pub const SPI_MODE: embedded_hal::spi::Mode = embedded_hal::spi::MODE_0;

/// [`I2cLink`] over an `embedded_hal::i2c::I2c` bus.
#[cfg(feature = "impl-native")]
#[derive(Debug)]
pub struct HalI2c<I> {
    i2c: I,
}

#[cfg(feature = "impl-native")]
impl<I: I2c> HalI2c<I> {
    pub fn new(i2c: I) -> Self {
        HalI2c { i2c }
    }

    pub fn release(self) -> I {
        self.i2c
    }
}

#[cfg(feature = "impl-native")]
impl<I: I2c> I2cLink for HalI2c<I> {
    type Error = I::Error;

    fn probe(&mut self, address: u8) -> Result<(), Self::Error> {
        self.i2c.write(address, &[])
    }

    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        self.i2c.write(address, bytes)
    }

    fn write_read(&mut self, address: u8, bytes: &[u8], buffer: &mut [u8]) -> Result<(), Self::Error> {
        self.i2c.write_read(address, bytes, buffer)
    }
}

/// [`SpiLink`] over an `embedded_hal::spi::SpiDevice`, which owns chip select.
///
/// Configure the bus for [`SPI_MODE`] at
/// [`SPI_FREQUENCY_HZ`](crate::common::timing::SPI_FREQUENCY_HZ).
#[cfg(feature = "impl-native")]
#[derive(Debug)]
pub struct HalSpi<S> {
    spi: S,
}

#[cfg(feature = "impl-native")]
impl<S: SpiDevice> HalSpi<S> {
    pub fn new(spi: S) -> Self {
        HalSpi { spi }
    }

    pub fn release(self) -> S {
        self.spi
    }
}

#[cfg(feature = "impl-native")]
impl<S: SpiDevice> SpiLink for HalSpi<S> {
    type Error = S::Error;

    fn begin(&mut self) -> Result<(), Self::Error> {
        // SpiDevice is ready once constructed.
        Ok(())
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.spi.write(bytes)
    }

    fn write_then_read(&mut self, bytes: &[u8], buffer: &mut [u8]) -> Result<(), Self::Error> {
        buffer.fill(0xFF);
        self.spi.transaction(&mut [
            embedded_hal::spi::Operation::Write(bytes),
            embedded_hal::spi::Operation::TransferInPlace(buffer),
        ])
    }
}

/// [`ResetLine`] over an `OutputPin`.
#[derive(Debug)]
pub struct HalResetPin<P> {
    pin: P,
}

impl<P: OutputPin> HalResetPin<P> {
    pub fn new(pin: P) -> Self {
        HalResetPin { pin }
    }

    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> ResetLine for HalResetPin<P> {
    type Error = P::Error;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.pin.set_low()
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.pin.set_high()
    }
}

/// [`Cap1188Timer`] over a `DelayNs` provider.
#[derive(Debug)]
pub struct HalDelay<D> {
    delay: D,
}

impl<D: DelayNs> HalDelay<D> {
    pub fn new(delay: D) -> Self {
        HalDelay { delay }
    }

    pub fn release(self) -> D {
        self.delay
    }
}

impl<D: DelayNs> Cap1188Timer for HalDelay<D> {
    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}

#[cfg(feature = "impl-bitbang")]
pub use self::bitbang_pins::HalSoftSpiPins;

#[cfg(feature = "impl-bitbang")]
mod bitbang_pins {
    use crate::bitbang::SoftSpiPins;
    use embedded_hal::digital::{Error, ErrorKind, InputPin, OutputPin, PinState};

    /// Clock, MISO, MOSI and chip-select GPIOs for the software SPI link.
    ///
    /// Pin errors are reduced to their `ErrorKind` since each line may be a
    /// different type.
    #[derive(Debug)]
    pub struct HalSoftSpiPins<CLK, MISO, MOSI, CS> {
        pub clk: CLK,
        pub miso: MISO,
        pub mosi: MOSI,
        pub cs: CS,
    }

    impl<CLK, MISO, MOSI, CS> HalSoftSpiPins<CLK, MISO, MOSI, CS>
    where
        CLK: OutputPin,
        MISO: InputPin,
        MOSI: OutputPin,
        CS: OutputPin,
    {
        pub fn new(clk: CLK, miso: MISO, mosi: MOSI, cs: CS) -> Self {
            HalSoftSpiPins { clk, miso, mosi, cs }
        }
    }

    impl<CLK, MISO, MOSI, CS> SoftSpiPins for HalSoftSpiPins<CLK, MISO, MOSI, CS>
    where
        CLK: OutputPin,
        MISO: InputPin,
        MOSI: OutputPin,
        CS: OutputPin,
    {
        type Error = ErrorKind;

        fn set_clock(&mut self, high: bool) -> Result<(), Self::Error> {
            self.clk.set_state(PinState::from(high)).map_err(|e| e.kind())
        }

        fn set_mosi(&mut self, high: bool) -> Result<(), Self::Error> {
            self.mosi.set_state(PinState::from(high)).map_err(|e| e.kind())
        }

        fn read_miso(&mut self) -> Result<bool, Self::Error> {
            self.miso.is_high().map_err(|e| e.kind())
        }

        fn set_chip_select(&mut self, active: bool) -> Result<(), Self::Error> {
            self.cs.set_state(PinState::from(!active)).map_err(|e| e.kind())
        }
    }
}
