// src/driver.rs

use crate::bitbang::{SoftSpi, SoftSpiPins};
use crate::bus::{Bus, LinkError, NoBus};
use crate::common::{
    frame::BusKind,
    hal_traits::{Cap1188Timer, I2cLink, ResetLine, SpiLink},
    registers::{self, Identity, Register},
    timing, Cap1188Addr, Cap1188Error, TouchMask,
};
use core::convert::Infallible;
use core::fmt::Debug;

/// The error every driver operation returns for a given pair of links.
pub type DriverError<I2C, SPI> = Cap1188Error<LinkError<I2C, SPI>>;

/// Driver for one CAP1188.
///
/// The transport is fixed at construction (`new_i2c`, `new_hardware_spi` or
/// `new_software_spi`); an optional reset line is attached with
/// [`with_reset`](Cap1188::with_reset). Call [`begin`](Cap1188::begin) before
/// polling touches.
#[derive(Debug)]
pub struct Cap1188<I2C, SPI, RST, T> {
    bus: Bus<I2C, SPI>,
    reset: Option<RST>,
    timer: T,
}

/// Reset line type of a driver built without one.
#[derive(Debug)]
pub enum NoReset {}

impl ResetLine for NoReset {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        match *self {}
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        match *self {}
    }
}

impl<I2C, T> Cap1188<I2C, NoBus, NoReset, T> {
    /// A driver talking I2C to `address`.
    pub fn new_i2c(link: I2C, address: Cap1188Addr, timer: T) -> Self {
        Cap1188 {
            bus: Bus::I2c { link, address },
            reset: None,
            timer,
        }
    }
}

impl<SPI, T> Cap1188<NoBus, SPI, NoReset, T> {
    /// A driver on a hardware SPI link. The link owns chip select and should
    /// run at 2 MHz, mode 0, MSB first.
    pub fn new_hardware_spi(link: SPI, timer: T) -> Self {
        Cap1188 {
            bus: Bus::HardwareSpi(link),
            reset: None,
            timer,
        }
    }
}

impl<P: SoftSpiPins, T> Cap1188<NoBus, SoftSpi<P>, NoReset, T> {
    /// A driver bit-banging SPI over `pins`.
    pub fn new_software_spi(pins: P, timer: T) -> Self {
        Cap1188 {
            bus: Bus::SoftwareSpi(SoftSpi::new(pins)),
            reset: None,
            timer,
        }
    }
}

impl<I2C, SPI, RST, T> Cap1188<I2C, SPI, RST, T> {
    /// Attaches the line wired to the chip's RESET input. `begin` will pulse it.
    pub fn with_reset<R>(self, pin: R) -> Cap1188<I2C, SPI, R, T> {
        Cap1188 {
            bus: self.bus,
            reset: Some(pin),
            timer: self.timer,
        }
    }

    pub fn bus_kind(&self) -> BusKind {
        self.bus.kind()
    }

    /// Gives back the bus, the reset line (if any) and the timer.
    pub fn release(self) -> (Bus<I2C, SPI>, Option<RST>, T) {
        (self.bus, self.reset, self.timer)
    }
}

impl<I2C, SPI, RST, T> Cap1188<I2C, SPI, RST, T>
where
    I2C: I2cLink,
    SPI: SpiLink,
    RST: ResetLine,
    T: Cap1188Timer,
{
    /// Brings up the bus, resets the chip, checks its identity and applies
    /// the default configuration.
    ///
    /// The configuration allows any number of simultaneous touches, links
    /// every LED to its input and shortens the standby cycle.
    pub fn begin(&mut self) -> Result<(), DriverError<I2C, SPI>> {
        if let Err(err) = self.bus.begin() {
            log::warn!("CAP1188 {:?} bring-up failed: {err:?}", self.bus.kind());
            return Err(Cap1188Error::BusInit(err));
        }

        self.pulse_reset()?;

        // First read after reset is discarded.
        self.read_register(Register::ProductId.addr())?;

        let identity = self.read_identity()?;
        log::debug!(
            "CAP1188 product {:#04x}, manufacturer {:#04x}, revision {:#04x}",
            identity.product_id,
            identity.manufacturer_id,
            identity.revision
        );
        if !identity.is_cap1188() {
            log::warn!("Device is not a CAP1188: {identity:?}");
            return Err(Cap1188Error::IdentityMismatch {
                product_id: identity.product_id,
                manufacturer_id: identity.manufacturer_id,
                revision: identity.revision,
            });
        }

        self.write_register(Register::MultiTouchConfig.addr(), registers::MULTI_TOUCH_UNBLOCKED)?;
        self.write_register(Register::LedLink.addr(), registers::LED_LINK_ALL)?;
        self.write_register(Register::StandbyConfig.addr(), registers::STANDBY_FAST)?;
        log::debug!("CAP1188 configured over {:?}", self.bus.kind());

        Ok(())
    }

    pub fn read_register(&mut self, reg: u8) -> Result<u8, DriverError<I2C, SPI>> {
        self.bus.read_register(reg).map_err(Cap1188Error::Io)
    }

    pub fn write_register(&mut self, reg: u8, value: u8) -> Result<(), DriverError<I2C, SPI>> {
        self.bus.write_register(reg, value).map_err(Cap1188Error::Io)
    }

    /// Reads the product, manufacturer and revision registers.
    pub fn read_identity(&mut self) -> Result<Identity, DriverError<I2C, SPI>> {
        Ok(Identity {
            product_id: self.read_register(Register::ProductId.addr())?,
            manufacturer_id: self.read_register(Register::ManufacturerId.addr())?,
            revision: self.read_register(Register::Revision.addr())?,
        })
    }

    /// Returns the Sensor Input Status byte, one bit per touched channel.
    ///
    /// When any bit is set the INT flag in Main Control is cleared so the
    /// chip can report the next touch.
    pub fn touched(&mut self) -> Result<u8, DriverError<I2C, SPI>> {
        let status = self.read_register(Register::SensorInputStatus.addr())?;
        if status != 0 {
            self.clear_interrupt()?;
        }
        Ok(status)
    }

    /// [`touched`](Cap1188::touched) as a [`TouchMask`].
    pub fn touched_channels(&mut self) -> Result<TouchMask, DriverError<I2C, SPI>> {
        self.touched().map(TouchMask::new)
    }

    /// Clears the INT bit of Main Control, leaving the other bits alone.
    pub fn clear_interrupt(&mut self) -> Result<(), DriverError<I2C, SPI>> {
        let main = self.read_register(Register::Main.addr())?;
        self.write_register(Register::Main.addr(), main & !registers::MAIN_INT)
    }

    /// Writes the LED Polarity register.
    ///
    /// Bit `n` controls LED `n`: 0 (the power-on value) drives it inverted,
    /// 1 non-inverted.
    pub fn set_led_polarity(&mut self, inverted: u8) -> Result<(), DriverError<I2C, SPI>> {
        self.write_register(Register::LedPolarity.addr(), inverted)
    }

    fn pulse_reset(&mut self) -> Result<(), DriverError<I2C, SPI>> {
        let Some(pin) = self.reset.as_mut() else {
            return Ok(());
        };
        let hold = timing::RESET_HOLD.as_millis() as u32;
        let failed = reset_failed::<RST::Error, LinkError<I2C, SPI>>;

        pin.set_low().map_err(failed)?;
        self.timer.delay_ms(hold);
        pin.set_high().map_err(failed)?;
        self.timer.delay_ms(hold);
        pin.set_low().map_err(failed)?;
        self.timer.delay_ms(hold);
        Ok(())
    }
}

fn reset_failed<P: Debug, E: Debug>(err: P) -> Cap1188Error<E> {
    log::warn!("CAP1188 reset line failed: {err:?}");
    Cap1188Error::ResetLine
}
