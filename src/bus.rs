// src/bus.rs

//! The tagged transport a driver instance owns.

use crate::common::{
    frame::{self, BusKind},
    hal_traits::{I2cLink, SpiLink},
    Cap1188Addr,
};
use core::convert::Infallible;
use core::fmt::Debug;

/// The one transport a driver talks over.
///
/// Only one variant is ever populated, so the other type parameter is filled
/// with [`NoBus`] by the driver's constructors.
#[derive(Debug)]
pub enum Bus<I2C, SPI> {
    I2c { link: I2C, address: Cap1188Addr },
    HardwareSpi(SPI),
    SoftwareSpi(SPI),
}

/// Error of whichever link a [`Bus`] holds.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum BusError<I2cE, SpiE> {
    /// The I2C link failed.
    I2c(I2cE),
    /// The SPI link failed.
    Spi(SpiE),
}

/// The [`BusError`] produced by a `Bus<I2C, SPI>`.
pub type LinkError<I2C, SPI> = BusError<<I2C as I2cLink>::Error, <SPI as SpiLink>::Error>;

impl<I2C, SPI> Bus<I2C, SPI> {
    pub fn kind(&self) -> BusKind {
        match self {
            Bus::I2c { .. } => BusKind::I2c,
            Bus::HardwareSpi(_) => BusKind::HardwareSpi,
            Bus::SoftwareSpi(_) => BusKind::SoftwareSpi,
        }
    }
}

impl<I2C, SPI> Bus<I2C, SPI>
where
    I2C: I2cLink,
    SPI: SpiLink,
{
    /// Brings the link up: probes the I2C address, or idles the SPI link.
    pub fn begin(&mut self) -> Result<(), LinkError<I2C, SPI>> {
        match self {
            Bus::I2c { link, address } => link.probe(address.as_u8()).map_err(BusError::I2c),
            Bus::HardwareSpi(link) | Bus::SoftwareSpi(link) => link.begin().map_err(BusError::Spi),
        }
    }

    pub fn read_register(&mut self, reg: u8) -> Result<u8, LinkError<I2C, SPI>> {
        let request = frame::read_request(self.kind(), reg);
        let mut buffer = [0u8; 1];
        match self {
            Bus::I2c { link, address } => link
                .write_read(address.as_u8(), &request, &mut buffer)
                .map_err(BusError::I2c)?,
            Bus::HardwareSpi(link) | Bus::SoftwareSpi(link) => link
                .write_then_read(&request, &mut buffer)
                .map_err(BusError::Spi)?,
        }
        Ok(buffer[0])
    }

    pub fn write_register(&mut self, reg: u8, value: u8) -> Result<(), LinkError<I2C, SPI>> {
        let request = frame::write_request(self.kind(), reg, value);
        match self {
            Bus::I2c { link, address } => link.write(address.as_u8(), &request).map_err(BusError::I2c),
            Bus::HardwareSpi(link) | Bus::SoftwareSpi(link) => link.write(&request).map_err(BusError::Spi),
        }
    }
}

/// Placeholder for the transport a driver does not use. It cannot be constructed.
#[derive(Debug)]
pub enum NoBus {}

impl I2cLink for NoBus {
    type Error = Infallible;

    fn probe(&mut self, _address: u8) -> Result<(), Self::Error> {
        match *self {}
    }

    fn write(&mut self, _address: u8, _bytes: &[u8]) -> Result<(), Self::Error> {
        match *self {}
    }

    fn write_read(&mut self, _address: u8, _bytes: &[u8], _buffer: &mut [u8]) -> Result<(), Self::Error> {
        match *self {}
    }
}

impl SpiLink for NoBus {
    type Error = Infallible;

    fn begin(&mut self) -> Result<(), Self::Error> {
        match *self {}
    }

    fn write(&mut self, _bytes: &[u8]) -> Result<(), Self::Error> {
        match *self {}
    }

    fn write_then_read(&mut self, _bytes: &[u8], _buffer: &mut [u8]) -> Result<(), Self::Error> {
        match *self {}
    }
}

impl<I2cE: Debug, SpiE: Debug> core::fmt::Display for BusError<I2cE, SpiE> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BusError::I2c(e) => write!(f, "I2C error: {e:?}"),
            BusError::Spi(e) => write!(f, "SPI error: {e:?}"),
        }
    }
}
