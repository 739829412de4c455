// src/common/frame.rs

//! Request framing for the two CAP1188 transports.
//!
//! Over I2C the register pointer travels as the first written byte. Over SPI
//! every request is wrapped in command bytes: `0x7D` sets the address pointer,
//! `0x7E` writes the following byte and `0x7F` reads one byte back.

use arrayvec::ArrayVec;

/// SPI command: set address pointer.
pub const SPI_SET_ADDRESS: u8 = 0x7D;
/// SPI command: write data.
pub const SPI_WRITE_DATA: u8 = 0x7E;
/// SPI command: read data.
pub const SPI_READ_DATA: u8 = 0x7F;

/// Longest request any transport emits (SPI write).
pub const MAX_FRAME_LEN: usize = 4;

pub type Frame = ArrayVec<u8, MAX_FRAME_LEN>;

/// Which transport a driver instance talks over.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BusKind {
    /// I2C, bytes addressed to the device's 7-bit address.
    I2c,
    /// A hardware SPI peripheral.
    HardwareSpi,
    /// GPIO bit-banged SPI.
    SoftwareSpi,
}

impl BusKind {
    #[inline]
    pub const fn is_spi(self) -> bool {
        matches!(self, BusKind::HardwareSpi | BusKind::SoftwareSpi)
    }
}

/// Bytes written before the single-byte read of `reg`.
pub fn read_request(kind: BusKind, reg: u8) -> Frame {
    let mut frame = Frame::new();
    if kind.is_spi() {
        frame.push(SPI_SET_ADDRESS);
        frame.push(reg);
        frame.push(SPI_READ_DATA);
    } else {
        frame.push(reg);
    }
    frame
}

/// Bytes that store `value` into `reg`.
pub fn write_request(kind: BusKind, reg: u8, value: u8) -> Frame {
    let mut frame = Frame::new();
    if kind.is_spi() {
        frame.push(SPI_SET_ADDRESS);
        frame.push(reg);
        frame.push(SPI_WRITE_DATA);
        frame.push(value);
    } else {
        frame.push(reg);
        frame.push(value);
    }
    frame
}
