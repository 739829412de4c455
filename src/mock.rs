// src/mock.rs

//! Test doubles shared by the unit tests: a register-level model of the chip
//! and I2C, SPI, pin, reset and timer mocks driving it.

use crate::bitbang::SoftSpiPins;
use crate::common::{
    frame::{SPI_READ_DATA, SPI_SET_ADDRESS, SPI_WRITE_DATA},
    hal_traits::{Cap1188Timer, I2cLink, ResetLine, SpiLink},
    registers::{Register, EXPECTED_MANUFACTURER_ID, EXPECTED_PRODUCT_ID, EXPECTED_REVISION},
};
use core::cell::RefCell;
use heapless::Vec;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MockBusError;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum SpiState {
    Idle,
    ExpectAddress,
    ExpectData,
}

/// Register file plus the chip's SPI command decoder.
#[derive(Debug, Clone)]
pub struct Cap1188Model {
    pub regs: [u8; 256],
    pointer: u8,
    state: SpiState,
    /// Byte the chip shifts out on the next SPI byte.
    out: u8,
    /// Number of writes that landed in each register.
    pub write_counts: [u8; 256],
}

impl Cap1188Model {
    pub fn new() -> Self {
        let mut regs = [0u8; 256];
        regs[Register::ProductId.addr() as usize] = EXPECTED_PRODUCT_ID;
        regs[Register::ManufacturerId.addr() as usize] = EXPECTED_MANUFACTURER_ID;
        regs[Register::Revision.addr() as usize] = EXPECTED_REVISION;
        Cap1188Model {
            regs,
            pointer: 0,
            state: SpiState::Idle,
            out: 0,
            write_counts: [0; 256],
        }
    }

    pub fn reg(&self, reg: Register) -> u8 {
        self.regs[reg.addr() as usize]
    }

    pub fn set_reg(&mut self, reg: Register, value: u8) {
        self.regs[reg.addr() as usize] = value;
    }

    fn store(&mut self, value: u8) {
        self.regs[self.pointer as usize] = value;
        self.write_counts[self.pointer as usize] += 1;
    }

    pub fn i2c_write(&mut self, bytes: &[u8]) {
        if let Some((reg, data)) = bytes.split_first() {
            self.pointer = *reg;
            for value in data {
                self.store(*value);
                self.pointer = self.pointer.wrapping_add(1);
            }
        }
    }

    pub fn i2c_read(&mut self, buffer: &mut [u8]) {
        for byte in buffer {
            *byte = self.regs[self.pointer as usize];
            self.pointer = self.pointer.wrapping_add(1);
        }
    }

    /// Feeds one byte received over SPI.
    pub fn spi_byte(&mut self, byte: u8) {
        self.state = match self.state {
            SpiState::ExpectAddress => {
                self.pointer = byte;
                SpiState::Idle
            }
            SpiState::ExpectData => {
                self.store(byte);
                SpiState::Idle
            }
            SpiState::Idle => match byte {
                SPI_SET_ADDRESS => SpiState::ExpectAddress,
                SPI_WRITE_DATA => SpiState::ExpectData,
                SPI_READ_DATA => {
                    self.out = self.regs[self.pointer as usize];
                    SpiState::Idle
                }
                _ => SpiState::Idle,
            },
        };
    }

    pub fn spi_out(&self) -> u8 {
        self.out
    }
}

/// I2C link answering on one address.
pub struct MockI2c {
    pub model: Cap1188Model,
    pub address: u8,
    pub writes: Vec<Vec<u8, 4>, 32>,
    pub fail: bool,
}

impl MockI2c {
    pub fn new(model: Cap1188Model, address: u8) -> Self {
        MockI2c { model, address, writes: Vec::new(), fail: false }
    }

    fn check(&self, address: u8) -> Result<(), MockBusError> {
        if self.fail || address != self.address {
            Err(MockBusError)
        } else {
            Ok(())
        }
    }
}

impl I2cLink for MockI2c {
    type Error = MockBusError;

    fn probe(&mut self, address: u8) -> Result<(), Self::Error> {
        self.check(address)
    }

    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        self.check(address)?;
        self.writes.push(Vec::from_slice(bytes).unwrap()).unwrap();
        self.model.i2c_write(bytes);
        Ok(())
    }

    fn write_read(&mut self, address: u8, bytes: &[u8], buffer: &mut [u8]) -> Result<(), Self::Error> {
        self.check(address)?;
        self.writes.push(Vec::from_slice(bytes).unwrap()).unwrap();
        self.model.i2c_write(bytes);
        self.model.i2c_read(buffer);
        Ok(())
    }
}

/// Byte-level SPI link.
pub struct MockSpi {
    pub model: Cap1188Model,
    pub frames: Vec<Vec<u8, 4>, 32>,
    pub began: bool,
    pub fail: bool,
}

impl MockSpi {
    pub fn new(model: Cap1188Model) -> Self {
        MockSpi { model, frames: Vec::new(), began: false, fail: false }
    }
}

impl SpiLink for MockSpi {
    type Error = MockBusError;

    fn begin(&mut self) -> Result<(), Self::Error> {
        if self.fail {
            return Err(MockBusError);
        }
        self.began = true;
        Ok(())
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        if self.fail {
            return Err(MockBusError);
        }
        self.frames.push(Vec::from_slice(bytes).unwrap()).unwrap();
        for byte in bytes {
            self.model.spi_byte(*byte);
        }
        Ok(())
    }

    fn write_then_read(&mut self, bytes: &[u8], buffer: &mut [u8]) -> Result<(), Self::Error> {
        self.write(bytes)?;
        for byte in buffer {
            *byte = self.model.spi_out();
            self.model.spi_byte(0xFF);
        }
        Ok(())
    }
}

/// Pin-level model of the chip's SPI port, for the software link.
///
/// MOSI is sampled on the rising clock edge, the bit counter advances on the
/// falling edge, and MISO presents the current output byte MSB first.
pub struct MockPins {
    pub model: Cap1188Model,
    clock: bool,
    mosi: bool,
    selected: bool,
    shift_in: u8,
    bit: u8,
    /// Bytes completed while selected.
    pub received: Vec<u8, 64>,
    pub selects: u32,
    pub deselects: u32,
    /// Rising edges seen while chip select was inactive.
    pub stray_edges: u32,
    /// Fail the clock pin after this many successful clock writes.
    pub fail_clock_after: Option<u32>,
    clock_writes: u32,
}

impl MockPins {
    pub fn new(model: Cap1188Model) -> Self {
        MockPins {
            model,
            clock: true,
            mosi: false,
            selected: false,
            shift_in: 0,
            bit: 0,
            received: Vec::new(),
            selects: 0,
            deselects: 0,
            stray_edges: 0,
            fail_clock_after: None,
            clock_writes: 0,
        }
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn clock_level(&self) -> bool {
        self.clock
    }
}

impl SoftSpiPins for MockPins {
    type Error = MockBusError;

    fn set_clock(&mut self, high: bool) -> Result<(), Self::Error> {
        if let Some(limit) = self.fail_clock_after {
            if self.clock_writes >= limit {
                return Err(MockBusError);
            }
        }
        self.clock_writes += 1;

        let rising = high && !self.clock;
        let falling = !high && self.clock;
        self.clock = high;

        if !self.selected {
            if rising {
                self.stray_edges += 1;
            }
            return Ok(());
        }
        if rising {
            self.shift_in = (self.shift_in << 1) | self.mosi as u8;
        }
        if falling {
            self.bit += 1;
            if self.bit == 8 {
                let byte = self.shift_in;
                self.received.push(byte).unwrap();
                self.model.spi_byte(byte);
                self.bit = 0;
                self.shift_in = 0;
            }
        }
        Ok(())
    }

    fn set_mosi(&mut self, high: bool) -> Result<(), Self::Error> {
        self.mosi = high;
        Ok(())
    }

    fn read_miso(&mut self) -> Result<bool, Self::Error> {
        Ok(self.model.spi_out() & (0x80 >> self.bit) != 0)
    }

    fn set_chip_select(&mut self, active: bool) -> Result<(), Self::Error> {
        if active && !self.selected {
            self.selects += 1;
            self.bit = 0;
            self.shift_in = 0;
        }
        if !active && self.selected {
            self.deselects += 1;
        }
        self.selected = active;
        Ok(())
    }
}

/// Reset line and delay events in call order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Event {
    ResetLow,
    ResetHigh,
    DelayMs(u32),
}

pub type EventLog = RefCell<Vec<Event, 32>>;

pub struct MockReset<'a> {
    pub log: &'a EventLog,
    pub fail: bool,
}

impl ResetLine for MockReset<'_> {
    type Error = MockBusError;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        if self.fail {
            return Err(MockBusError);
        }
        self.log.borrow_mut().push(Event::ResetLow).unwrap();
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        if self.fail {
            return Err(MockBusError);
        }
        self.log.borrow_mut().push(Event::ResetHigh).unwrap();
        Ok(())
    }
}

pub struct MockTimer<'a> {
    pub log: &'a EventLog,
}

impl Cap1188Timer for MockTimer<'_> {
    fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(Event::DelayMs(ms)).unwrap();
    }
}
