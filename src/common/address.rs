// src/common/address.rs

use super::error::Cap1188Error;
use core::convert::TryFrom;
use core::fmt;

/// A 7-bit I2C address for the CAP1188.
///
/// The chip answers on 0x28..=0x2D depending on the strapping of its ADDR_COMM
/// pin; 0x29 is the breakout default. Any 7-bit value is accepted so boards
/// behind address translators still work.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Cap1188Addr(u8);

impl Cap1188Addr {
    pub const DEFAULT_ADDRESS: Cap1188Addr = Cap1188Addr(0x29);

    /// Addresses selectable through the ADDR_COMM strapping resistor.
    pub const STRAPPED: [Cap1188Addr; 6] = [
        Cap1188Addr(0x28),
        Cap1188Addr(0x29),
        Cap1188Addr(0x2A),
        Cap1188Addr(0x2B),
        Cap1188Addr(0x2C),
        Cap1188Addr(0x2D),
    ];

    /// Creates a new `Cap1188Addr` if `address` fits in 7 bits.
    pub fn new(address: u8) -> Result<Self, Cap1188Error<()>> {
        if Self::is_valid(address) {
            Ok(Cap1188Addr(address))
        } else {
            Err(Cap1188Error::InvalidAddress(address))
        }
    }

    #[inline]
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    /// True if the address is one the chip can be strapped to.
    #[inline]
    pub const fn is_strapped(&self) -> bool {
        matches!(self.0, 0x28..=0x2D)
    }

    #[inline]
    pub const fn is_valid(address: u8) -> bool {
        address <= 0x7F
    }
}

impl Default for Cap1188Addr {
    fn default() -> Self {
        Self::DEFAULT_ADDRESS
    }
}

impl TryFrom<u8> for Cap1188Addr {
    type Error = Cap1188Error<()>;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Cap1188Addr> for u8 {
    fn from(value: Cap1188Addr) -> Self {
        value.0
    }
}

impl fmt::Display for Cap1188Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}
