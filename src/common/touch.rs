// src/common/touch.rs

use super::registers::CHANNEL_COUNT;

/// Contents of the Sensor Input Status register: bit `n` is set while channel
/// `n` (CS`n+1` on the package) is touched.
#[derive(Copy, Clone, Eq, PartialEq, Default, Debug)]
pub struct TouchMask(u8);

impl TouchMask {
    #[inline]
    pub const fn new(bits: u8) -> Self {
        TouchMask(bits)
    }

    #[inline]
    pub const fn bits(&self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn any(&self) -> bool {
        self.0 != 0
    }

    /// Channels outside 0..8 are never touched.
    #[inline]
    pub const fn is_touched(&self, channel: u8) -> bool {
        channel < CHANNEL_COUNT && self.0 & (1 << channel) != 0
    }

    #[inline]
    pub const fn count(&self) -> u32 {
        self.0.count_ones()
    }

    /// Touched channel numbers, lowest first.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..CHANNEL_COUNT).filter(move |ch| self.is_touched(*ch))
    }
}

impl From<u8> for TouchMask {
    fn from(value: u8) -> Self {
        TouchMask(value)
    }
}

impl From<TouchMask> for u8 {
    fn from(value: TouchMask) -> Self {
        value.0
    }
}
