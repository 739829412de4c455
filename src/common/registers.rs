// src/common/registers.rs

//! CAP1188 register map and the fixed values the driver writes or expects.

/// Registers touched by the driver.
///
/// Addresses are taken from the CAP1188 datasheet, section 5.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Register {
    /// Main Control. Power state and the INT status bit.
    Main = 0x00,
    /// Sensor Input Status. One bit per channel, set while touched.
    SensorInputStatus = 0x03,
    /// Multiple Touch Configuration.
    MultiTouchConfig = 0x2A,
    /// Standby Configuration. Averaging and cycle time while in standby.
    StandbyConfig = 0x41,
    /// Sensor Input LED Linking.
    LedLink = 0x72,
    /// LED Polarity.
    LedPolarity = 0x73,
    /// Product ID.
    ProductId = 0xFD,
    /// Manufacturer ID.
    ManufacturerId = 0xFE,
    /// Revision.
    Revision = 0xFF,
}

impl Register {
    #[inline]
    pub const fn addr(self) -> u8 {
        self as u8
    }
}

impl From<Register> for u8 {
    fn from(value: Register) -> Self {
        value.addr()
    }
}

// === Main Control bits ===

/// INT bit of the Main Control register. Set by the chip on a touch.
pub const MAIN_INT: u8 = 0x01;

// === Identity ===

pub const EXPECTED_PRODUCT_ID: u8 = 0x50;
pub const EXPECTED_MANUFACTURER_ID: u8 = 0x5D;
pub const EXPECTED_REVISION: u8 = 0x83;

// === Values written by `begin` ===

/// Multiple touch blocking disabled: any number of channels may report at once.
pub const MULTI_TOUCH_UNBLOCKED: u8 = 0x00;
/// Every LED follows its sensor input.
pub const LED_LINK_ALL: u8 = 0xFF;
/// Standby: averaging of 1 sample, 35 ms cycle time, summation off.
pub const STANDBY_FAST: u8 = 0x30;

/// Number of capacitive input channels.
pub const CHANNEL_COUNT: u8 = 8;

/// The three identity bytes read during `begin`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Identity {
    pub product_id: u8,
    pub manufacturer_id: u8,
    pub revision: u8,
}

impl Identity {
    pub const CAP1188: Identity = Identity {
        product_id: EXPECTED_PRODUCT_ID,
        manufacturer_id: EXPECTED_MANUFACTURER_ID,
        revision: EXPECTED_REVISION,
    };

    /// True if all three bytes match a CAP1188.
    #[inline]
    pub fn is_cap1188(&self) -> bool {
        *self == Self::CAP1188
    }
}
