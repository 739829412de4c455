// src/common/error.rs

/// Errors reported by the CAP1188 driver.
///
/// `E` is the error of the underlying bus. Validation helpers that never touch
/// the bus use the default `E = ()`.
#[derive(Debug, thiserror::Error)]
pub enum Cap1188Error<E = ()>
where
    E: core::fmt::Debug,
{
    /// A register transfer failed on the bus.
    #[error("I/O error: {0:?}")]
    Io(E),

    /// The bus could not be brought up, or no device answered at the address.
    #[error("Bus initialization failed: {0:?}")]
    BusInit(E),

    /// Driving the reset line failed.
    #[error("Reset line could not be driven")]
    ResetLine,

    /// The identity registers do not describe a CAP1188.
    #[error(
        "Unexpected identity: product {product_id:#04x}, manufacturer {manufacturer_id:#04x}, revision {revision:#04x}"
    )]
    IdentityMismatch {
        product_id: u8,
        manufacturer_id: u8,
        revision: u8,
    },

    /// Not a 7-bit I2C address.
    #[error("Invalid I2C address: {0:#04x}")]
    InvalidAddress(u8),
}

impl<E: core::fmt::Debug> Cap1188Error<E> {
    /// True for failures that came from the bus rather than the device contents.
    pub fn is_bus_error(&self) -> bool {
        matches!(self, Cap1188Error::Io(_) | Cap1188Error::BusInit(_))
    }
}
