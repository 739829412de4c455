// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod address;
pub mod error;
pub mod frame;
pub mod hal_traits;
pub mod registers;
pub mod timing;
pub mod touch;

// --- Re-export key types/traits for easier access ---

// From address.rs
pub use address::Cap1188Addr;

// From error.rs
pub use error::Cap1188Error;

// From frame.rs
pub use frame::BusKind;

// From hal_traits.rs
pub use hal_traits::{Cap1188Timer, I2cLink, ResetLine, SpiLink};

// From registers.rs (constants stay under common::registers::*)
pub use registers::{Identity, Register};

// From touch.rs
pub use touch::TouchMask;

// timing.rs constants are reached through common::timing::*
