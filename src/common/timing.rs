// src/common/timing.rs

use core::time::Duration;

// === Reset (datasheet sec 4.3) ===

/// Hold time for each level of the reset pulse (low, high, low).
pub const RESET_HOLD: Duration = Duration::from_millis(100);

// === SPI ===

/// Clock the CAP1188 is driven at over SPI. Hardware buses should be set up to match.
pub const SPI_FREQUENCY_HZ: u32 = 2_000_000;
