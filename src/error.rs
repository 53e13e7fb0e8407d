//! Unified error type for oled-arcade.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.

use core::fmt;

/// Top-level error type used across the library and firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Dispatch
    /// A game id outside the known set was requested.
    UnknownGame(u8),

    // Snake
    /// The snake body is at capacity and cannot grow.
    SnakeFull,

    // UI / Display
    /// I²C transaction to the display failed.
    Display,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownGame(id) => write!(f, "unknown game id {}", id),
            Error::SnakeFull => f.write_str("snake body at capacity"),
            Error::Display => f.write_str("display transfer failed"),
        }
    }
}
