//! Host-testable core of oled-arcade.
//!
//! Everything with actual logic lives here: the menu state machine, the
//! game dispatcher, and the Snake / Pong / 3D cube simulations. Hardware
//! is reached only through three seams:
//!
//! - [`canvas::Canvas`] - primitive drawing (lines, boxes, strings)
//! - [`input::InputSnapshot`] - buttons sampled once per frame
//! - [`rng::RandomSource`] - seedable uniform integers
//!
//! Usage: `cargo test --lib` (runs on the host, no board required).
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main].
//! This lib.rs is shared by the firmware and the host tests.

#![cfg_attr(not(test), no_std)]

// Must come first so the logging macros are visible to later modules.
mod fmt;

pub mod canvas;
pub mod config;
pub mod error;
pub mod games;
pub mod graphics;
pub mod input;
pub mod menu;
pub mod rng;

pub use canvas::Canvas;
pub use error::Error;
pub use games::{Game, GameHandler, GameId};
pub use input::{Button, InputSnapshot};
pub use menu::{Menu, MenuItem, MenuState, MENU_ITEMS};
pub use rng::{Prng, RandomSource};
