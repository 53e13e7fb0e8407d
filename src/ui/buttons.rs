//! GPIO button polling.
//!
//! Five buttons (active-low with internal pull-up), see `config.rs` for
//! the pin map. All pins are read once per frame into a single
//! `InputSnapshot`; a held button reads as pressed on every frame.

use embassy_nrf::gpio::Input;
use oled_arcade::InputSnapshot;

/// The five button inputs, in `Button::ALL` order.
pub struct Buttons<'d> {
    pins: [Input<'d>; 5],
}

impl<'d> Buttons<'d> {
    pub fn new(pins: [Input<'d>; 5]) -> Self {
        Self { pins }
    }

    /// Sample every button once.
    pub fn sample(&self) -> InputSnapshot {
        let mut levels = [false; 5];
        for (level, pin) in levels.iter_mut().zip(self.pins.iter()) {
            *level = pin.is_low();
        }
        InputSnapshot::from_levels(levels)
    }
}
