//! Per-tick button snapshot.
//!
//! The firmware samples every button once per frame into an
//! [`InputSnapshot`] and hands the same value to the menu and the active
//! game, so all consumers see one consistent view of the buttons. There is
//! no debouncing: a held button reads as pressed on every tick.

/// Logical buttons, in pin order (digital pins 2..6 on the first board revision).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Pin 2 - menu next, snake left, left paddle up, cube +Y.
    Up,
    /// Pin 3 - menu previous, snake right, left paddle down, cube -Y.
    Down,
    /// Pin 4 - snake up, right paddle up, cube +Z.
    AltUp,
    /// Pin 5 - menu select, snake down, right paddle down, cube -Z.
    AltDown,
    /// Pin 6 - leave the running game.
    Back,
}

impl Button {
    /// All buttons in pin order.
    pub const ALL: [Button; 5] = [
        Button::Up,
        Button::Down,
        Button::AltUp,
        Button::AltDown,
        Button::Back,
    ];

    const fn mask(self) -> u8 {
        1 << self as u8
    }
}

/// Which buttons were held when the frame was sampled.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputSnapshot {
    pressed: u8,
}

impl InputSnapshot {
    /// No buttons held.
    pub const fn empty() -> Self {
        Self { pressed: 0 }
    }

    /// Build from raw pin levels in [`Button::ALL`] order (`true` = held).
    pub fn from_levels(levels: [bool; 5]) -> Self {
        Button::ALL
            .iter()
            .zip(levels)
            .filter(|(_, held)| *held)
            .fold(Self::empty(), |snapshot, (button, _)| snapshot.with(*button))
    }

    /// Copy of this snapshot with `button` also held.
    pub const fn with(self, button: Button) -> Self {
        Self {
            pressed: self.pressed | button.mask(),
        }
    }

    pub const fn is_pressed(&self, button: Button) -> bool {
        self.pressed & button.mask() != 0
    }

    /// True if any button is held.
    pub const fn any(&self) -> bool {
        self.pressed != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_snapshot_has_nothing_pressed() {
        let input = InputSnapshot::empty();
        assert!(!input.any());
        for button in Button::ALL {
            assert!(!input.is_pressed(button));
        }
    }

    #[test]
    fn from_levels_maps_pins_in_order() {
        let input = InputSnapshot::from_levels([false, true, false, false, true]);
        assert!(!input.is_pressed(Button::Up));
        assert!(input.is_pressed(Button::Down));
        assert!(!input.is_pressed(Button::AltUp));
        assert!(!input.is_pressed(Button::AltDown));
        assert!(input.is_pressed(Button::Back));
    }

    #[test]
    fn with_accumulates_buttons() {
        let input = InputSnapshot::empty()
            .with(Button::AltUp)
            .with(Button::AltDown);
        assert!(input.any());
        assert!(input.is_pressed(Button::AltUp));
        assert!(input.is_pressed(Button::AltDown));
        assert_eq!(input, InputSnapshot::from_levels([false, false, true, true, false]));
    }
}
