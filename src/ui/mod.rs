//! Firmware user interface - SSD1306 OLED + physical buttons.
//!
//! The main loop samples the buttons into an `InputSnapshot`, renders the
//! menu (or the running game) into the display buffer and flushes it.
//!
//! ## Components
//!
//! - **Display**: SSD1306 128×64 OLED via I²C
//! - **Buttons**: 5 tactile switches, polled once per frame (no debouncing)

pub mod buttons;
pub mod display;
