//! SSD1306 OLED display wrapper.

use oled_arcade::graphics::Surface;
use oled_arcade::{Error, Menu};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Create the SSD1306 driver in buffered-graphics mode.
pub fn new<I2C>(i2c: I2C) -> Display<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode()
}

/// Initialise the panel and blank the screen.
pub fn start<I2C>(display: &mut Display<I2C>) -> Result<(), Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    display.init().map_err(|_| Error::Display)?;
    display.clear_buffer();
    display.flush().map_err(|_| Error::Display)
}

/// Render one frame of the menu (or the running game) and push it out.
///
/// The whole 128×64 frame is composed in RAM, then sent in one transfer.
pub fn render<I2C>(display: &mut Display<I2C>, menu: &Menu) -> Result<(), Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();
    menu.draw(&mut Surface::new(display));
    display.flush().map_err(|_| Error::Display)
}
