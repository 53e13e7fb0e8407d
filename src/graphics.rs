//! `embedded-graphics` backend for [`Canvas`].
//!
//! Wraps any `BinaryColor` draw target - the SSD1306 buffered driver on
//! target, `MockDisplay` in tests. Draw errors are dropped: a failed frame
//! is simply redrawn on the next tick.

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};

use crate::canvas::Canvas;

const FONT: &MonoFont<'static> = &FONT_6X10;

/// [`Canvas`] over an `embedded-graphics` draw target.
pub struct Surface<'a, D> {
    target: &'a mut D,
    color: BinaryColor,
}

impl<'a, D> Surface<'a, D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pub fn new(target: &'a mut D) -> Self {
        Self {
            target,
            color: BinaryColor::On,
        }
    }
}

impl<D> Canvas for Surface<'_, D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        let _ = Line::new(Point::new(x0, y0), Point::new(x1, y1))
            .into_styled(PrimitiveStyle::with_stroke(self.color, 1))
            .draw(&mut *self.target);
    }

    fn draw_box(&mut self, x: i32, y: i32, w: u32, h: u32) {
        let _ = Rectangle::new(Point::new(x, y), Size::new(w, h))
            .into_styled(PrimitiveStyle::with_fill(self.color))
            .draw(&mut *self.target);
    }

    fn draw_str(&mut self, x: i32, y: i32, text: &str) {
        let style = MonoTextStyle::new(FONT, self.color);
        let _ = Text::with_baseline(text, Point::new(x, y), style, Baseline::Top)
            .draw(&mut *self.target);
    }

    fn str_width(&self, text: &str) -> u32 {
        let glyphs = text.chars().count() as u32;
        glyphs * (FONT.character_size.width + FONT.character_spacing)
    }

    fn width(&self) -> u32 {
        self.target.bounding_box().size.width
    }

    fn font_height(&self) -> u32 {
        FONT.character_size.height
    }

    fn set_inverted(&mut self, inverted: bool) {
        self.color = if inverted {
            BinaryColor::Off
        } else {
            BinaryColor::On
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;

    fn display() -> MockDisplay<BinaryColor> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);
        display
    }

    #[test]
    fn draw_box_fills_pixels() {
        let mut display = display();
        let mut surface = Surface::new(&mut display);
        surface.draw_box(4, 8, 4, 4);

        assert_eq!(display.get_pixel(Point::new(4, 8)), Some(BinaryColor::On));
        assert_eq!(display.get_pixel(Point::new(7, 11)), Some(BinaryColor::On));
        assert_eq!(display.get_pixel(Point::new(8, 8)), None);
    }

    #[test]
    fn draw_line_covers_endpoints() {
        let mut display = display();
        Surface::new(&mut display).draw_line(0, 0, 10, 0);

        assert_eq!(display.get_pixel(Point::new(0, 0)), Some(BinaryColor::On));
        assert_eq!(display.get_pixel(Point::new(10, 0)), Some(BinaryColor::On));
        assert_eq!(display.get_pixel(Point::new(5, 1)), None);
    }

    #[test]
    fn inverted_draws_background_colour() {
        let mut display = display();
        let mut surface = Surface::new(&mut display);
        surface.draw_box(0, 0, 2, 2);
        surface.set_inverted(true);
        surface.draw_box(0, 0, 1, 1);

        assert_eq!(display.get_pixel(Point::new(0, 0)), Some(BinaryColor::Off));
        assert_eq!(display.get_pixel(Point::new(1, 1)), Some(BinaryColor::On));
    }

    #[test]
    fn text_metrics_follow_font() {
        let mut display = display();
        let surface = Surface::new(&mut display);
        assert_eq!(surface.str_width("Pong"), 24);
        assert_eq!(surface.str_width(""), 0);
        assert_eq!(surface.font_height(), 10);
        assert_eq!(surface.width(), 64);
    }
}
