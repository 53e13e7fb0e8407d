//! Drawing surface seam.
//!
//! Games and the menu only emit primitive draw calls through [`Canvas`];
//! pixel buffers and page flushing belong to the display driver.

/// Monochrome primitive drawing surface.
pub trait Canvas {
    /// Draw a one-pixel line between two points (inclusive).
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32);

    /// Draw a filled `w`×`h` box with its top-left corner at `(x, y)`.
    fn draw_box(&mut self, x: i32, y: i32, w: u32, h: u32);

    /// Draw `text` with its top-left corner at `(x, y)`.
    fn draw_str(&mut self, x: i32, y: i32, text: &str);

    /// Rendered width of `text` in pixels.
    fn str_width(&self, text: &str) -> u32;

    /// Surface width in pixels.
    fn width(&self) -> u32;

    /// Height of one text row in pixels.
    fn font_height(&self) -> u32;

    /// Draw subsequent primitives in background colour (`true`) or
    /// foreground colour (`false`).
    fn set_inverted(&mut self, inverted: bool);
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Canvas;

    /// One recorded primitive.
    #[derive(Clone, Debug, PartialEq)]
    pub enum DrawOp {
        Line(i32, i32, i32, i32),
        Box(i32, i32, u32, u32),
        Str(i32, i32, String, bool),
    }

    /// Records every primitive instead of rasterising it.
    /// Fixed 6-px glyphs and 10-px rows, like FONT_6X10.
    #[derive(Default)]
    pub struct Recorder {
        pub ops: Vec<DrawOp>,
        inverted: bool,
    }

    impl Recorder {
        pub fn lines(&self) -> impl Iterator<Item = &DrawOp> {
            self.ops.iter().filter(|op| matches!(op, DrawOp::Line(..)))
        }

        pub fn boxes(&self) -> impl Iterator<Item = &DrawOp> {
            self.ops.iter().filter(|op| matches!(op, DrawOp::Box(..)))
        }

        pub fn strings(&self) -> impl Iterator<Item = &DrawOp> {
            self.ops.iter().filter(|op| matches!(op, DrawOp::Str(..)))
        }
    }

    impl Canvas for Recorder {
        fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
            self.ops.push(DrawOp::Line(x0, y0, x1, y1));
        }

        fn draw_box(&mut self, x: i32, y: i32, w: u32, h: u32) {
            self.ops.push(DrawOp::Box(x, y, w, h));
        }

        fn draw_str(&mut self, x: i32, y: i32, text: &str) {
            self.ops.push(DrawOp::Str(x, y, text.to_string(), self.inverted));
        }

        fn str_width(&self, text: &str) -> u32 {
            text.len() as u32 * 6
        }

        fn width(&self) -> u32 {
            128
        }

        fn font_height(&self) -> u32 {
            10
        }

        fn set_inverted(&mut self, inverted: bool) {
            self.inverted = inverted;
        }
    }
}
