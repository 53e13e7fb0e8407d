//! Application-wide constants and compile-time configuration.
//!
//! All geometry, timing parameters and pin assignments live here so they
//! can be tuned in one place. The per-game structs are handed to each game
//! at construction instead of being read from globals.

use core::f32::consts::PI;

// Display

/// SSD1306 panel width (pixels).
pub const DISPLAY_WIDTH: i32 = 128;

/// SSD1306 panel height (pixels).
pub const DISPLAY_HEIGHT: i32 = 64;

/// Firmware frame period (ms). One tick = sample inputs, draw, update.
pub const FRAME_PERIOD_MS: u64 = 60;

// Menu

/// Number of entries in the main menu.
pub const MENU_LENGTH: usize = 3;

// GPIO pin assignments (nRF52840-DK defaults)
//
// Buttons are active-low with internal pull-up. The logical numbering
// follows the first board revision (digital pins 2..6).
//
//   Button UP       (pin 2) → P0.11   menu next / snake left / paddle 1 up
//   Button DOWN     (pin 3) → P0.12   menu prev / snake right / paddle 1 down
//   Button ALT_UP   (pin 4) → P0.24   snake up / paddle 2 up
//   Button ALT_DOWN (pin 5) → P0.25   menu select / snake down / paddle 2 down
//   Button BACK     (pin 6) → P1.08   leave game
//   I²C SDA                 → P0.26
//   I²C SCL                 → P0.27

// Snake

/// Maximum number of body segments the snake can hold.
pub const SNAKE_CAPACITY: usize = 32;

/// Segments in a freshly initialised snake.
pub const SNAKE_START_LENGTH: usize = 4;

/// Cell grid used by Snake and its food.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GridConfig {
    /// Edge length of one cell (pixels).
    pub square_size: i32,
    /// Number of columns.
    pub grid_x: i32,
    /// Number of rows.
    pub grid_y: i32,
}

impl GridConfig {
    /// Grid that tiles a display of the given size with `square_size` cells.
    pub const fn for_display(width: i32, height: i32, square_size: i32) -> Self {
        Self {
            square_size,
            grid_x: width / square_size,
            grid_y: height / square_size,
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::for_display(DISPLAY_WIDTH, DISPLAY_HEIGHT, 4)
    }
}

// Pong

/// Pong playfield and physics parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PongConfig {
    pub field_width: i32,
    pub field_height: i32,
    pub paddle_width: i32,
    /// 16 px on the current board revision (24 px on the first one).
    pub paddle_height: i32,
    /// Pixels a paddle moves per tick while its button is held.
    pub paddle_speed: i32,
    /// X position of the left and right paddles.
    pub left_paddle_x: i32,
    pub right_paddle_x: i32,
    /// Serve speed; restored on every serve.
    pub ball_speed: i32,
    /// Speed added on each paddle hit.
    pub ball_speed_step: i32,
    /// Ball bounces when it comes within this many pixels of a wall.
    pub wall_margin: f32,
}

impl PongConfig {
    /// Highest y a paddle's top edge may reach.
    pub const fn paddle_max_y(&self) -> i32 {
        self.field_height - self.paddle_height
    }
}

impl Default for PongConfig {
    fn default() -> Self {
        Self {
            field_width: DISPLAY_WIDTH,
            field_height: DISPLAY_HEIGHT,
            paddle_width: 4,
            paddle_height: 16,
            paddle_speed: 4,
            left_paddle_x: 2,
            right_paddle_x: 122,
            ball_speed: 5,
            ball_speed_step: 1,
            wall_margin: 2.0,
        }
    }
}

// Cube

/// Projection and rendering parameters for the wireframe cube.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CubeConfig {
    /// Distance from the eye to the projection plane.
    pub focal_length: f32,
    /// Projected units → pixels.
    pub scale: f32,
    /// Screen position of the projected origin.
    pub origin_x: i32,
    pub origin_y: i32,
    /// Rotation applied per tick while a button is held (radians).
    pub step: f32,
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            focal_length: 5.0,
            scale: 10.0,
            origin_x: DISPLAY_WIDTH / 2,
            origin_y: DISPLAY_HEIGHT / 2,
            step: PI / 16.0,
        }
    }
}
