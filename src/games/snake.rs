//! Grid Snake.
//!
//! The body is an ordered, fixed-capacity sequence of cells with the head
//! at index 0. Each tick the whole body shifts back by one cell and a new
//! head is placed one step along the current velocity. Leaving the grid
//! wraps to the opposite edge; there is no death state.

use heapless::Vec;

use super::Game;
use crate::canvas::Canvas;
use crate::config::{GridConfig, SNAKE_CAPACITY, SNAKE_START_LENGTH};
use crate::error::Error;
use crate::input::{Button, InputSnapshot};
use crate::rng::RandomSource;

/// One grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SnakePart {
    pub x: i32,
    pub y: i32,
}

impl SnakePart {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

fn draw_cell(canvas: &mut dyn Canvas, grid: &GridConfig, cell: SnakePart) {
    let size = grid.square_size;
    canvas.draw_box(cell.x * size, cell.y * size, size as u32, size as u32);
}

/// The single food cell.
pub struct Food {
    grid: GridConfig,
    cell: SnakePart,
}

impl Food {
    /// Place food on a random cell.
    pub fn new(grid: GridConfig, rng: &mut dyn RandomSource) -> Self {
        Self {
            grid,
            cell: Self::random_cell(&grid, rng),
        }
    }

    /// Move to a random cell different from the current one.
    pub fn regenerate(&mut self, rng: &mut dyn RandomSource) {
        if self.grid.grid_x * self.grid.grid_y <= 1 {
            return;
        }
        let old = self.cell;
        while self.cell == old {
            self.cell = Self::random_cell(&self.grid, rng);
        }
    }

    pub fn cell(&self) -> SnakePart {
        self.cell
    }

    fn random_cell(grid: &GridConfig, rng: &mut dyn RandomSource) -> SnakePart {
        let x = rng.random(grid.grid_x as u32) as i32;
        let y = rng.random(grid.grid_y as u32) as i32;
        SnakePart::new(x, y)
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        draw_cell(canvas, &self.grid, self.cell);
    }
}

pub struct Snake {
    grid: GridConfig,
    body: Vec<SnakePart, SNAKE_CAPACITY>,
    food: Food,
    x_vel: i32,
    y_vel: i32,
}

impl Snake {
    pub fn new(grid: GridConfig, rng: &mut dyn RandomSource) -> Self {
        let mut snake = Self {
            grid,
            body: Vec::new(),
            food: Food::new(grid, rng),
            x_vel: 1,
            y_vel: 0,
        };
        snake.reset_body();
        snake
    }

    /// Active segments, head first.
    pub fn body(&self) -> &[SnakePart] {
        &self.body
    }

    pub fn head(&self) -> SnakePart {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn velocity(&self) -> (i32, i32) {
        (self.x_vel, self.y_vel)
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    /// Horizontal line along the top row, head at x = 3, moving right.
    fn reset_body(&mut self) {
        self.body.clear();
        for x in (0..SNAKE_START_LENGTH as i32).rev() {
            let _ = self.body.push(SnakePart::new(x, 0));
        }
        self.x_vel = 1;
        self.y_vel = 0;
    }

    /// Append a copy of the tail segment. Refused at capacity.
    pub fn grow(&mut self) -> Result<(), Error> {
        let tail = self.body[self.body.len() - 1];
        self.body.push(tail).map_err(|_| Error::SnakeFull)
    }

    /// Change heading from the buttons; a 180° turn is ignored.
    fn steer(&mut self, input: InputSnapshot) {
        if input.is_pressed(Button::Up) && self.x_vel != 1 {
            (self.x_vel, self.y_vel) = (-1, 0);
        } else if input.is_pressed(Button::Down) && self.x_vel != -1 {
            (self.x_vel, self.y_vel) = (1, 0);
        } else if input.is_pressed(Button::AltUp) && self.y_vel != 1 {
            (self.x_vel, self.y_vel) = (0, -1);
        } else if input.is_pressed(Button::AltDown) && self.y_vel != -1 {
            (self.x_vel, self.y_vel) = (0, 1);
        }
    }

    /// Shift the body back one cell and step the head, wrapping at the
    /// grid edges (`x < 0 → grid_x - 1`, `x >= grid_x → 0`, same for y).
    fn advance(&mut self) {
        let head = self.head();
        self.body.rotate_right(1);
        self.body[0] = SnakePart::new(
            (head.x + self.x_vel).rem_euclid(self.grid.grid_x),
            (head.y + self.y_vel).rem_euclid(self.grid.grid_y),
        );
    }
}

impl Game for Snake {
    fn init(&mut self, _rng: &mut dyn RandomSource) {
        info!("snake: init");
        self.reset_body();
    }

    fn update(&mut self, input: InputSnapshot, rng: &mut dyn RandomSource) {
        if self.head() == self.food.cell() {
            match self.grow() {
                Ok(()) => debug!("snake: ate food, length {}", self.body.len()),
                Err(_) => warn!("snake: at capacity ({}), not growing", SNAKE_CAPACITY),
            }
            self.food.regenerate(rng);
        }

        self.steer(input);
        self.advance();
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        self.food.draw(canvas);
        for &part in self.body.iter() {
            draw_cell(canvas, &self.grid, part);
        }
    }
}
