//! Two-player Pong.
//!
//! Each paddle moves vertically and is clamped to the playfield. The ball
//! travels at an integer speed along an angle, reflecting off the top and
//! bottom walls and off paddles (which also speeds it up and perturbs the
//! angle). When it leaves the field the opposite player scores and the
//! ball is served again from midfield.

use core::f32::consts::{PI, TAU};
use core::fmt::Write;

use heapless::String;
use libm::{cosf, remainderf, sinf};

use super::Game;
use crate::canvas::Canvas;
use crate::config::PongConfig;
use crate::input::{Button, InputSnapshot};
use crate::rng::RandomSource;

/// Horizontal slack around a paddle for collision tests.
const HIT_SLACK_LEFT: i32 = 4;
const HIT_SLACK_RIGHT: i32 = 6;
/// Rows trimmed from the bottom of the paddle hitbox.
const HIT_INSET_BOTTOM: i32 = 2;

/// Offset of each score label from the centre divider.
const SCORE_OFFSET: i32 = 9;

/// Launch angle of a freshly created ball.
const START_ANGLE: f32 = PI / 6.0;

/// Wrap an angle into `[-π, π]`.
fn normalize(angle: f32) -> f32 {
    remainderf(angle, TAU)
}

pub struct Paddle {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    speed: i32,
    max_y: i32,
    score: u16,
}

impl Paddle {
    /// Paddle at column `x`, top of the field, no points.
    pub fn new(config: &PongConfig, x: i32) -> Self {
        Self {
            x,
            y: 0,
            width: config.paddle_width,
            height: config.paddle_height,
            speed: config.paddle_speed,
            max_y: config.paddle_max_y(),
            score: 0,
        }
    }

    /// Move by `direction · speed`, clamped to `[0, max_y]`.
    pub fn move_by(&mut self, direction: i32) {
        self.y = (self.y + direction * self.speed).clamp(0, self.max_y);
    }

    /// Whether `(x, y)` lies in the widened paddle hitbox.
    pub fn collided(&self, x: i32, y: i32) -> bool {
        x >= self.x - HIT_SLACK_LEFT
            && x <= self.x + HIT_SLACK_RIGHT
            && y >= self.y
            && y < self.y + self.height - HIT_INSET_BOTTOM
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn score(&self) -> u16 {
        self.score
    }

    fn award_point(&mut self) {
        self.score = self.score.saturating_add(1);
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.draw_box(self.x, self.y, self.width as u32, self.height as u32);
    }
}

pub struct Ball {
    config: PongConfig,
    x: f32,
    y: f32,
    speed: i32,
    angle: f32,
    game_over: bool,
}

impl Ball {
    pub fn new(config: PongConfig) -> Self {
        Self {
            config,
            x: (config.field_width / 2) as f32,
            y: (config.field_height / 2) as f32,
            speed: config.ball_speed,
            angle: START_ANGLE,
            game_over: false,
        }
    }

    /// One physics step against the two paddles.
    ///
    /// Order: wall bounce, paddle bounce, out-of-bounds check, then an
    /// Euler step of `speed` pixels along `angle`. Walls and paddles only
    /// reflect a ball travelling toward them. Once out of bounds the ball
    /// stays put until [`Ball::reset`].
    pub fn update(&mut self, left: &Paddle, right: &Paddle, rng: &mut dyn RandomSource) {
        if self.game_over {
            return;
        }

        let c = &self.config;
        let rising = sinf(self.angle) < 0.0;
        let at_top = self.y <= c.wall_margin;
        let at_bottom = self.y >= c.field_height as f32 - c.wall_margin;
        if (rising && at_top) || (!rising && at_bottom) {
            self.angle = normalize(-self.angle);
        }

        let (px, py) = (self.x as i32, self.y as i32);
        let heading_left = cosf(self.angle) < 0.0;
        if (heading_left && left.collided(px, py)) || (!heading_left && right.collided(px, py)) {
            self.bounce(rng);
        }

        if self.x > self.config.field_width as f32 || self.x < 0.0 {
            debug!("pong: ball out at x={}", self.x);
            self.game_over = true;
            return;
        }

        let speed = self.speed as f32;
        self.x += speed * cosf(self.angle);
        self.y += speed * sinf(self.angle);
    }

    /// Reflect off a paddle, perturb by `π/(±[8, 16))` and speed up.
    fn bounce(&mut self, rng: &mut dyn RandomSource) {
        let dir = if rng.random(2) == 0 { -1 } else { 1 };
        let divisor = rng.random_range(8, 16);
        let perturbation = PI / (dir * divisor) as f32;

        self.angle = normalize(-(self.angle + PI) + perturbation);
        self.speed += self.config.ball_speed_step;
        trace!("pong: paddle hit, speed {}", self.speed);
    }

    /// Serve from midfield at base speed.
    ///
    /// The serve angle is `π/(±[4, 11))`, heading right; `side == -1`
    /// flips it to head left.
    pub fn reset(&mut self, side: i32, rng: &mut dyn RandomSource) {
        self.game_over = false;
        self.x = (self.config.field_width / 2) as f32;
        self.y = (self.config.field_height / 2) as f32;
        self.speed = self.config.ball_speed;

        let dir = if rng.random(2) == 0 { -1 } else { 1 };
        let divisor = rng.random_range(4, 11);
        let flip = if side == -1 { PI } else { 0.0 };
        self.angle = normalize(PI / (dir * divisor) as f32 + flip);
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.draw_box(self.x as i32 - 2, self.y as i32 - 2, 4, 4);
    }
}

pub struct Pong {
    config: PongConfig,
    player1: Paddle,
    player2: Paddle,
    ball: Ball,
}

impl Pong {
    pub fn new(config: PongConfig) -> Self {
        Self {
            config,
            player1: Paddle::new(&config, config.left_paddle_x),
            player2: Paddle::new(&config, config.right_paddle_x),
            ball: Ball::new(config),
        }
    }

    /// Left paddle.
    pub fn player1(&self) -> &Paddle {
        &self.player1
    }

    /// Right paddle.
    pub fn player2(&self) -> &Paddle {
        &self.player2
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    /// Credit the point for a ball that left the field and serve toward
    /// the player who conceded it.
    fn score_point(&mut self, rng: &mut dyn RandomSource) {
        if self.ball.x() > self.config.field_width as f32 {
            self.player1.award_point();
            self.ball.reset(1, rng);
        } else {
            self.player2.award_point();
            self.ball.reset(-1, rng);
        }
        info!(
            "pong: score {}-{}",
            self.player1.score(),
            self.player2.score()
        );
    }

    fn draw_score(&self, canvas: &mut dyn Canvas, score: u16, centre: i32) {
        let mut text: String<8> = String::new();
        let _ = write!(text, "{}", score);
        let w = canvas.str_width(&text) as i32;
        canvas.draw_str((centre * 2 - w) / 2, 2, &text);
    }
}

impl Game for Pong {
    fn init(&mut self, _rng: &mut dyn RandomSource) {
        info!("pong: init");
        *self = Self::new(self.config);
    }

    fn update(&mut self, input: InputSnapshot, rng: &mut dyn RandomSource) {
        if input.is_pressed(Button::Up) {
            self.player1.move_by(-1);
        } else if input.is_pressed(Button::Down) {
            self.player1.move_by(1);
        }

        if input.is_pressed(Button::AltUp) {
            self.player2.move_by(-1);
        } else if input.is_pressed(Button::AltDown) {
            self.player2.move_by(1);
        }

        if self.ball.is_game_over() {
            self.score_point(rng);
        }

        self.ball.update(&self.player1, &self.player2, rng);
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        let mid = self.config.field_width / 2;
        canvas.draw_line(mid, 0, mid, self.config.field_height);

        self.draw_score(canvas, self.player1.score(), mid - SCORE_OFFSET);
        self.draw_score(canvas, self.player2.score(), mid + SCORE_OFFSET);

        self.player1.draw(canvas);
        self.player2.draw(canvas);
        self.ball.draw(canvas);
    }
}
