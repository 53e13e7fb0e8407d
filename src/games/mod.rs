//! Mini-games and the dispatcher that runs one of them at a time.
//!
//! Every game implements [`Game`]. [`GameHandler`] owns one instance of
//! each and forwards `init`/`update`/`draw` to the active one only; the
//! others keep their last state so a game can be resumed after a trip
//! back to the menu.

pub mod cube;
pub mod math;
pub mod pong;
pub mod snake;

use crate::canvas::Canvas;
use crate::config::{CubeConfig, GridConfig, PongConfig};
use crate::error::Error;
use crate::input::InputSnapshot;
use crate::rng::RandomSource;

use cube::Cube;
use pong::Pong;
use snake::Snake;

/// Uniform capability interface of a playable game.
pub trait Game {
    /// Re-initialise to the starting position (called on entry from the menu).
    fn init(&mut self, rng: &mut dyn RandomSource);

    /// Advance one frame using this tick's input.
    fn update(&mut self, input: InputSnapshot, rng: &mut dyn RandomSource);

    /// Emit this frame's primitives.
    fn draw(&self, canvas: &mut dyn Canvas);
}

/// Identifier of a game variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum GameId {
    Snake = 0,
    Pong = 1,
    Cube = 2,
}

impl GameId {
    pub const ALL: [GameId; 3] = [GameId::Snake, GameId::Pong, GameId::Cube];

    /// Numeric id, as accepted by `GameHandler::set_game_index`.
    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for GameId {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(GameId::Snake),
            1 => Ok(GameId::Pong),
            2 => Ok(GameId::Cube),
            other => Err(Error::UnknownGame(other)),
        }
    }
}

/// Owns every game and dispatches to the selected one.
pub struct GameHandler {
    active: GameId,
    snake: Snake,
    pong: Pong,
    cube: Cube,
}

impl GameHandler {
    pub fn new(
        grid: GridConfig,
        pong: PongConfig,
        cube: CubeConfig,
        rng: &mut dyn RandomSource,
    ) -> Self {
        Self {
            active: GameId::Snake,
            snake: Snake::new(grid, rng),
            pong: Pong::new(pong),
            cube: Cube::new(cube),
        }
    }

    /// Handler with the default board geometry.
    pub fn with_defaults(rng: &mut dyn RandomSource) -> Self {
        Self::new(
            GridConfig::default(),
            PongConfig::default(),
            CubeConfig::default(),
            rng,
        )
    }

    /// Select the game that subsequent calls are forwarded to.
    pub fn set_game(&mut self, id: GameId) {
        debug!("games: active {} -> {}", self.active.index(), id.index());
        self.active = id;
    }

    /// Select a game by numeric id. Unknown ids leave the selection as is.
    pub fn set_game_index(&mut self, index: u8) -> Result<(), Error> {
        match GameId::try_from(index) {
            Ok(id) => {
                self.set_game(id);
                Ok(())
            }
            Err(e) => {
                warn!("games: ignoring unknown game id {}", index);
                Err(e)
            }
        }
    }

    pub fn active(&self) -> GameId {
        self.active
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn pong(&self) -> &Pong {
        &self.pong
    }

    pub fn cube(&self) -> &Cube {
        &self.cube
    }

    fn current(&self) -> &dyn Game {
        match self.active {
            GameId::Snake => &self.snake,
            GameId::Pong => &self.pong,
            GameId::Cube => &self.cube,
        }
    }

    fn current_mut(&mut self) -> &mut dyn Game {
        match self.active {
            GameId::Snake => &mut self.snake,
            GameId::Pong => &mut self.pong,
            GameId::Cube => &mut self.cube,
        }
    }
}

impl Game for GameHandler {
    fn init(&mut self, rng: &mut dyn RandomSource) {
        info!("games: init {}", self.active.index());
        self.current_mut().init(rng);
    }

    fn update(&mut self, input: InputSnapshot, rng: &mut dyn RandomSource) {
        self.current_mut().update(input, rng);
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        self.current().draw(canvas);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::testing::{DrawOp, Recorder};
    use crate::input::Button;
    use crate::rng::testing::Scripted;

    fn handler() -> GameHandler {
        GameHandler::with_defaults(&mut Scripted::new(&[10, 5]))
    }

    #[test]
    fn game_id_round_trips_through_index() {
        for id in GameId::ALL {
            assert_eq!(GameId::try_from(id.index()), Ok(id));
        }
        assert_eq!(GameId::try_from(3), Err(Error::UnknownGame(3)));
    }

    #[test]
    fn unknown_index_is_a_no_op() {
        let mut games = handler();
        games.set_game(GameId::Cube);
        assert_eq!(games.set_game_index(7), Err(Error::UnknownGame(7)));
        assert_eq!(games.active(), GameId::Cube);

        assert_eq!(games.set_game_index(1), Ok(()));
        assert_eq!(games.active(), GameId::Pong);
    }

    #[test]
    fn update_reaches_only_the_active_game() {
        let mut games = handler();
        let mut rng = Scripted::default();
        let snake_before = games.snake().body().to_vec();
        let cube_before = *games.cube().vertices();

        games.set_game_index(1).unwrap();
        games.init(&mut rng);
        games.update(InputSnapshot::empty().with(Button::Down), &mut rng);

        assert_eq!(games.pong().player1().y(), 4);
        assert_eq!(games.snake().body(), snake_before.as_slice());
        assert_eq!(games.cube().vertices(), &cube_before);
    }

    #[test]
    fn draw_reaches_only_the_active_game() {
        let mut games = handler();
        games.set_game(GameId::Cube);
        let mut canvas = Recorder::default();
        games.draw(&mut canvas);

        assert_eq!(canvas.lines().count(), 12);
        assert!(canvas.ops.iter().all(|op| matches!(op, DrawOp::Line(..))));
    }

    #[test]
    fn inactive_games_keep_their_state() {
        let mut games = handler();
        let mut rng = Scripted::default();

        games.set_game(GameId::Cube);
        games.init(&mut rng);
        games.update(InputSnapshot::empty().with(Button::Up), &mut rng);
        let rotated = *games.cube().vertices();

        games.set_game(GameId::Snake);
        games.update(InputSnapshot::empty(), &mut rng);
        games.set_game(GameId::Cube);

        assert_eq!(games.cube().vertices(), &rotated);
    }
}
