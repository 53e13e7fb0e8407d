//! Main menu state machine.
//!
//! ```text
//!   Browsing --select--> Playing   (initialises the chosen game)
//!   Playing  --back----> Browsing  (game state is kept for later)
//! ```
//!
//! While browsing, next/previous move the cursor circularly. While
//! playing, every tick is forwarded to the [`GameHandler`].

use crate::canvas::Canvas;
use crate::config::MENU_LENGTH;
use crate::games::{Game, GameHandler, GameId};
use crate::input::{Button, InputSnapshot};
use crate::rng::RandomSource;

/// A menu row: display name and the game it launches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    name: &'static str,
    game: GameId,
}

impl MenuItem {
    pub const fn new(name: &'static str, game: GameId) -> Self {
        Self { name, game }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn game(&self) -> GameId {
        self.game
    }
}

/// Default menu contents.
pub const MENU_ITEMS: [MenuItem; MENU_LENGTH] = [
    MenuItem::new("Snake", GameId::Snake),
    MenuItem::new("Pong", GameId::Pong),
    MenuItem::new("3D Cube", GameId::Cube),
];

/// Top-level UI state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuState {
    /// Showing the menu list.
    Browsing,
    /// A game owns the screen and the buttons (except BACK).
    Playing,
}

/// Move selection cursor one item down, wrapping to the top.
pub fn select_next(selected: usize, item_count: usize) -> usize {
    if selected + 1 < item_count {
        selected + 1
    } else {
        0
    }
}

/// Move selection cursor one item up, wrapping to the bottom.
pub fn select_prev(selected: usize, item_count: usize) -> usize {
    if selected == 0 {
        item_count.saturating_sub(1)
    } else {
        selected - 1
    }
}

pub struct Menu {
    items: [MenuItem; MENU_LENGTH],
    current: usize,
    state: MenuState,
    games: GameHandler,
}

impl Menu {
    pub fn new(items: [MenuItem; MENU_LENGTH], games: GameHandler) -> Self {
        Self {
            items,
            current: 0,
            state: MenuState::Browsing,
            games,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn selected_item(&self) -> &MenuItem {
        &self.items[self.current]
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == MenuState::Playing
    }

    pub fn games(&self) -> &GameHandler {
        &self.games
    }

    /// Advance one tick.
    pub fn update(&mut self, input: InputSnapshot, rng: &mut dyn RandomSource) {
        match self.state {
            MenuState::Browsing => self.browse(input, rng),
            MenuState::Playing => {
                if input.is_pressed(Button::Back) {
                    info!("menu: leaving {}", self.selected_item().name());
                    self.state = MenuState::Browsing;
                } else {
                    self.games.update(input, rng);
                }
            }
        }
    }

    fn browse(&mut self, input: InputSnapshot, rng: &mut dyn RandomSource) {
        if !input.any() {
            return;
        }
        if input.is_pressed(Button::Up) {
            self.current = select_next(self.current, MENU_LENGTH);
        } else if input.is_pressed(Button::Down) {
            self.current = select_prev(self.current, MENU_LENGTH);
        } else if input.is_pressed(Button::AltDown) {
            let item = *self.selected_item();
            info!("menu: starting {}", item.name());
            self.games.set_game(item.game());
            self.games.init(rng);
            self.state = MenuState::Playing;
        }
    }

    /// Emit the current frame: the menu list or the running game.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        match self.state {
            MenuState::Browsing => self.draw_list(canvas),
            MenuState::Playing => self.games.draw(canvas),
        }
    }

    /// Centred rows; the selected row is a filled bar with inverted text.
    fn draw_list(&self, canvas: &mut dyn Canvas) {
        let row = canvas.font_height() as i32;
        let width = canvas.width();

        for (i, item) in self.items.iter().enumerate() {
            let top = i as i32 * row;
            let x = (width.saturating_sub(canvas.str_width(item.name())) / 2) as i32;

            canvas.set_inverted(false);
            if i == self.current {
                canvas.draw_box(0, top + 1, width, row as u32);
                canvas.set_inverted(true);
            }
            canvas.draw_str(x, top, item.name());
        }
        canvas.set_inverted(false);
    }
}
