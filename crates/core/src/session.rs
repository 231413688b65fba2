//! Game session module - one game from first tile to game over
//!
//! The session owns the grid and the status the player sees next to it: how
//! many moves were accepted, the last requested direction and whether it did
//! anything. It also tracks which screen is showing. Quitting and restarting
//! both ask for confirmation (press the same key twice); any other key backs
//! out of a confirmation screen.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::grid::Grid;
use crate::rng::TileRng;
use crate::snapshot::GameSnapshot;
use crate::types::{Direction, GameAction, GridError, DEFAULT_GRID_SIZE, SPAWN_TILES_PER_MOVE};

/// Settings for a new session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub size: usize,
    /// Fixed seed for a reproducible game; OS entropy when `None`
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

/// Which screen the session is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Playing,
    ConfirmQuit,
    ConfirmRestart,
    GameOver,
}

/// Whether the caller should keep running after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive(Debug, Clone)]
pub struct GameSession<R = StdRng> {
    grid: Grid<R>,
    moves: u32,
    last_move: Option<Direction>,
    last_move_changed: bool,
    screen: Screen,
}

impl GameSession<StdRng> {
    /// Start a session from a config
    pub fn new(config: &GameConfig) -> Result<Self, GridError> {
        let grid = Grid::new(config.size, config.rng())?;
        Ok(Self::with_grid(grid))
    }
}

impl<R: TileRng> GameSession<R> {
    /// Wrap an existing grid
    pub fn with_grid(grid: Grid<R>) -> Self {
        let screen = if grid.can_move() {
            Screen::Playing
        } else {
            Screen::GameOver
        };
        Self {
            grid,
            moves: 0,
            last_move: None,
            last_move_changed: false,
            screen,
        }
    }

    pub fn grid(&self) -> &Grid<R> {
        &self.grid
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn last_move(&self) -> Option<Direction> {
        self.last_move
    }

    pub fn last_move_changed(&self) -> bool {
        self.last_move_changed
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn game_over(&self) -> bool {
        self.screen == Screen::GameOver
    }

    /// Apply one player action
    pub fn apply_action(&mut self, action: GameAction) -> Flow {
        match (self.screen, action) {
            (Screen::GameOver, GameAction::Quit) => return Flow::Exit,
            (Screen::GameOver, GameAction::Restart) => self.restart(),
            (Screen::GameOver, _) => {}

            (Screen::ConfirmQuit, GameAction::Quit) => return Flow::Exit,
            (Screen::ConfirmRestart, GameAction::Restart) => self.restart(),

            (_, GameAction::Quit) => self.screen = Screen::ConfirmQuit,
            (_, GameAction::Restart) => self.screen = Screen::ConfirmRestart,
            (_, GameAction::Dismiss) => self.screen = Screen::Playing,
            (_, GameAction::Move(direction)) => {
                self.screen = Screen::Playing;
                self.play(direction);
            }
        }
        Flow::Continue
    }

    /// Apply a move, spawn a tile if it changed anything, and check for game over
    ///
    /// Returns whether the grid changed. Ignored once the game is over.
    pub fn play(&mut self, direction: Direction) -> bool {
        if self.game_over() {
            return false;
        }

        let changed = self.grid.apply_move(direction);
        self.last_move = Some(direction);
        self.last_move_changed = changed;

        if changed {
            self.moves += 1;
            self.grid.spawn_random(SPAWN_TILES_PER_MOVE);
        }

        if !self.grid.can_move() {
            self.screen = Screen::GameOver;
            info!(
                moves = self.moves,
                max = self.grid.max_value(),
                "game over"
            );
        }
        changed
    }

    /// Throw the grid away and start over with the same size
    pub fn restart(&mut self) {
        info!(moves = self.moves, max = self.grid.max_value(), "restarting");
        self.grid.reset();
        self.moves = 0;
        self.last_move = None;
        self.last_move_changed = false;
        self.screen = if self.grid.can_move() {
            Screen::Playing
        } else {
            Screen::GameOver
        };
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            grid: self.grid.snapshot(),
            moves: self.moves,
            last_move: self.last_move,
            last_move_changed: self.last_move_changed,
            screen: self.screen,
        }
    }
}
