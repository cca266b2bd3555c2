use alloc::string::String;

use serde::{Deserialize, Serialize};

use crate::*;

/// Where a game stands. Valid transitions:
///
/// - InProgress -> InProgress
/// - InProgress -> Won
/// - InProgress -> Drawn
///
/// Won and Drawn only ever change through [`Game::reset`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    InProgress,
    Won(Player),
    Drawn,
}

impl GameState {
    /// Indicates the game has ended and no more moves are accepted.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won(_) | Self::Drawn)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::InProgress
    }
}

/// A game from the first mark to a win or draw. All mutation goes through
/// [`Game::place_mark`] and [`Game::reset`]; queries never change state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    grid: Grid,
    current_player: Player,
    moves_played: u8,
    state: GameState,
    name_x: Option<String>,
    name_o: Option<String>,
}

impl Game {
    /// Starts a fresh game: empty grid, `X` to move.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.grid.cell_at(coords)
    }

    /// The player whose turn it is. Stale once the game is over.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn moves_played(&self) -> u8 {
        self.moves_played
    }

    /// Marks the current player's symbol at `coords` and passes the turn.
    ///
    /// Fails with [`GameError::OutOfBounds`] when either coordinate is off
    /// the grid, with [`GameError::GameOver`] once the game is won or drawn,
    /// and with [`GameError::CellOccupied`] when the cell already holds a
    /// mark. A failed call leaves the game exactly as it was.
    pub fn place_mark(&mut self, coords: Coord2) -> Result<()> {
        let coords = self.grid.validate_coords(coords)?;
        self.check_in_progress()?;

        let player = self.current_player;
        self.grid.place(coords, player)?;
        self.moves_played += 1;
        self.current_player = player.opponent();
        log::trace!("{player} marked {coords:?} (move {})", self.moves_played);

        self.state = if let Some(winner) = self.grid.winner() {
            log::debug!("{winner} completed a line on move {}", self.moves_played);
            GameState::Won(winner)
        } else if self.grid.is_full() {
            log::debug!("grid full with no line, game drawn");
            GameState::Drawn
        } else {
            GameState::InProgress
        };
        Ok(())
    }

    /// Whether `player` owns any of the eight lines right now.
    pub fn has_winning_line(&self, player: Player) -> bool {
        self.grid.has_winning_line(player)
    }

    /// The player who completed a line, if any. At most one player can hold
    /// a line in a game played through [`Game::place_mark`].
    pub fn winner(&self) -> Option<Player> {
        match self.state {
            GameState::Won(player) => Some(player),
            _ => None,
        }
    }

    /// Whether every cell holds a mark. A full grid that contains a winning
    /// line counts as a win, not a draw: consult [`Game::winner`] first when
    /// reporting how a game ended.
    pub fn is_draw(&self) -> bool {
        self.grid.is_full()
    }

    /// Whether play is over, by win or by draw.
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Returns to the initial position in one step: empty grid, `X` to move,
    /// move counter at zero. Display names are labels, not game state, and
    /// survive the reset.
    pub fn reset(&mut self) {
        self.grid = Grid::new();
        self.current_player = Player::X;
        self.moves_played = 0;
        self.state = GameState::InProgress;
        log::debug!("game reset");
    }

    /// Optional display label for `player`.
    pub fn player_name(&self, player: Player) -> Option<&str> {
        match player {
            Player::X => self.name_x.as_deref(),
            Player::O => self.name_o.as_deref(),
        }
    }

    pub fn set_player_name(&mut self, player: Player, name: impl Into<String>) {
        let name = Some(name.into());
        match player {
            Player::X => self.name_x = name,
            Player::O => self.name_o = name,
        }
    }

    fn check_in_progress(&self) -> Result<()> {
        if self.state.is_terminal() {
            Err(GameError::GameOver)
        } else {
            Ok(())
        }
    }
}
