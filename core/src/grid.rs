use core::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::*;

/// The eight alignments that decide a game: three rows, three columns and
/// both diagonals. Fixed for a 3x3 grid.
pub const LINES: [[Coord2; 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// The 3x3 play surface. Placement is fail-safe: a rejected placement leaves
/// every cell as it was.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: [[Cell; GRID_SIZE as usize]; GRID_SIZE as usize],
}

impl Grid {
    pub const fn new() -> Self {
        Self {
            cells: [[Cell::Empty; GRID_SIZE as usize]; GRID_SIZE as usize],
        }
    }

    /// Bounds-checks `(row, col)`, passing valid coordinates through.
    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if coords.0 < GRID_SIZE && coords.1 < GRID_SIZE {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self[coords]
    }

    /// Marks an empty in-bounds cell for `player`.
    pub fn place(&mut self, coords: Coord2, player: Player) -> Result<()> {
        let coords = self.validate_coords(coords)?;
        if !self[coords].is_empty() {
            return Err(GameError::CellOccupied);
        }
        self[coords] = Cell::Marked(player);
        Ok(())
    }

    pub fn mark_count(&self) -> u8 {
        iter_coords().filter(|&coords| !self[coords].is_empty()).count() as u8
    }

    pub fn is_full(&self) -> bool {
        self.mark_count() == CELL_COUNT
    }

    /// Whether `player` currently owns all three cells of some line.
    pub fn has_winning_line(&self, player: Player) -> bool {
        LINES
            .iter()
            .any(|line| line.iter().all(|&coords| self[coords] == Cell::Marked(player)))
    }

    /// The player holding a completed line, `X` checked before `O`.
    pub fn winner(&self) -> Option<Player> {
        [Player::X, Player::O]
            .into_iter()
            .find(|&player| self.has_winning_line(player))
    }

    /// Rows top to bottom, for rendering.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; GRID_SIZE as usize]> {
        self.cells.iter()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.cells[row as usize][col as usize]
    }
}

impl IndexMut<Coord2> for Grid {
    fn index_mut(&mut self, (row, col): Coord2) -> &mut Self::Output {
        &mut self.cells[row as usize][col as usize]
    }
}
