use thiserror::Error;

/// Reasons a move can be refused. Refused moves never change any state.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Position out of bounds")]
    OutOfBounds,
    #[error("Cell is already marked")]
    CellOccupied,
    #[error("Game already over, no new moves are accepted")]
    GameOver,
}

pub type Result<T> = core::result::Result<T, GameError>;
