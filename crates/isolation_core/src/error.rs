//! Error types for game rules and the agent seam

use crate::types::{Cell, Player};

/// Errors raised when the rules of the game are violated.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Coordinates outside the board
    #[error("cell ({col}, {row}) is off the board")]
    OutOfBounds { col: u8, row: u8 },

    /// Move not in the legal action list of the position
    #[error("illegal move {cell} for {player} player")]
    IllegalMove { cell: Cell, player: Player },
}

/// The harness stopped listening for moves.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("action queue closed by the harness")]
pub struct QueueClosed;
