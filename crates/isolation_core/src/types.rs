use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::GameError;

/// Board width in cells.
pub const BOARD_WIDTH: u8 = 11;
/// Board height in cells.
pub const BOARD_HEIGHT: u8 = 9;
/// Total number of cells on the board.
pub const BOARD_SIZE: usize = BOARD_WIDTH as usize * BOARD_HEIGHT as usize;

/// One of the two competing players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Player {
    First,
    Second,
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Player::First => 0,
            Player::Second => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::First => f.write_str("first"),
            Player::Second => f.write_str("second"),
        }
    }
}

/// A board coordinate in (column, row) order. Row 0 is the top (north) edge.
///
/// In Isolation a move is identified by its destination cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub col: u8,
    pub row: u8,
}

impl Cell {
    pub fn new(col: u8, row: u8) -> Result<Self, GameError> {
        if col < BOARD_WIDTH && row < BOARD_HEIGHT {
            Ok(Self { col, row })
        } else {
            Err(GameError::OutOfBounds { col, row })
        }
    }

    /// Row-major index in `0..BOARD_SIZE`.
    #[inline]
    pub fn index(self) -> usize {
        self.row as usize * BOARD_WIDTH as usize + self.col as usize
    }

    pub fn from_index(idx: usize) -> Option<Self> {
        if idx >= BOARD_SIZE {
            return None;
        }
        Some(Self {
            col: (idx % BOARD_WIDTH as usize) as u8,
            row: (idx / BOARD_WIDTH as usize) as u8,
        })
    }

    /// Cell reached by moving `dcol` columns and `drow` rows, if still on the board.
    pub fn offset(self, dcol: i8, drow: i8) -> Option<Self> {
        let col = self.col as i16 + dcol as i16;
        let row = self.row as i16 + drow as i16;
        if (0..BOARD_WIDTH as i16).contains(&col) && (0..BOARD_HEIGHT as i16).contains(&row) {
            Some(Self {
                col: col as u8,
                row: row as u8,
            })
        } else {
            None
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}
