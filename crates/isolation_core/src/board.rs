//! Knight's Isolation board.
//!
//! Blocked cells live in a `u128` bitboard indexed row-major (bit 0 = top-left,
//! bit 98 = bottom-right). A piece blocks every cell it lands on, including the
//! one it currently occupies.

use std::fmt;

use crate::error::GameError;
use crate::game::{GameState, Score};
use crate::types::{Cell, Player, BOARD_HEIGHT, BOARD_SIZE, BOARD_WIDTH};

/// Knight offsets as (dcol, drow), in the order NNE, ENE, ESE, SSE, SSW, WSW, WNW, NNW.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, -2),
    (2, -1),
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
];

const BOARD_MASK: u128 = (1u128 << BOARD_SIZE) - 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Isolation {
    blocked: u128,
    ply_count: u32,
    locs: [Option<Cell>; 2],
}

impl Default for Isolation {
    fn default() -> Self {
        Self::new()
    }
}

impl Isolation {
    /// Empty board, first player to move.
    pub fn new() -> Self {
        Self {
            blocked: 0,
            ply_count: 0,
            locs: [None; 2],
        }
    }

    /// Empty board with `cells` pre-blocked. Useful for constructing endgames.
    pub fn with_blocked(cells: &[Cell]) -> Self {
        let mut game = Self::new();
        for cell in cells {
            game.blocked |= 1u128 << cell.index();
        }
        game
    }

    #[inline]
    pub fn is_open(&self, cell: Cell) -> bool {
        self.blocked & (1u128 << cell.index()) == 0
    }

    /// Number of cells not yet blocked.
    pub fn open_cells(&self) -> u32 {
        (!self.blocked & BOARD_MASK).count_ones()
    }

    pub fn locs(&self) -> [Option<Cell>; 2] {
        self.locs
    }

    /// Apply `cell` after checking it is legal for the side to move.
    pub fn apply(&self, cell: Cell) -> Result<Self, GameError> {
        if !self.actions().contains(&cell) {
            return Err(GameError::IllegalMove {
                cell,
                player: self.player(),
            });
        }
        Ok(self.result(cell))
    }

    fn has_liberties(&self, player: Player) -> bool {
        match self.locs[player.idx()] {
            None => self.open_cells() > 0,
            Some(loc) => KNIGHT_OFFSETS
                .iter()
                .filter_map(|&(dc, dr)| loc.offset(dc, dr))
                .any(|c| self.is_open(c)),
        }
    }
}

impl GameState for Isolation {
    type Move = Cell;
    type Location = Cell;

    fn actions(&self) -> Vec<Cell> {
        self.liberties(self.locs[self.player().idx()])
    }

    fn result(&self, cell: Cell) -> Self {
        let mut next = *self;
        next.blocked |= 1u128 << cell.index();
        next.locs[self.player().idx()] = Some(cell);
        next.ply_count += 1;
        next
    }

    fn is_terminal(&self) -> bool {
        !self.has_liberties(self.player())
    }

    fn utility(&self, player: Player) -> Score {
        if !self.is_terminal() {
            return 0.0;
        }
        if self.player() == player {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        }
    }

    fn player(&self) -> Player {
        if self.ply_count % 2 == 0 {
            Player::First
        } else {
            Player::Second
        }
    }

    fn location(&self, player: Player) -> Option<Cell> {
        self.locs[player.idx()]
    }

    fn liberties(&self, loc: Option<Cell>) -> Vec<Cell> {
        match loc {
            None => (0..BOARD_SIZE)
                .filter_map(Cell::from_index)
                .filter(|&c| self.is_open(c))
                .collect(),
            Some(loc) => KNIGHT_OFFSETS
                .iter()
                .filter_map(|&(dc, dr)| loc.offset(dc, dr))
                .filter(|&c| self.is_open(c))
                .collect(),
        }
    }

    fn ply_count(&self) -> u32 {
        self.ply_count
    }

    fn board_size(&self) -> usize {
        BOARD_SIZE
    }
}

impl fmt::Display for Isolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_HEIGHT {
            for col in 0..BOARD_WIDTH {
                let cell = Cell { col, row };
                let ch = if self.locs[0] == Some(cell) {
                    '1'
                } else if self.locs[1] == Some(cell) {
                    '2'
                } else if self.is_open(cell) {
                    '.'
                } else {
                    '#'
                };
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
