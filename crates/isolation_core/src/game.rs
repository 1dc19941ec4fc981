//! The game-state contract consumed by search engines.

use std::fmt::Debug;
use std::hash::Hash;

use crate::types::Player;

/// Desirability of a position, always from a fixed player's perspective.
///
/// Wins and losses are `f64::INFINITY` and `f64::NEG_INFINITY`.
pub type Score = f64;

/// A deterministic, perfect-information, two-player game position.
///
/// Implementations are immutable snapshots: `result` derives a new position
/// and never mutates `self`.
pub trait GameState: Clone {
    /// Identifies a transition to a successor position.
    type Move: Copy + Eq + Hash + Debug;
    /// A place a player's piece can stand on.
    type Location: Copy + Eq + Debug;

    /// Legal moves for the side to move, in a fixed order. May be empty.
    fn actions(&self) -> Vec<Self::Move>;

    /// Successor position after `mv`. `mv` must come from `actions`.
    fn result(&self, mv: Self::Move) -> Self;

    fn is_terminal(&self) -> bool;

    /// Game-theoretic outcome for `player`. Only meaningful when terminal.
    fn utility(&self, player: Player) -> Score;

    /// Side to move.
    fn player(&self) -> Player;

    /// Current location of `player`, `None` before it has been placed.
    fn location(&self, player: Player) -> Option<Self::Location>;

    /// Locations reachable in one step from `loc`.
    fn liberties(&self, loc: Option<Self::Location>) -> Vec<Self::Location>;

    /// Plies played so far.
    fn ply_count(&self) -> u32;

    /// Total number of cells on the board.
    fn board_size(&self) -> usize;
}
