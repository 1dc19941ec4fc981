//! Mobility-based position evaluation

use isolation_core::{GameState, Player, Score};
use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Board-fill ratio below which the phase-adaptive heuristic plays offensively.
pub const PHASE_THRESHOLD: f64 = 0.5;

/// Weight given to the favoured side of the mobility difference.
pub const PHASE_WEIGHT: f64 = 2.0;

/// Static evaluation of non-terminal positions.
pub trait Evaluator<S: GameState> {
    /// Scores `state` from `agent`'s perspective.
    ///
    /// Terminal positions must be scored with `GameState::utility` instead;
    /// passing one here returns [`SearchError::TerminalEvaluation`].
    fn evaluate(&self, state: &S, agent: Player) -> Result<Score, SearchError>;
}

/// The available heuristics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heuristic {
    /// `own - opponent` mobility. Reference strategy for benchmarks.
    #[default]
    #[serde(rename = "baseline", alias = "mobility")]
    Mobility,
    /// Denies opponent mobility while the board is mostly empty, then
    /// switches to preserving its own.
    #[serde(rename = "phase-adaptive")]
    PhaseAdaptive,
}

impl Heuristic {
    pub fn name(self) -> &'static str {
        match self {
            Heuristic::Mobility => "baseline",
            Heuristic::PhaseAdaptive => "phase-adaptive",
        }
    }
}

/// Number of moves available to `player` from where it stands.
pub fn mobility<S: GameState>(state: &S, player: Player) -> usize {
    state.liberties(state.location(player)).len()
}

/// Fraction of the board already played: `ply_count / board_size`.
pub fn fill_ratio<S: GameState>(state: &S) -> f64 {
    state.ply_count() as f64 / state.board_size() as f64
}

impl<S: GameState> Evaluator<S> for Heuristic {
    fn evaluate(&self, state: &S, agent: Player) -> Result<Score, SearchError> {
        if state.is_terminal() {
            return Err(SearchError::TerminalEvaluation);
        }

        let own = mobility(state, agent) as f64;
        let opponent = mobility(state, agent.other()) as f64;

        let score = match self {
            Heuristic::Mobility => own - opponent,
            Heuristic::PhaseAdaptive => {
                if fill_ratio(state) < PHASE_THRESHOLD {
                    own - PHASE_WEIGHT * opponent
                } else {
                    PHASE_WEIGHT * own - opponent
                }
            }
        };
        Ok(score)
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
