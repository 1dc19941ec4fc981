//! Alpha-Beta Isolation Agent
//!
//! Iterative-deepening minimax with alpha-beta pruning and two mobility
//! heuristics. The baseline heuristic is the reference the phase-adaptive
//! one is benchmarked against.

mod error;
mod eval;
mod iterative;
mod search;

#[cfg(test)]
mod test_tree;

use isolation_core::{ActionQueue, Agent, GameState, Player};
use serde::{Deserialize, Serialize};

pub use error::{ConfigError, SearchError};
pub use eval::{fill_ratio, mobility, Evaluator, Heuristic, PHASE_THRESHOLD, PHASE_WEIGHT};
pub use iterative::IterativeDeepening;
pub use search::{AlphaBetaSearcher, SearchOutcome};

/// Depth cap used when none is configured. The harness clock normally
/// stops the search long before this.
pub const DEFAULT_MAX_DEPTH: u32 = 100;

fn default_max_depth() -> u32 {
    DEFAULT_MAX_DEPTH
}

/// Configuration for an [`AlphaBetaAgent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentConfig {
    #[serde(default)]
    pub heuristic: Heuristic,
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,
    pub player: Player,
    /// Seed for the last-resort random move; entropy when absent
    #[serde(default)]
    pub fallback_seed: Option<u64>,
}

impl AgentConfig {
    pub fn new(heuristic: Heuristic, player: Player) -> Self {
        Self {
            heuristic,
            max_depth: DEFAULT_MAX_DEPTH,
            player,
            fallback_seed: None,
        }
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_fallback_seed(mut self, seed: u64) -> Self {
        self.fallback_seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::InvalidMaxDepth);
        }
        Ok(())
    }
}

/// Agent publishing the best move of every completed depth.
///
/// Each request builds a fresh searcher, so no state survives between moves.
#[derive(Debug, Clone)]
pub struct AlphaBetaAgent {
    config: AgentConfig,
    name: String,
}

impl AlphaBetaAgent {
    pub fn new(config: AgentConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            name: format!("alphabeta-{}", config.heuristic.name()),
            config,
        })
    }

    /// Searcher configured for one move request.
    pub fn searcher(&self) -> AlphaBetaSearcher<Heuristic> {
        match self.config.fallback_seed {
            Some(seed) => AlphaBetaSearcher::with_seed(self.config.heuristic, self.config.player, seed),
            None => AlphaBetaSearcher::new(self.config.heuristic, self.config.player),
        }
    }
}

impl<S: GameState> Agent<S> for AlphaBetaAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn player(&self) -> Player {
        self.config.player
    }

    fn get_action(&self, state: &S, queue: &ActionQueue<S::Move>) {
        if state.player() != self.config.player {
            log::warn!(
                "{} asked to move for {} while configured as {}",
                self.name,
                state.player(),
                self.config.player
            );
        }

        let mut searcher = self.searcher();
        for outcome in searcher.iterative(state, self.config.max_depth) {
            match outcome {
                Ok(outcome) => {
                    if queue.put(outcome.best_move).is_err() {
                        log::debug!("{}: queue closed after depth {}", self.name, outcome.depth);
                        return;
                    }
                }
                Err(e) => {
                    log::error!("{}: search aborted: {e}", self.name);
                    return;
                }
            }
        }
    }
}
