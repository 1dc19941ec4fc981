//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! Scores are always from the agent's perspective: the agent maximizes at
//! the root and on every other ply below it, the opponent minimizes in
//! between. Bounds are passed down by value.

use isolation_core::{GameState, Player, Score};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::SearchError;
use crate::eval::Evaluator;
use crate::iterative::IterativeDeepening;

/// Result of one completed fixed-depth search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOutcome<M> {
    /// Best root move found
    pub best_move: M,
    /// Score of `best_move` from the agent's perspective
    pub score: Score,
    /// Depth limit this outcome was searched to
    pub depth: u32,
    /// Nodes visited during this search
    pub nodes: u64,
}

/// Alpha-beta searcher for a fixed agent identity.
#[derive(Debug, Clone)]
pub struct AlphaBetaSearcher<E> {
    evaluator: E,
    agent: Player,
    nodes: u64,
    /// Only consulted when no root move beats `-inf`
    rng: StdRng,
}

impl<E> AlphaBetaSearcher<E> {
    pub fn new(evaluator: E, agent: Player) -> Self {
        Self::with_rng(evaluator, agent, StdRng::from_entropy())
    }

    /// Searcher whose fallback move choice is reproducible.
    pub fn with_seed(evaluator: E, agent: Player, seed: u64) -> Self {
        Self::with_rng(evaluator, agent, StdRng::seed_from_u64(seed))
    }

    fn with_rng(evaluator: E, agent: Player, rng: StdRng) -> Self {
        Self {
            evaluator,
            agent,
            nodes: 0,
            rng,
        }
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Nodes visited by the most recent search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Searches depth 1, 2, ... `max_depth`, yielding one outcome per depth.
    pub fn iterative<'a, S>(&'a mut self, state: &'a S, max_depth: u32) -> IterativeDeepening<'a, S, E>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        IterativeDeepening::new(self, state, max_depth)
    }

    /// Searches `state` to `depth` plies and returns the best root move.
    ///
    /// The first move reaching the best score wins ties. If every move scores
    /// `-inf` a random legal move is returned instead; that pick repeats across
    /// runs only for a searcher built with [`AlphaBetaSearcher::with_seed`].
    pub fn search_at_depth<S>(
        &mut self,
        state: &S,
        depth: u32,
    ) -> Result<SearchOutcome<S::Move>, SearchError>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        if depth == 0 {
            return Err(SearchError::InvalidDepth);
        }

        let actions = state.actions();
        if actions.is_empty() {
            log::error!("search called on a position with no legal moves");
            return Err(SearchError::NoLegalMoves);
        }

        self.nodes = 1;
        let mut alpha = f64::NEG_INFINITY;
        let beta = f64::INFINITY;
        let mut best_score = f64::NEG_INFINITY;
        let mut best_move = None;

        for &mv in &actions {
            let value = self.min_value(&state.result(mv), alpha, beta, depth - 1)?;
            alpha = alpha.max(value);
            if value > best_score {
                best_score = value;
                best_move = Some(mv);
            }
        }

        let best_move = match best_move {
            Some(mv) => mv,
            None => {
                let mv = *actions.choose(&mut self.rng).ok_or(SearchError::NoLegalMoves)?;
                log::debug!("every move loses at depth {depth}, falling back to {mv:?}");
                mv
            }
        };

        Ok(SearchOutcome {
            best_move,
            score: best_score,
            depth,
            nodes: self.nodes,
        })
    }

    /// Value of `state` with the opponent to move.
    ///
    /// Returns `+inf` when a non-terminal node has no moves to expand.
    pub fn min_value<S>(
        &mut self,
        state: &S,
        alpha: Score,
        mut beta: Score,
        depth: u32,
    ) -> Result<Score, SearchError>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.nodes += 1;

        if state.is_terminal() {
            return Ok(state.utility(self.agent));
        }
        if depth == 0 {
            return self.evaluator.evaluate(state, self.agent);
        }

        let mut value = f64::INFINITY;
        for mv in state.actions() {
            value = value.min(self.max_value(&state.result(mv), alpha, beta, depth - 1)?);
            if value <= alpha {
                return Ok(value);
            }
            beta = beta.min(value);
        }
        Ok(value)
    }

    /// Value of `state` with the agent to move.
    ///
    /// Returns `-inf` when a non-terminal node has no moves to expand.
    pub fn max_value<S>(
        &mut self,
        state: &S,
        mut alpha: Score,
        beta: Score,
        depth: u32,
    ) -> Result<Score, SearchError>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.nodes += 1;

        if state.is_terminal() {
            return Ok(state.utility(self.agent));
        }
        if depth == 0 {
            return self.evaluator.evaluate(state, self.agent);
        }

        let mut value = f64::NEG_INFINITY;
        for mv in state.actions() {
            value = value.max(self.min_value(&state.result(mv), alpha, beta, depth - 1)?);
            if value >= beta {
                return Ok(value);
            }
            alpha = alpha.max(value);
        }
        Ok(value)
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
