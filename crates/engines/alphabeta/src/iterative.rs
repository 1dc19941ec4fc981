//! Iterative deepening over the fixed-depth searcher.
//!
//! Each item is a complete search at the next depth. A caller that runs out
//! of time simply stops pulling items and acts on the last one it received;
//! an unfinished depth is never observable.

use std::iter::FusedIterator;

use isolation_core::GameState;

use crate::error::SearchError;
use crate::eval::Evaluator;
use crate::search::{AlphaBetaSearcher, SearchOutcome};

/// Lazy sequence of outcomes for depths `1..=max_depth`.
///
/// Ends early only after yielding an error.
pub struct IterativeDeepening<'a, S, E> {
    searcher: &'a mut AlphaBetaSearcher<E>,
    state: &'a S,
    depth: u32,
    max_depth: u32,
    failed: bool,
}

impl<'a, S, E> IterativeDeepening<'a, S, E>
where
    S: GameState,
    E: Evaluator<S>,
{
    pub fn new(searcher: &'a mut AlphaBetaSearcher<E>, state: &'a S, max_depth: u32) -> Self {
        Self {
            searcher,
            state,
            depth: 0,
            max_depth,
            failed: false,
        }
    }

    /// Depth of the last search started.
    pub fn depth(&self) -> u32 {
        self.depth
    }
}

impl<S, E> Iterator for IterativeDeepening<'_, S, E>
where
    S: GameState,
    E: Evaluator<S>,
{
    type Item = Result<SearchOutcome<S::Move>, SearchError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.depth >= self.max_depth {
            return None;
        }
        self.depth += 1;

        match self.searcher.search_at_depth(self.state, self.depth) {
            Ok(outcome) => {
                log::debug!(
                    "depth {} score {} move {:?} nodes {}",
                    outcome.depth,
                    outcome.score,
                    outcome.best_move,
                    outcome.nodes
                );
                Some(Ok(outcome))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        let remaining = (self.max_depth - self.depth) as usize;
        (0, Some(remaining))
    }
}

impl<S, E> FusedIterator for IterativeDeepening<'_, S, E>
where
    S: GameState,
    E: Evaluator<S>,
{
}

#[cfg(test)]
#[path = "iterative_tests.rs"]
mod iterative_tests;
