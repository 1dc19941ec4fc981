//! Random Move Isolation Agent
//!
//! Selects moves uniformly at random from all legal moves.
//! Any searching agent should beat this easily, which makes it a useful
//! sanity opponent for the tournament harness.

use isolation_core::{ActionQueue, Agent, GameState, Player};
use rand::seq::SliceRandom;
use rand::thread_rng;

#[cfg(test)]
mod lib_tests;

/// An agent that plays random legal moves.
#[derive(Debug, Clone)]
pub struct RandomAgent {
    player: Player,
}

impl RandomAgent {
    pub fn new(player: Player) -> Self {
        Self { player }
    }
}

impl<S: GameState> Agent<S> for RandomAgent {
    fn name(&self) -> &str {
        "random"
    }

    fn player(&self) -> Player {
        self.player
    }

    fn get_action(&self, state: &S, queue: &ActionQueue<S::Move>) {
        let actions = state.actions();
        match actions.choose(&mut thread_rng()) {
            Some(&mv) => {
                if queue.put(mv).is_err() {
                    log::debug!("random: queue closed before publishing");
                }
            }
            None => log::warn!("random: no legal moves to choose from"),
        }
    }
}
