//! Agent seam between search engines and the match harness.
//!
//! The harness hands an agent a position and an [`ActionQueue`]. The agent
//! may publish any number of moves; the harness acts on the last one it
//! received before its deadline and then closes the queue.

use crossbeam_channel::{Receiver, Sender};

use crate::error::QueueClosed;
use crate::game::GameState;
use crate::types::Player;

/// Sending half of the move channel handed to an agent.
#[derive(Debug, Clone)]
pub struct ActionQueue<M> {
    tx: Sender<M>,
}

impl<M> ActionQueue<M> {
    pub fn new(tx: Sender<M>) -> Self {
        Self { tx }
    }

    /// Queue plus the receiving end the harness reads from.
    pub fn unbounded() -> (Self, Receiver<M>) {
        let (tx, rx) = crossbeam_channel::unbounded();
        (Self::new(tx), rx)
    }

    /// Publish a move. Fails once the harness has dropped the receiver.
    pub fn put(&self, mv: M) -> Result<(), QueueClosed> {
        self.tx.send(mv).map_err(|_| QueueClosed)
    }
}

/// Trait implemented by every playing agent.
pub trait Agent<S: GameState>: Send + Sync {
    /// Short identifier used in reports.
    fn name(&self) -> &str;

    /// The player this agent plays as.
    fn player(&self) -> Player;

    /// Search `state` and publish moves to `queue`, best-so-far last.
    ///
    /// Implementations should return once `queue.put` fails.
    fn get_action(&self, state: &S, queue: &ActionQueue<S::Move>);
}
