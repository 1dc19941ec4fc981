//! Scripted game trees for exercising the searcher.

use std::cell::Cell;
use std::sync::Arc;

use isolation_core::{GameState, Player, Score};
use rand::Rng;

use crate::error::SearchError;
use crate::eval::Evaluator;

#[derive(Debug, Clone)]
struct Node {
    children: Vec<usize>,
    /// Utility for the first player when the node ends the game
    terminal: Option<Score>,
    /// Scripted heuristic value for the first player
    value: Score,
}

/// Position in a scripted tree. Moves are node ids; the first player moves
/// at even plies.
#[derive(Debug, Clone)]
pub struct TreeGame {
    nodes: Arc<Vec<Node>>,
    node: usize,
    ply: u32,
}

impl TreeGame {
    pub fn node(&self) -> usize {
        self.node
    }
}

impl GameState for TreeGame {
    type Move = usize;
    type Location = usize;

    fn actions(&self) -> Vec<usize> {
        self.nodes[self.node].children.clone()
    }

    fn result(&self, mv: usize) -> Self {
        Self {
            nodes: Arc::clone(&self.nodes),
            node: mv,
            ply: self.ply + 1,
        }
    }

    fn is_terminal(&self) -> bool {
        self.nodes[self.node].terminal.is_some()
    }

    fn utility(&self, player: Player) -> Score {
        let u = self.nodes[self.node].terminal.unwrap_or(0.0);
        match player {
            Player::First => u,
            Player::Second => -u,
        }
    }

    fn player(&self) -> Player {
        if self.ply % 2 == 0 {
            Player::First
        } else {
            Player::Second
        }
    }

    fn location(&self, _player: Player) -> Option<usize> {
        None
    }

    fn liberties(&self, _loc: Option<usize>) -> Vec<usize> {
        Vec::new()
    }

    fn ply_count(&self) -> u32 {
        self.ply
    }

    fn board_size(&self) -> usize {
        1
    }
}

/// Builds trees bottom-up: children are created before their parent.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: Vec<Node>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, node: Node) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Non-terminal node with no children and heuristic value `value`.
    pub fn leaf(&mut self, value: Score) -> usize {
        self.push(Node {
            children: Vec::new(),
            terminal: None,
            value,
        })
    }

    pub fn terminal(&mut self, utility: Score) -> usize {
        self.push(Node {
            children: Vec::new(),
            terminal: Some(utility),
            value: 0.0,
        })
    }

    pub fn node(&mut self, children: &[usize]) -> usize {
        self.node_with_value(children, 0.0)
    }

    pub fn node_with_value(&mut self, children: &[usize], value: Score) -> usize {
        self.push(Node {
            children: children.to_vec(),
            terminal: None,
            value,
        })
    }

    /// Internal node whose children are leaves with the given values.
    pub fn leaves(&mut self, values: &[Score]) -> usize {
        let children: Vec<usize> = values.iter().map(|&v| self.leaf(v)).collect();
        self.node(&children)
    }

    /// Full random tree of `depth` plies; a few leaves end the game.
    pub fn random<R: Rng>(&mut self, rng: &mut R, depth: u32, branching: usize) -> usize {
        if depth == 0 {
            return match rng.gen_range(0..10) {
                0 => self.terminal(f64::INFINITY),
                1 => self.terminal(f64::NEG_INFINITY),
                _ => self.leaf(rng.gen_range(-20..=20) as f64),
            };
        }
        let width = rng.gen_range(1..=branching);
        let children: Vec<usize> = (0..width)
            .map(|_| self.random(rng, depth - 1, branching))
            .collect();
        let value = rng.gen_range(-20..=20) as f64;
        self.node_with_value(&children, value)
    }

    pub fn build(self, root: usize) -> TreeGame {
        TreeGame {
            nodes: Arc::new(self.nodes),
            node: root,
            ply: 0,
        }
    }
}

/// Evaluator returning each node's scripted value; counts calls.
#[derive(Debug, Default)]
pub struct ScriptedEval {
    calls: Cell<u64>,
}

impl ScriptedEval {
    pub fn calls(&self) -> u64 {
        self.calls.get()
    }
}

impl Evaluator<TreeGame> for ScriptedEval {
    fn evaluate(&self, state: &TreeGame, agent: Player) -> Result<Score, SearchError> {
        if state.is_terminal() {
            return Err(SearchError::TerminalEvaluation);
        }
        self.calls.set(self.calls.get() + 1);
        let value = state.nodes[state.node].value;
        Ok(match agent {
            Player::First => value,
            Player::Second => -value,
        })
    }
}

/// Plain minimax without pruning, for comparison.
pub fn minimax<E: Evaluator<TreeGame>>(
    state: &TreeGame,
    eval: &E,
    agent: Player,
    depth: u32,
    maximizing: bool,
) -> Score {
    if state.is_terminal() {
        return state.utility(agent);
    }
    if depth == 0 {
        return eval.evaluate(state, agent).unwrap();
    }
    let values = state
        .actions()
        .into_iter()
        .map(|mv| minimax(&state.result(mv), eval, agent, depth - 1, !maximizing));
    if maximizing {
        values.fold(f64::NEG_INFINITY, f64::max)
    } else {
        values.fold(f64::INFINITY, f64::min)
    }
}
