//! Match runner for playing games between agents

use crossbeam_channel::RecvTimeoutError;
use isolation_core::{ActionQueue, Agent, GameState, Isolation, Player};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::config::AgentSpec;
use crate::error::TournamentError;
use crate::results::{GameResult, MatchResult};

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Wall-clock budget per move (None = search runs to its depth cap)
    pub time_per_move: Option<Duration>,
    /// Plies after which the game is declared a draw
    pub max_plies: u32,
    /// Whether agent1 and agent2 swap seats every game
    pub alternate_players: bool,
    /// Random plies played before the agents take over
    pub opening_plies: u32,
    /// Seed for the random openings
    pub seed: Option<u64>,
    /// Print progress during match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            time_per_move: None,
            max_plies: 200,
            alternate_players: true,
            opening_plies: 0,
            seed: None,
            verbose: true,
        }
    }
}

/// How a single game ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    /// None when `max_plies` ran out
    pub winner: Option<Player>,
    /// True if the loser failed to produce a legal move
    pub forfeit: bool,
    pub plies: u32,
    pub final_state: Isolation,
}

impl GameRecord {
    /// Result from `player`'s perspective.
    pub fn result_for(&self, player: Player) -> GameResult {
        match self.winner {
            Some(winner) if winner == player => GameResult::Win,
            Some(_) => GameResult::Loss,
            None => GameResult::Draw,
        }
    }
}

/// Ask `agent` for a move and return the last one it published.
///
/// With a time limit the agent runs on a worker thread and the harness stops
/// listening at the deadline. The worker notices the closed queue at its next
/// publish, and this call joins it before returning so no search outlives the
/// request. Without a limit the agent runs to completion on this thread.
pub fn request_move<S>(
    agent: &Arc<dyn Agent<S>>,
    state: &S,
    time_limit: Option<Duration>,
) -> Option<S::Move>
where
    S: GameState + Send + 'static,
    S::Move: Send + 'static,
{
    let (queue, rx) = ActionQueue::unbounded();

    let Some(limit) = time_limit else {
        agent.get_action(state, &queue);
        drop(queue);
        return rx.try_iter().last();
    };

    let worker = Arc::clone(agent);
    let worker_state = state.clone();
    let handle = match thread::Builder::new()
        .name(format!("agent-{}", agent.name()))
        .spawn(move || worker.get_action(&worker_state, &queue))
    {
        Ok(handle) => handle,
        Err(e) => {
            log::error!("failed to start {}: {e}", agent.name());
            return None;
        }
    };

    let deadline = Instant::now() + limit;
    let mut latest = None;
    loop {
        match rx.recv_deadline(deadline) {
            Ok(mv) => latest = Some(mv),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(rx);
    if handle.join().is_err() {
        log::error!("{} panicked while searching", agent.name());
        return None;
    }
    latest
}

/// Runs matches between two agent configurations
pub struct MatchRunner {
    config: MatchConfig,
    rng: StdRng,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    /// Run a match between two agents
    ///
    /// Returns the result from agent1's perspective. When seats alternate,
    /// each pair of games shares the same random opening.
    pub fn run_match(
        &mut self,
        agent1: &AgentSpec,
        agent2: &AgentSpec,
    ) -> Result<MatchResult, TournamentError> {
        let mut result = MatchResult::new();
        let mut opening = Isolation::new();

        for game_num in 0..self.config.num_games {
            let agent1_first = !self.config.alternate_players || game_num % 2 == 0;
            if agent1_first {
                opening = self.random_opening();
            }

            let (agent1_seat, agents) = if agent1_first {
                (Player::First, [agent1.build(Player::First)?, agent2.build(Player::Second)?])
            } else {
                (Player::Second, [agent2.build(Player::First)?, agent1.build(Player::Second)?])
            };

            let record = self.play_game(opening, &agents);
            let game_result = record.result_for(agent1_seat);
            if record.forfeit && game_result == GameResult::Loss {
                result.forfeits += 1;
            }
            result.record(game_result);

            log::debug!("game {} final position:\n{}", game_num + 1, record.final_state);
            if self.config.verbose {
                let seat = if agent1_first { "1st" } else { "2nd" };
                let outcome = match game_result {
                    GameResult::Win => "win",
                    GameResult::Loss => "loss",
                    GameResult::Draw => "draw",
                };
                println!(
                    "Game {}/{}: {} ({}, {} plies) - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    outcome,
                    seat,
                    record.plies,
                    result.wins,
                    result.losses,
                    result.draws
                );
            }
        }

        Ok(result)
    }

    /// Play out `opening` with `agents[p.idx()]` moving for player `p`.
    pub fn play_game(&self, opening: Isolation, agents: &[Arc<dyn Agent<Isolation>>; 2]) -> GameRecord {
        let mut state = opening;

        loop {
            let mover = state.player();
            if state.is_terminal() {
                return GameRecord {
                    winner: Some(mover.other()),
                    forfeit: false,
                    plies: state.ply_count(),
                    final_state: state,
                };
            }
            if state.ply_count() >= self.config.max_plies {
                break;
            }

            let agent = &agents[mover.idx()];
            let next = request_move(agent, &state, self.config.time_per_move)
                .ok_or_else(|| format!("{} published no move", agent.name()))
                .and_then(|mv| state.apply(mv).map_err(|e| format!("{}: {e}", agent.name())));

            match next {
                Ok(next) => state = next,
                Err(reason) => {
                    log::warn!("forfeit at ply {}: {reason}", state.ply_count());
                    return GameRecord {
                        winner: Some(mover.other()),
                        forfeit: true,
                        plies: state.ply_count(),
                        final_state: state,
                    };
                }
            }
        }

        GameRecord {
            winner: None,
            forfeit: false,
            plies: state.ply_count(),
            final_state: state,
        }
    }

    fn random_opening(&mut self) -> Isolation {
        let mut state = Isolation::new();
        for _ in 0..self.config.opening_plies {
            let actions = state.actions();
            match actions.choose(&mut self.rng) {
                Some(&mv) => state = state.result(mv),
                None => break,
            }
            if state.is_terminal() {
                break;
            }
        }
        state
    }
}

/// Quick utility to run a match without time limits
pub fn quick_match(
    agent1: &AgentSpec,
    agent2: &AgentSpec,
    num_games: u32,
) -> Result<MatchResult, TournamentError> {
    let config = MatchConfig {
        num_games,
        verbose: false,
        ..Default::default()
    };
    MatchRunner::new(config).run_match(agent1, agent2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
