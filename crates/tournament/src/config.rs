//! Agent and match configuration loaded from TOML.

use alphabeta_engine::{AgentConfig, AlphaBetaAgent, Heuristic, DEFAULT_MAX_DEPTH};
use isolation_core::{Agent, Isolation, Player};
use random_engine::RandomAgent;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::error::TournamentError;
use crate::match_runner::MatchConfig;

/// Kind of agent taking part in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum AgentKind {
    /// Alpha-beta with the mobility-difference heuristic
    Baseline,
    /// Alpha-beta with the phase-adaptive heuristic
    PhaseAdaptive,
    /// Uniformly random legal moves
    Random,
}

/// Seat-independent description of an agent; the seat is chosen per game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSpec {
    pub kind: AgentKind,
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,
    #[serde(default)]
    pub fallback_seed: Option<u64>,
}

fn default_max_depth() -> u32 {
    DEFAULT_MAX_DEPTH
}

impl AgentSpec {
    pub fn new(kind: AgentKind) -> Self {
        Self {
            kind,
            max_depth: DEFAULT_MAX_DEPTH,
            fallback_seed: None,
        }
    }

    /// Label used in reports, e.g. `phase-adaptive`.
    pub fn label(&self) -> &'static str {
        match self.kind {
            AgentKind::Baseline => "baseline",
            AgentKind::PhaseAdaptive => "phase-adaptive",
            AgentKind::Random => "random",
        }
    }

    /// Build the agent for one seat.
    pub fn build(&self, player: Player) -> Result<Arc<dyn Agent<Isolation>>, TournamentError> {
        let heuristic = match self.kind {
            AgentKind::Baseline => Heuristic::Mobility,
            AgentKind::PhaseAdaptive => Heuristic::PhaseAdaptive,
            AgentKind::Random => return Ok(Arc::new(RandomAgent::new(player))),
        };

        let mut config = AgentConfig::new(heuristic, player).with_max_depth(self.max_depth);
        if let Some(seed) = self.fallback_seed {
            config = config.with_fallback_seed(seed);
        }
        Ok(Arc::new(AlphaBetaAgent::new(config)?))
    }
}

/// A complete match description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentConfig {
    #[serde(default = "default_games")]
    pub games: u32,
    /// Wall-clock budget per move; unlimited when absent
    #[serde(default)]
    pub time_per_move_ms: Option<u64>,
    #[serde(default = "default_max_plies")]
    pub max_plies: u32,
    #[serde(default = "default_true")]
    pub alternate_players: bool,
    /// Random plies played before the agents take over
    #[serde(default)]
    pub opening_plies: u32,
    #[serde(default)]
    pub seed: Option<u64>,
    pub agent1: AgentSpec,
    pub agent2: AgentSpec,
}

fn default_games() -> u32 {
    10
}

fn default_max_plies() -> u32 {
    200
}

fn default_true() -> bool {
    true
}

impl TournamentConfig {
    pub fn new(agent1: AgentSpec, agent2: AgentSpec) -> Self {
        Self {
            games: default_games(),
            time_per_move_ms: None,
            max_plies: default_max_plies(),
            alternate_players: true,
            opening_plies: 0,
            seed: None,
            agent1,
            agent2,
        }
    }

    pub fn from_toml(text: &str) -> Result<Self, TournamentError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, TournamentError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Fails if either agent cannot be built.
    pub fn validate(&self) -> Result<(), TournamentError> {
        for spec in [&self.agent1, &self.agent2] {
            spec.build(Player::First)?;
        }
        Ok(())
    }

    pub fn match_config(&self, verbose: bool) -> MatchConfig {
        MatchConfig {
            num_games: self.games,
            time_per_move: self.time_per_move_ms.map(Duration::from_millis),
            max_plies: self.max_plies,
            alternate_players: self.alternate_players,
            opening_plies: self.opening_plies,
            seed: self.seed,
            verbose,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
