//! Match results storage and reporting

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::TournamentConfig;
use crate::error::TournamentError;

/// Result of a single game
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

/// Result of a match (multiple games)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    /// Games lost by agent1 for failing to produce a legal move
    #[serde(default)]
    pub forfeits: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from agent1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

/// Stored outcome of one configured match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentResults {
    pub config: TournamentConfig,
    pub result: MatchResult,
}

impl TournamentResults {
    pub fn new(config: TournamentConfig, result: MatchResult) -> Self {
        Self { config, result }
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<(), TournamentError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self, TournamentError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let config = &self.config;
        let result = &self.result;
        let mut report = String::new();
        report.push_str(&format!(
            "=== Match: {} vs {} ===\n\n",
            config.agent1.label(),
            config.agent2.label()
        ));
        let budget = match config.time_per_move_ms {
            Some(ms) => format!("{ms} ms/move"),
            None => "no time limit".to_string(),
        };
        report.push_str(&format!(
            "Config: {} games, {}, depth cap {}/{}\n\n",
            config.games, budget, config.agent1.max_depth, config.agent2.max_depth
        ));
        report.push_str(&format!(
            "{:<16} vs {:<16} {:>5}-{:<5}-{:<5}\n",
            "Agent 1", "Agent 2", "W", "L", "D"
        ));
        report.push_str(&"-".repeat(56));
        report.push('\n');
        report.push_str(&format!(
            "{:<16} vs {:<16} {:>5}-{:<5}-{:<5}\n",
            config.agent1.label(),
            config.agent2.label(),
            result.wins,
            result.losses,
            result.draws
        ));
        report.push_str(&format!(
            "\nWin rate: {:.1}% ({} forfeits)\n",
            result.score() * 100.0,
            result.forfeits
        ));
        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
