//! Tournament Runner for Isolation agents
//!
//! This crate provides infrastructure for:
//! - Requesting moves from agents under a wall-clock budget
//! - Running matches between agent configurations
//! - Saving results and generating reports
//!
//! # Usage
//!
//! ```bash
//! # Phase-adaptive agent against the baseline, 150 ms per move
//! cargo run -p tournament -- match --agent1 phase-adaptive --agent2 baseline --games 20 --time-ms 150
//!
//! # Match described by a TOML file
//! cargo run -p tournament -- run --config configs/match.toml
//! ```

mod config;
mod error;
mod match_runner;
mod results;

pub use config::*;
pub use error::*;
pub use match_runner::*;
pub use results::*;
