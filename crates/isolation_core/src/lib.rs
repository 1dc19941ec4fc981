//! Knight's Isolation core
//!
//! Game rules, the game-state contract consumed by search engines, and the
//! agent seam the tournament harness talks to.

pub mod agent;
pub mod board;
pub mod error;
pub mod game;
pub mod types;

pub use agent::*;
pub use board::*;
pub use error::*;
pub use game::*;
pub use types::*;
