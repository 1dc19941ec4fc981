//! Error types for tournament configuration and result storage

use alphabeta_engine::ConfigError;

#[derive(thiserror::Error, Debug)]
pub enum TournamentError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid results file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid agent: {0}")]
    Agent(#[from] ConfigError),
}
