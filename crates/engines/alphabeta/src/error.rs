//! Error types for search and agent configuration

/// Contract violations detected while searching.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The heuristic was asked to score a finished game
    #[error("evaluator called on a terminal position")]
    TerminalEvaluation,

    /// The root position offers nothing to search
    #[error("no legal moves at the search root")]
    NoLegalMoves,

    /// A fixed-depth search needs at least one ply
    #[error("search depth must be at least 1")]
    InvalidDepth,
}

/// Rejected agent configuration.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_depth must be a positive integer")]
    InvalidMaxDepth,
}
