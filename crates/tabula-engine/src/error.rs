//! Error types for search and strategy configuration.

use tabula_core::MoveError;

/// Why a search produced no move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The position has no legal moves.
    #[error("cannot search a finished game")]
    GameOver,

    /// The stop flag, time limit or node limit fired before the search finished.
    #[error("search stopped before completion")]
    Stopped,

    /// A generated move was rejected by the game. Indicates a rules bug.
    #[error("generated move was rejected: {source}")]
    IllegalMove {
        #[from]
        source: MoveError,
    },
}

/// Errors from parsing or validating a strategy configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown strategy '{name}' (expected random, minimax, memoize, prune, overkill or myopic:<depth>)")]
    UnknownStrategy { name: String },

    #[error("myopic depth must be at least 1")]
    ZeroDepth,

    #[error("invalid myopic depth '{found}'")]
    InvalidDepth { found: String },
}
