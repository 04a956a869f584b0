//! Match driver errors.

use tabula_core::{GridError, MoveError, NotationError};
use tabula_engine::{ConfigError, SearchError};

/// Errors that can occur while setting up or playing a match.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    /// No game name was given.
    #[error("missing game (expected subtract-square:<total>, tictactoe[:n] or tippy[:n])")]
    MissingGame,

    /// The game name is not recognised.
    #[error("unknown game: {name}")]
    UnknownGame { name: String },

    /// A flag was given without its value.
    #[error("missing value for {flag}")]
    MissingValue { flag: String },

    /// A flag value could not be parsed.
    #[error("invalid value for {flag}: {value}")]
    InvalidValue { flag: String, value: String },

    /// An argument that is not a known flag.
    #[error("unexpected argument: {arg}")]
    UnexpectedArgument { arg: String },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid position: {0}")]
    Notation(#[from] NotationError),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("move rejected: {0}")]
    Move(#[from] MoveError),

    #[error("search failed: {0}")]
    Search(#[from] SearchError),

    /// A strategy proposed a move outside the legal-move set.
    #[error("{strategy} suggested illegal move {mv} in {position}")]
    IllegalSuggestion {
        strategy: &'static str,
        mv: String,
        position: String,
    },
}
