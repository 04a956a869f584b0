//! Minimax strategies for tabula games.

pub mod config;
pub mod error;
pub mod search;

pub use config::{StrategyConfig, StrategyKind};
pub use error::{ConfigError, SearchError};
pub use search::control::SearchControl;
pub use search::memo::{Bound, MemoEntry, MemoTable};
pub use search::{
    MemoizedMinimax, Minimax, MyopicMinimax, PruningMinimax, RandomStrategy, SearchResult,
    SearchStats, Strategy,
};
