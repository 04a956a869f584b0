//! Strategy selection from command-line style names.

use std::fmt;
use std::str::FromStr;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tabula_core::GameState;

use crate::error::ConfigError;
use crate::search::{
    MemoizedMinimax, Minimax, MyopicMinimax, PruningMinimax, RandomStrategy, Strategy,
};

/// Which strategy to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    Random,
    Minimax,
    Memoized,
    Pruning,
    /// Pruning backed by a memo table.
    Overkill,
    Myopic { max_depth: u32 },
}

impl FromStr for StrategyKind {
    type Err = ConfigError;

    /// Accepts `random`, `minimax`, `memoize`, `prune`, `overkill` and
    /// `myopic:<depth>`, case-insensitively.
    fn from_str(s: &str) -> Result<StrategyKind, ConfigError> {
        let lower = s.trim().to_ascii_lowercase();
        if let Some(depth) = lower.strip_prefix("myopic:") {
            let max_depth: u32 = depth.parse().map_err(|_| ConfigError::InvalidDepth {
                found: depth.to_string(),
            })?;
            if max_depth == 0 {
                return Err(ConfigError::ZeroDepth);
            }
            return Ok(StrategyKind::Myopic { max_depth });
        }

        match lower.as_str() {
            "random" => Ok(StrategyKind::Random),
            "minimax" => Ok(StrategyKind::Minimax),
            "memoize" => Ok(StrategyKind::Memoized),
            "prune" => Ok(StrategyKind::Pruning),
            "overkill" => Ok(StrategyKind::Overkill),
            _ => Err(ConfigError::UnknownStrategy {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::Random => write!(f, "random"),
            StrategyKind::Minimax => write!(f, "minimax"),
            StrategyKind::Memoized => write!(f, "memoize"),
            StrategyKind::Pruning => write!(f, "prune"),
            StrategyKind::Overkill => write!(f, "overkill"),
            StrategyKind::Myopic { max_depth } => write!(f, "myopic:{max_depth}"),
        }
    }
}

/// A strategy kind plus an optional tie-breaking seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategyConfig {
    pub kind: StrategyKind,
    pub seed: Option<u64>,
}

impl StrategyConfig {
    pub fn new(kind: StrategyKind) -> Self {
        Self { kind, seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build a fresh strategy instance for games of type `G`.
    pub fn build<G: GameState + 'static>(&self) -> Result<Box<dyn Strategy<G>>, ConfigError> {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let strategy: Box<dyn Strategy<G>> = match self.kind {
            StrategyKind::Random => Box::new(RandomStrategy::with_rng(rng)),
            StrategyKind::Minimax => Box::new(Minimax::with_rng(rng)),
            StrategyKind::Memoized => Box::new(MemoizedMinimax::<G, _>::with_rng(rng)),
            StrategyKind::Pruning => Box::new(PruningMinimax::<G>::new()),
            StrategyKind::Overkill => Box::new(PruningMinimax::<G>::with_memo()),
            StrategyKind::Myopic { max_depth } => {
                Box::new(MyopicMinimax::with_rng(max_depth, rng)?)
            }
        };
        Ok(strategy)
    }
}

impl From<StrategyKind> for StrategyConfig {
    fn from(kind: StrategyKind) -> Self {
        Self::new(kind)
    }
}
