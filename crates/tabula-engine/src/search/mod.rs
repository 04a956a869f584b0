//! Strategies that choose moves by searching the game tree.

pub mod control;
pub mod memo;
pub(crate) mod negamax;

mod memoized;
mod minimax;
mod myopic;
mod pruning;
mod random;

use std::fmt;

use rand::Rng;
use rand::seq::IndexedRandom;
use tabula_core::{GameState, Score};
use tracing::debug;

use control::SearchControl;

pub use memoized::MemoizedMinimax;
pub use minimax::Minimax;
pub use myopic::MyopicMinimax;
pub use pruning::PruningMinimax;
pub use random::RandomStrategy;

use crate::error::SearchError;

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Non-terminal states whose children were scored.
    pub expansions: u64,
    /// States entered, root included.
    pub nodes: u64,
    /// States answered from the memo table.
    pub memo_hits: u64,
    /// Sibling scans cut short by pruning.
    pub cutoffs: u64,
    /// States scored by the rough heuristic at the depth limit.
    pub estimates: u64,
}

/// Result of a completed search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult<M> {
    /// Move chosen for the player to move.
    pub best_move: M,
    /// Score of `best_move` from the mover's perspective.
    pub score: Score,
    pub stats: SearchStats,
}

/// A way of choosing moves in games of type `G`.
pub trait Strategy<G: GameState> {
    /// Choose a move for `state.next_player()`.
    ///
    /// Returns [`SearchError::GameOver`] if `state` has no legal moves and
    /// [`SearchError::Stopped`] if `control` fires first.
    fn search(
        &mut self,
        state: &G,
        control: &SearchControl,
    ) -> Result<SearchResult<G::Move>, SearchError>;

    /// Choose a move with no time or node limit.
    fn suggest_move(&mut self, state: &G) -> Result<G::Move, SearchError> {
        let control = SearchControl::unbounded();
        self.search(state, &control).map(|result| result.best_move)
    }

    /// Short identifier used in logs and on the command line.
    fn name(&self) -> &'static str;
}

/// Pick uniformly at random among the moves with the highest score.
///
/// Returns `None` only for an empty slice.
pub(crate) fn pick_best<M: Copy, R: Rng + ?Sized>(
    scored: &[(M, Score)],
    rng: &mut R,
) -> Option<(M, Score)> {
    let best = scored
        .iter()
        .map(|&(_, score)| score)
        .fold(Score::NEG_INFINITY, Score::max);
    let ties: Vec<(M, Score)> = scored
        .iter()
        .copied()
        .filter(|&(_, score)| score == best)
        .collect();
    ties.choose(rng).copied()
}

/// Log a finished search and package its result.
pub(crate) fn finish<M: Copy + fmt::Display>(
    strategy: &'static str,
    best_move: M,
    score: Score,
    stats: SearchStats,
) -> SearchResult<M> {
    debug!(
        strategy,
        best = %best_move,
        score,
        nodes = stats.nodes,
        expansions = stats.expansions,
        memo_hits = stats.memo_hits,
        cutoffs = stats.cutoffs,
        estimates = stats.estimates,
        "search complete"
    );
    SearchResult {
        best_move,
        score,
        stats,
    }
}
