//! Minimax with a memo table kept across searches.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tabula_core::GameState;
use tracing::trace;

use crate::error::SearchError;
use crate::search::control::SearchControl;
use crate::search::memo::{MemoEntry, MemoTable};
use crate::search::negamax::{SearchContext, negamax_memo, score_root};
use crate::search::{SearchResult, Strategy, finish, pick_best};

/// Full-width minimax that remembers the exact score of every state it has
/// finished, keyed by [`GameState::key`].
///
/// The table lives as long as the strategy, so later searches in the same
/// game reuse earlier work.
#[derive(Debug, Clone)]
pub struct MemoizedMinimax<G: GameState, R = StdRng> {
    rng: R,
    memo: MemoTable<G::Key>,
}

impl<G: GameState> MemoizedMinimax<G, StdRng> {
    /// Tie-breaking seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Reproducible tie-breaking.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<G: GameState> Default for MemoizedMinimax<G, StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: GameState, R: Rng> MemoizedMinimax<G, R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            memo: MemoTable::new(),
        }
    }

    /// The memo table built so far.
    pub fn memo(&self) -> &MemoTable<G::Key> {
        &self.memo
    }

    /// Forget every memoized score.
    pub fn clear_memo(&mut self) {
        self.memo.clear();
    }
}

impl<G: GameState, R: Rng> Strategy<G> for MemoizedMinimax<G, R> {
    fn search(
        &mut self,
        state: &G,
        control: &SearchControl,
    ) -> Result<SearchResult<G::Move>, SearchError> {
        let mut ctx = SearchContext::new(control);
        let memo = &mut self.memo;
        let scored = score_root(state, &mut ctx, |child, ctx| negamax_memo(child, memo, ctx))?;
        let (best_move, score) = pick_best(&scored, &mut self.rng).ok_or(SearchError::GameOver)?;

        self.memo.store(state.key(), MemoEntry::exact(score));
        trace!(entries = self.memo.len(), "memo table updated");

        Ok(finish("memoize", best_move, score, ctx.stats))
    }

    fn name(&self) -> &'static str {
        "memoize"
    }
}
